//! Plugins that only contribute leaf recognizers.

use sift_core::{DEFAULT_SLOP, SyntaxNode, TermRange, TextKind, TextNode};

use crate::Result;
use crate::pipeline::{Plugin, Recognizers, entry};
use crate::recognize::{Matched, RegexRecognizer};

fn leaf(kind: TextKind, m: &Matched<'_>) -> SyntaxNode {
    SyntaxNode::Text(TextNode::new(kind).with_span(m.span()))
}

/// `'literal text'` as a single word.
#[derive(Debug, Clone)]
pub struct SingleQuotePlugin {
    pattern: String,
}

impl SingleQuotePlugin {
    pub const NAME: &'static str = "single_quote";

    pub fn new() -> Self {
        Self {
            pattern: r#"\b{start-half}'(?P<text>.*?)'(?P<peek>\s|[\])}]|$)"#.to_owned(),
        }
    }
}

impl Default for SingleQuotePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SingleQuotePlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn recognizers(&self) -> Result<Recognizers> {
        let recognizer = RegexRecognizer::new("single_quote", &self.pattern, |m| {
            let text = m.group("text")?;
            Some(leaf(TextKind::Word(text.to_owned()), m))
        })?
        .require_group("text")?;
        Ok(vec![entry(recognizer, 0)])
    }
}

/// `pre*` as a prefix term.
#[derive(Debug, Clone)]
pub struct PrefixPlugin {
    pattern: String,
}

impl PrefixPlugin {
    pub const NAME: &'static str = "prefix";

    pub fn new() -> Self {
        Self {
            pattern: r#"(?P<text>[^\s*:()"]+)\*(?P<peek>\s|\)|$)"#.to_owned(),
        }
    }
}

impl Default for PrefixPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for PrefixPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn recognizers(&self) -> Result<Recognizers> {
        let recognizer = RegexRecognizer::new("prefix", &self.pattern, |m| {
            let text = m.group("text")?;
            Some(leaf(TextKind::Prefix(text.to_owned()), m))
        })?
        .require_group("text")?;
        Ok(vec![entry(recognizer, 0)])
    }
}

/// Terms with embedded `*` or `?`, including the Armenian, Arabic and
/// Ethiopic question marks.
#[derive(Debug, Clone)]
pub struct WildcardPlugin {
    pattern: String,
}

impl WildcardPlugin {
    pub const NAME: &'static str = "wildcard";

    pub fn new() -> Self {
        Self {
            pattern: r"\w*[*?՞؟፧](?:\w|[*?՞؟፧])*".to_owned(),
        }
    }
}

impl Default for WildcardPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for WildcardPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn recognizers(&self) -> Result<Recognizers> {
        let recognizer = RegexRecognizer::new("wildcard", &self.pattern, |m| {
            Some(leaf(TextKind::Wildcard(m.text().to_owned()), m))
        })?;
        Ok(vec![entry(recognizer, 0)])
    }
}

/// `"a phrase"` with an optional `~slop` suffix.
#[derive(Debug, Clone)]
pub struct PhrasePlugin {
    pattern: String,
    slop: u32,
}

impl PhrasePlugin {
    pub const NAME: &'static str = "phrase";

    pub fn new() -> Self {
        Self {
            pattern: r#""(?P<text>[^"]*)"(?:~(?P<slop>[0-9]+))?"#.to_owned(),
            slop: DEFAULT_SLOP,
        }
    }

    /// Slop used when the query gives none.
    pub fn default_slop(mut self, slop: u32) -> Self {
        self.slop = slop;
        self
    }
}

impl Default for PhrasePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for PhrasePlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn recognizers(&self) -> Result<Recognizers> {
        let default_slop = self.slop;
        let recognizer = RegexRecognizer::new("phrase", &self.pattern, move |m| {
            let text = m.group("text")?.to_owned();
            let slop = m
                .group("slop")
                .and_then(|s| s.parse().ok())
                .unwrap_or(default_slop);
            Some(leaf(TextKind::Phrase { text, slop }, m))
        })?
        .require_group("text")?;
        Ok(vec![entry(recognizer, 0)])
    }
}

/// `[start TO end]`, with `{`/`}` marking an exclusive side.
#[derive(Debug, Clone)]
pub struct RangePlugin {
    pattern: String,
    excl_open: char,
    excl_close: char,
}

impl RangePlugin {
    pub const NAME: &'static str = "range";

    pub fn new() -> Self {
        Self {
            pattern: concat!(
                r"(?P<open>[\[{])",
                r"(?P<start>'[^']*?'\s+|[^\]}]+?)?",
                r"(?i:to)",
                r"(?P<end>\s+'[^']*?'|[^\]}]+?)?",
                r"(?P<close>[\]}])",
            )
            .to_owned(),
            excl_open: '{',
            excl_close: '}',
        }
    }

    /// Replaces the pattern. It must define `open` and `close` groups and
    /// may define `start` and `end`.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn exclusive(mut self, open: char, close: char) -> Self {
        self.excl_open = open;
        self.excl_close = close;
        self
    }
}

impl Default for RangePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for RangePlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn recognizers(&self) -> Result<Recognizers> {
        let (excl_open, excl_close) = (self.excl_open, self.excl_close);
        let recognizer = RegexRecognizer::new("range", &self.pattern, move |m| {
            let range = TermRange {
                start: m.group("start").and_then(bound),
                end: m.group("end").and_then(bound),
                start_excl: m.group("open")?.starts_with(excl_open),
                end_excl: m.group("close")?.starts_with(excl_close),
            };
            Some(leaf(TextKind::Range(range), m))
        })?
        .require_group("open")?
        .require_group("close")?;
        Ok(vec![entry(recognizer, 1)])
    }
}

/// Trims a range bound and strips enclosing single quotes. Empty means open.
fn bound(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('\'')
        .and_then(|t| t.strip_suffix('\''))
        .unwrap_or(trimmed);
    (!unquoted.is_empty()).then(|| unquoted.to_owned())
}
