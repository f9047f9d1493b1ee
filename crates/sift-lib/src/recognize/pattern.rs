//! Regex-backed recognizer.
//!
//! Patterns run on the meta engine, anchored at the cursor. The engine has
//! no look-around, so two substitutes exist:
//! - a capture group named `peek` must match but is not consumed
//! - a [`Guard`] inspects the character before the cursor

use std::fmt;

use regex_automata::meta::Regex;
use regex_automata::util::captures::Captures;
use regex_automata::{Anchored, Input, PatternID};
use rowan::TextRange;
use sift_core::SyntaxNode;

use super::{Recognizer, text_range};
use crate::{Error, Result};

/// Name of the trailing-context group.
const PEEK: &str = "peek";

/// Predicate over the character before the cursor (`None` at query start).
pub type Guard = fn(Option<char>) -> bool;

type Build = Box<dyn Fn(&Matched<'_>) -> Option<SyntaxNode> + Send + Sync>;

/// At query start, after whitespace, or right after `(`, `+` or `-`.
pub fn term_start(prev: Option<char>) -> bool {
    prev.is_none_or(|c| c.is_whitespace() || matches!(c, '(' | '+' | '-'))
}

/// Directly after a field separator.
pub fn after_field(prev: Option<char>) -> bool {
    prev == Some(':')
}

pub struct RegexRecognizer {
    name: String,
    pattern: String,
    regex: Regex,
    guard: Option<Guard>,
    build: Build,
}

impl RegexRecognizer {
    /// Compiles `pattern`. `build` turns a match into a node, or declines it.
    pub fn new<F>(name: impl Into<String>, pattern: &str, build: F) -> Result<Self>
    where
        F: Fn(&Matched<'_>) -> Option<SyntaxNode> + Send + Sync + 'static,
    {
        let regex = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_owned(),
            source: Box::new(source),
        })?;
        Ok(Self {
            name: name.into(),
            pattern: pattern.to_owned(),
            regex,
            guard: None,
            build: Box::new(build),
        })
    }

    /// Matches `text` verbatim.
    pub fn literal<F>(name: impl Into<String>, text: &str, build: F) -> Result<Self>
    where
        F: Fn(&Matched<'_>) -> Option<SyntaxNode> + Send + Sync + 'static,
    {
        Self::new(name, &regex_syntax::escape(text), build)
    }

    pub fn with_guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Fails unless the pattern defines a capture group called `group`.
    pub fn require_group(self, group: &str) -> Result<Self> {
        if self
            .regex
            .group_info()
            .to_index(PatternID::ZERO, group)
            .is_none()
        {
            return Err(Error::MissingGroup {
                pattern: self.pattern,
                group: group.to_owned(),
            });
        }
        Ok(self)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Recognizer for RegexRecognizer {
    fn name(&self) -> &str {
        &self.name
    }

    fn recognize(&self, source: &str, pos: usize) -> Option<(SyntaxNode, usize)> {
        if let Some(guard) = self.guard {
            let prev = source.get(..pos).and_then(|s| s.chars().next_back());
            if !guard(prev) {
                return None;
            }
        }

        let input = Input::new(source).range(pos..).anchored(Anchored::Yes);
        let mut caps = self.regex.create_captures();
        self.regex.search_captures(&input, &mut caps);
        let whole = caps.get_match()?;
        let end = caps
            .get_group_by_name(PEEK)
            .map_or(whole.end(), |peek| peek.start);
        if end <= pos {
            return None;
        }

        let matched = Matched {
            source,
            caps: &caps,
            start: pos,
            end,
        };
        let node = (self.build)(&matched)?;
        Some((node, end))
    }
}

impl fmt::Debug for RegexRecognizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegexRecognizer")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .field("guarded", &self.guard.is_some())
            .finish()
    }
}

/// A successful match, excluding any `peek` context.
pub struct Matched<'a> {
    source: &'a str,
    caps: &'a Captures,
    start: usize,
    end: usize,
}

impl<'a> Matched<'a> {
    /// Consumed text.
    pub fn text(&self) -> &'a str {
        &self.source[self.start..self.end]
    }

    pub fn span(&self) -> TextRange {
        text_range(self.start, self.end)
    }

    /// Text of a named group, if it participated in the match.
    pub fn group(&self, name: &str) -> Option<&'a str> {
        self.caps
            .get_group_by_name(name)
            .map(|span| &self.source[span.range()])
    }

    pub fn group_span(&self, name: &str) -> Option<TextRange> {
        self.caps
            .get_group_by_name(name)
            .map(|span| text_range(span.start, span.end))
    }
}
