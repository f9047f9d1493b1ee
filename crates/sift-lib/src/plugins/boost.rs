use sift_core::{Group, Marker, MarkerKind, SyntaxNode, TextKind, TextNode};

use super::map_nested;
use crate::Result;
use crate::diagnostics::DiagnosticKind;
use crate::pipeline::{Filter, FilterContext, Plugin, Recognizers, entry};
use crate::recognize::RegexRecognizer;

/// `term^2` boost suffixes.
///
/// Markers without a boostable node directly before them are demoted at
/// priority 0. The rest are applied at 700, after operators have grouped
/// the tree, so `(a OR b)^2` boosts the group.
#[derive(Debug, Clone)]
pub struct BoostPlugin {
    pattern: String,
}

impl BoostPlugin {
    pub const NAME: &'static str = "boost";

    pub fn new() -> Self {
        Self {
            pattern: r"\^(?P<boost>[0-9]*(?:\.[0-9]+)?)(?P<peek>\s|\)|$)".to_owned(),
        }
    }

    /// Replaces the pattern. The numeric text is read from the `boost` group.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }
}

impl Default for BoostPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for BoostPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn recognizers(&self) -> Result<Recognizers> {
        let recognizer = RegexRecognizer::new("boost", &self.pattern, |m| {
            let value = m.group("boost")?.to_owned();
            Some(SyntaxNode::Marker(Marker::new(
                MarkerKind::Boost(value),
                m.text(),
                m.span(),
            )))
        })?
        .require_group("boost")?;
        Ok(vec![entry(recognizer, 0)])
    }

    fn filters(&self) -> Vec<Filter> {
        vec![
            Filter::new("clean_boost", 0, clean_boost),
            Filter::new("apply_boost", 700, apply_boost),
        ]
    }
}

fn clean_boost(cx: &mut FilterContext<'_>, group: Group) -> Group {
    let group = map_nested(group, &mut |g| clean_boost(cx, g));
    let mut out = group.empty_copy();
    let mut target = false;
    for node in group.children {
        let boostable = node.has_boost();
        match node {
            SyntaxNode::Marker(m) if matches!(m.kind, MarkerKind::Boost(_)) && !target => {
                cx.report(DiagnosticKind::BoostWithoutTarget, m.span).emit();
                out.push(m.demote());
            }
            other => out.push(other),
        }
        target = boostable;
    }
    out
}

fn apply_boost(cx: &mut FilterContext<'_>, group: Group) -> Group {
    let group = map_nested(group, &mut |g| apply_boost(cx, g));
    let mut out = group.empty_copy();
    for node in group.children {
        let (value, text, span) = match node {
            SyntaxNode::Marker(Marker {
                kind: MarkerKind::Boost(value),
                text,
                span,
            }) => (value, text, span),
            other => {
                out.push(other);
                continue;
            }
        };

        let has_target = out.children.last().is_some_and(SyntaxNode::has_boost);
        let factor = value.parse::<f32>();
        match (has_target, factor) {
            (true, Ok(factor)) => {
                if let Some(prev) = out.children.last_mut() {
                    prev.apply_boost(factor);
                }
                continue;
            }
            (true, Err(_)) => cx
                .report(DiagnosticKind::InvalidBoost, span)
                .message(text.as_str())
                .emit(),
            (false, _) => cx.report(DiagnosticKind::BoostWithoutTarget, span).emit(),
        }
        out.push(TextNode::new(TextKind::Word(text)).with_span(span));
    }
    out
}
