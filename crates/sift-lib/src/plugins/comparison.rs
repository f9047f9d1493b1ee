use sift_core::{Group, Marker, MarkerKind, Relation, SyntaxNode, TextKind, TextNode};

use super::map_nested;
use crate::Result;
use crate::diagnostics::DiagnosticKind;
use crate::pipeline::{Filter, FilterContext, Plugin, Recognizers, entry};
use crate::recognize::{RegexRecognizer, after_field};

/// `field:<value` shorthand for open-ended ranges.
///
/// Needs the fields plugin: the filter runs at 99, while field-name
/// markers are still in the sequence.
#[derive(Debug, Clone)]
pub struct ComparisonPlugin {
    pattern: String,
}

impl ComparisonPlugin {
    pub const NAME: &'static str = "comparison";

    pub fn new() -> Self {
        Self {
            pattern: r"(?P<rel><=|>=|=<|=>|<|>)".to_owned(),
        }
    }
}

impl Default for ComparisonPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for ComparisonPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn recognizers(&self) -> Result<Recognizers> {
        let recognizer = RegexRecognizer::new("comparison", &self.pattern, |m| {
            let rel = Relation::from_symbol(m.group("rel")?)?;
            Some(SyntaxNode::Marker(Marker::new(
                MarkerKind::Comparison(rel),
                m.text(),
                m.span(),
            )))
        })?
        .require_group("rel")?
        .with_guard(after_field);
        Ok(vec![entry(recognizer, 0)])
    }

    fn filters(&self) -> Vec<Filter> {
        vec![Filter::new("comparison", 99, to_ranges)]
    }
}

fn to_ranges(cx: &mut FilterContext<'_>, group: Group) -> Group {
    let group = map_nested(group, &mut |g| to_ranges(cx, g));
    let mut out = group.empty_copy();
    let mut rest = group.children.into_iter().peekable();

    while let Some(node) = rest.next() {
        let (rel, marker) = match node {
            SyntaxNode::Marker(m) => match m.kind {
                MarkerKind::Comparison(rel) => (rel, m),
                _ => {
                    out.push(SyntaxNode::Marker(m));
                    continue;
                }
            },
            other => {
                out.push(other);
                continue;
            }
        };
        let span = marker.span;
        let after_field = out
            .children
            .last()
            .is_some_and(|prev| prev.field_marker_name().is_some());
        let value = rest.peek().and_then(SyntaxNode::as_text);

        match value.filter(|_| after_field).and_then(|v| Some((v.text()?, v))) {
            Some((text, value)) => {
                let mut range = TextNode::new(TextKind::Range(rel.to_range(text)));
                range.boost = value.boost;
                range.extend_span(span);
                if let Some(value_span) = value.span {
                    range.extend_span(value_span);
                }
                rest.next();
                out.push(range);
            }
            None => {
                cx.report(DiagnosticKind::DanglingComparison, span).emit();
                out.push(marker.demote());
            }
        }
    }
    out
}
