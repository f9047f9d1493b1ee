use rowan::TextRange;
use sift_core::{Group, GroupKind, Marker, MarkerKind, SyntaxNode};

use crate::Result;
use crate::diagnostics::DiagnosticKind;
use crate::pipeline::{Filter, FilterContext, Plugin, Recognizers, entry};
use crate::recognize::RegexRecognizer;

/// Parenthetical grouping.
#[derive(Debug, Clone)]
pub struct GroupPlugin {
    open: String,
    close: String,
}

impl GroupPlugin {
    pub const NAME: &'static str = "group";

    pub fn new() -> Self {
        Self::with_brackets("(", ")")
    }

    /// Uses other literal bracket text, e.g. `[` and `]`.
    pub fn with_brackets(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

impl Default for GroupPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for GroupPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn recognizers(&self) -> Result<Recognizers> {
        let open = RegexRecognizer::literal("open_bracket", &self.open, |m| {
            Some(bracket(MarkerKind::OpenBracket, m.text(), m.span()))
        })?;
        let close = RegexRecognizer::literal("close_bracket", &self.close, |m| {
            Some(bracket(MarkerKind::CloseBracket, m.text(), m.span()))
        })?;
        Ok(vec![entry(open, 0), entry(close, 0)])
    }

    fn filters(&self) -> Vec<Filter> {
        vec![Filter::new("group", 0, build_groups)]
    }
}

fn bracket(kind: MarkerKind, text: &str, span: TextRange) -> SyntaxNode {
    SyntaxNode::Marker(Marker::new(kind, text, span))
}

/// Nests the flat sequence according to bracket markers.
///
/// Unclosed levels are flattened into the top level in stack order and
/// unmatched close brackets are dropped. A top level holding a single group
/// is replaced by that group, which takes over the top-level boost.
fn build_groups(cx: &mut FilterContext<'_>, group: Group) -> Group {
    let mut top = group.empty_copy();
    let mut stack: Vec<(Group, TextRange)> = Vec::new();

    for node in group.children {
        match node.as_marker().map(|m| &m.kind) {
            Some(MarkerKind::OpenBracket) => {
                let span = node.span().unwrap_or_default();
                stack.push((Group::new(GroupKind::Plain), span));
            }
            Some(MarkerKind::CloseBracket) => match stack.pop() {
                Some((done, _)) => current(&mut top, &mut stack).push(done),
                None => {
                    let span = node.span().unwrap_or_default();
                    cx.report(DiagnosticKind::UnmatchedCloseBracket, span).emit();
                }
            },
            _ => current(&mut top, &mut stack).push(node),
        }
    }

    for (level, open) in stack {
        cx.report(DiagnosticKind::UnclosedGroup, open)
            .message("contents merged into the enclosing group")
            .emit();
        top.children.extend(level.children);
    }

    if top.len() == 1 && matches!(top.children[0], SyntaxNode::Group(_)) {
        let boost = top.boost;
        if let Some(SyntaxNode::Group(mut inner)) = top.children.pop() {
            inner.boost = boost;
            return inner;
        }
    }
    top
}

fn current<'a>(top: &'a mut Group, stack: &'a mut [(Group, TextRange)]) -> &'a mut Group {
    match stack.last_mut() {
        Some((group, _)) => group,
        None => top,
    }
}
