use sift_core::{Group, Marker, MarkerKind, SyntaxNode};

use super::map_nested;
use crate::Result;
use crate::diagnostics::DiagnosticKind;
use crate::pipeline::{Filter, FilterContext, Plugin, Recognizers, entry};
use crate::recognize::{RegexRecognizer, term_start};

/// `field:term` scoping.
///
/// Runs at priority 100, before whitespace removal, so `title: hello`
/// leaves the field name dangling instead of reaching across the space.
#[derive(Debug, Clone)]
pub struct FieldsPlugin {
    pattern: String,
    reject_unknown: bool,
}

impl FieldsPlugin {
    pub const NAME: &'static str = "fields";

    pub fn new() -> Self {
        Self {
            pattern: r"(?P<text>\w+):".to_owned(),
            reject_unknown: true,
        }
    }

    /// Replaces the pattern. The field name is read from the `text` group.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Whether names missing from the schema are read as text.
    /// Has no effect without a schema.
    pub fn reject_unknown(mut self, value: bool) -> Self {
        self.reject_unknown = value;
        self
    }
}

impl Default for FieldsPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for FieldsPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn recognizers(&self) -> Result<Recognizers> {
        let recognizer = RegexRecognizer::new("field_name", &self.pattern, |m| {
            let name = m.group("text")?.to_owned();
            Some(SyntaxNode::Marker(Marker::new(
                MarkerKind::FieldName(name),
                m.text(),
                m.span(),
            )))
        })?
        .require_group("text")?
        .with_guard(term_start);
        Ok(vec![entry(recognizer, 0)])
    }

    fn filters(&self) -> Vec<Filter> {
        let reject = self.reject_unknown;
        vec![Filter::new("fields", 100, move |cx, group| {
            assign_fields(cx, reject, group)
        })]
    }
}

fn assign_fields(cx: &mut FilterContext<'_>, reject: bool, group: Group) -> Group {
    let mut group = map_nested(group, &mut |g| assign_fields(cx, reject, g));
    let children = std::mem::take(&mut group.children);
    let children = if reject && cx.schema().is_some() {
        reject_unknown(cx, children)
    } else {
        children
    };
    group.children = attach(cx, children);
    group
}

/// Folds field names the schema does not know back into text.
fn reject_unknown(cx: &mut FilterContext<'_>, children: Vec<SyntaxNode>) -> Vec<SyntaxNode> {
    let Some(schema) = cx.schema() else {
        return children;
    };
    let mut out: Vec<SyntaxNode> = Vec::with_capacity(children.len());
    let mut pending: Option<Marker> = None;

    for mut node in children {
        if let Some(marker) = pending.take() {
            if let SyntaxNode::Text(text) = &mut node
                && text.prepend_text(&marker.text)
            {
                text.extend_span(marker.span);
                out.push(node);
                continue;
            }
            out.push(marker.demote());
        }
        match node {
            SyntaxNode::Marker(m) => {
                let unknown = match &m.kind {
                    MarkerKind::FieldName(name) if !schema.has_field(name) => Some(name.clone()),
                    _ => None,
                };
                match unknown {
                    Some(name) => {
                        cx.report(DiagnosticKind::UnknownField, m.span)
                            .message(name)
                            .emit();
                        pending = Some(m);
                    }
                    None => out.push(SyntaxNode::Marker(m)),
                }
            }
            other => out.push(other),
        }
    }
    if let Some(marker) = pending {
        out.push(marker.demote());
    }
    out
}

/// Scans from the end, giving each field-capable node the name of a field
/// marker directly before it. Markers left over are demoted.
fn attach(cx: &mut FilterContext<'_>, mut children: Vec<SyntaxNode>) -> Vec<SyntaxNode> {
    let mut out = Vec::with_capacity(children.len());
    while let Some(node) = children.pop() {
        match node {
            SyntaxNode::Marker(m) if matches!(m.kind, MarkerKind::FieldName(_)) => {
                cx.report(DiagnosticKind::DanglingField, m.span).emit();
                out.push(m.demote());
            }
            mut node => {
                if node.has_field()
                    && let Some(name) = children.last().and_then(SyntaxNode::field_marker_name)
                {
                    node.set_field(name, false);
                    if let (SyntaxNode::Text(text), Some(span)) =
                        (&mut node, children.last().and_then(SyntaxNode::span))
                    {
                        text.extend_span(span);
                    }
                    children.pop();
                }
                out.push(node);
            }
        }
    }
    out.reverse();
    out
}
