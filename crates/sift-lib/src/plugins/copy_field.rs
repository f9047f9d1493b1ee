use indexmap::IndexMap;
use sift_core::{Group, GroupKind, SyntaxNode};

use crate::pipeline::{Filter, FilterContext, Plugin};

/// Searches a term's field and a second field holding a copy of it.
///
/// Terms without a field count as being in the default field.
#[derive(Debug, Clone)]
pub struct CopyFieldPlugin {
    /// source -> destination
    map: IndexMap<String, String>,
    group: Option<GroupKind>,
}

impl CopyFieldPlugin {
    pub const NAME: &'static str = "copy_field";

    pub fn new<I, S, D>(map: I) -> Self
    where
        I: IntoIterator<Item = (S, D)>,
        S: Into<String>,
        D: Into<String>,
    {
        Self {
            map: map
                .into_iter()
                .map(|(s, d)| (s.into(), d.into()))
                .collect(),
            group: Some(GroupKind::Or),
        }
    }

    /// Wraps each original and its copy in a group of this kind.
    /// `None` places the copy next to the original instead.
    pub fn group(mut self, kind: Option<GroupKind>) -> Self {
        self.group = kind;
        self
    }

    /// Also copies in the reverse direction of every mapping.
    ///
    /// A reversed mapping replaces a forward mapping with the same source.
    pub fn mirror(mut self) -> Self {
        let reversed: Vec<(String, String)> = self
            .map
            .iter()
            .map(|(s, d)| (d.clone(), s.clone()))
            .collect();
        for (source, dest) in reversed {
            self.map.insert(source, dest);
        }
        self
    }

    pub fn destination(&self, source: &str) -> Option<&str> {
        self.map.get(source).map(String::as_str)
    }
}

impl Plugin for CopyFieldPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn filters(&self) -> Vec<Filter> {
        let map = self.map.clone();
        let kind = self.group;
        vec![Filter::new("copy_field", 109, move |cx, group| {
            copy_fields(cx, &map, kind, group)
        })]
    }
}

fn copy_fields(
    cx: &FilterContext<'_>,
    map: &IndexMap<String, String>,
    kind: Option<GroupKind>,
    group: Group,
) -> Group {
    let mut out = group.empty_copy();
    for node in group.children {
        let node = match node {
            SyntaxNode::Group(g) => SyntaxNode::Group(copy_fields(cx, map, kind, g)),
            SyntaxNode::Text(text) => {
                let dest = text
                    .field
                    .as_deref()
                    .or(cx.default_field())
                    .and_then(|f| map.get(f));
                let Some(dest) = dest else {
                    out.push(text);
                    continue;
                };
                let mut copy = text.clone();
                copy.set_field(dest, true);
                match kind {
                    Some(kind) => {
                        SyntaxNode::Group(Group::with_children(kind, vec![text.into(), copy.into()]))
                    }
                    None => {
                        out.push(text);
                        SyntaxNode::Text(copy)
                    }
                }
            }
            other => other,
        };
        out.push(node);
    }
    out
}
