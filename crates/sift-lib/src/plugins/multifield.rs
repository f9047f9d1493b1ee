use indexmap::IndexMap;
use sift_core::{DEFAULT_BOOST, Group, GroupKind, SyntaxNode};

use crate::pipeline::{Filter, Plugin};

/// Searches unfielded terms in several fields at once.
///
/// `x` with fields `[title, body]` becomes `(title:x OR body:x)`.
#[derive(Debug, Clone)]
pub struct MultifieldPlugin {
    fields: Vec<String>,
    boosts: IndexMap<String, f32>,
    group: GroupKind,
}

impl MultifieldPlugin {
    pub const NAME: &'static str = "multifield";

    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            boosts: IndexMap::new(),
            group: GroupKind::Or,
        }
    }

    pub fn boost(mut self, field: impl Into<String>, boost: f32) -> Self {
        self.boosts.insert(field.into(), boost);
        self
    }

    pub fn boosts(mut self, boosts: IndexMap<String, f32>) -> Self {
        self.boosts = boosts;
        self
    }

    /// Kind of the group holding the copies.
    pub fn group(mut self, kind: GroupKind) -> Self {
        self.group = kind;
        self
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl Plugin for MultifieldPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn filters(&self) -> Vec<Filter> {
        let targets: Vec<(String, f32)> = self
            .fields
            .iter()
            .map(|f| (f.clone(), self.boosts.get(f).copied().unwrap_or(DEFAULT_BOOST)))
            .collect();
        let kind = self.group;
        vec![Filter::new("multifield", 110, move |_, group| {
            expand(&targets, kind, group)
        })]
    }
}

fn expand(targets: &[(String, f32)], kind: GroupKind, group: Group) -> Group {
    if targets.is_empty() {
        return group;
    }
    group.map_children(|node| match node {
        SyntaxNode::Group(g) => SyntaxNode::Group(expand(targets, kind, g)),
        SyntaxNode::Text(text) if text.field.is_none() => {
            let copies = targets
                .iter()
                .map(|(field, boost)| {
                    let mut copy = text.clone();
                    copy.set_field(field, true);
                    copy.boost = *boost;
                    SyntaxNode::Text(copy)
                })
                .collect();
            SyntaxNode::Group(Group::with_children(kind, copies))
        }
        other => other,
    })
}
