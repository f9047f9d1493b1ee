use std::sync::Arc;

use indexmap::IndexMap;
use sift_core::{Group, MarkerKind, SyntaxNode};

use super::map_nested;
use crate::pipeline::{Filter, Plugin};

/// Alternative names for fields, e.g. `t:` for `title:`.
#[derive(Debug, Clone, Default)]
pub struct FieldAliasPlugin {
    /// alias -> canonical name
    reverse: IndexMap<String, String>,
}

impl FieldAliasPlugin {
    pub const NAME: &'static str = "field_alias";

    pub fn new() -> Self {
        Self::default()
    }

    /// Builds from a canonical name -> aliases map.
    pub fn from_map<I, A>(map: I) -> Self
    where
        I: IntoIterator<Item = (String, A)>,
        A: IntoIterator<Item = String>,
    {
        map.into_iter()
            .fold(Self::new(), |plugin, (canonical, aliases)| {
                plugin.alias(canonical, aliases)
            })
    }

    pub fn alias<I, S>(mut self, canonical: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let canonical = canonical.into();
        for alias in aliases {
            self.reverse.insert(alias.into(), canonical.clone());
        }
        self
    }

    pub fn canonical(&self, name: &str) -> Option<&str> {
        self.reverse.get(name).map(String::as_str)
    }
}

impl Plugin for FieldAliasPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn filters(&self) -> Vec<Filter> {
        let reverse = Arc::new(self.reverse.clone());
        let for_fields = Arc::clone(&reverse);
        vec![
            Filter::new("alias_markers", 90, move |_, group| {
                rename_markers(&reverse, group)
            }),
            Filter::new("alias_fields", 105, move |_, group| {
                rename_fields(&for_fields, group)
            }),
        ]
    }
}

/// Renames field-name markers so unknown-field checks see canonical names.
fn rename_markers(reverse: &IndexMap<String, String>, group: Group) -> Group {
    let group = map_nested(group, &mut |g| rename_markers(reverse, g));
    group.map_children(|mut node| {
        if let SyntaxNode::Marker(marker) = &mut node
            && let MarkerKind::FieldName(name) = &mut marker.kind
            && let Some(canonical) = reverse.get(name.as_str())
        {
            *name = canonical.clone();
        }
        node
    })
}

fn rename_fields(reverse: &IndexMap<String, String>, mut group: Group) -> Group {
    if let Some(canonical) = group.field.as_deref().and_then(|f| reverse.get(f)) {
        group.field = Some(canonical.clone());
    }
    group.map_children(|node| match node {
        SyntaxNode::Group(g) => SyntaxNode::Group(rename_fields(reverse, g)),
        SyntaxNode::Text(mut text) => {
            if let Some(canonical) = text.field.as_deref().and_then(|f| reverse.get(f)) {
                text.field = Some(canonical.clone());
            }
            SyntaxNode::Text(text)
        }
        other => other,
    })
}
