use sift_core::{Group, Marker, MarkerKind, SyntaxNode};

use super::map_nested;
use crate::Result;
use crate::pipeline::{Filter, Plugin, Recognizers, entry};
use crate::recognize::RegexRecognizer;

/// Tags runs of whitespace and strips them at priority 500.
///
/// Filters that care about spacing run below 500, everything else above.
#[derive(Debug, Clone)]
pub struct WhitespacePlugin {
    pattern: String,
}

impl WhitespacePlugin {
    pub const NAME: &'static str = "whitespace";

    pub fn new() -> Self {
        Self {
            pattern: r"\s+".to_owned(),
        }
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }
}

impl Default for WhitespacePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for WhitespacePlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn recognizers(&self) -> Result<Recognizers> {
        let recognizer = RegexRecognizer::new("whitespace", &self.pattern, |m| {
            Some(SyntaxNode::Marker(Marker::new(
                MarkerKind::Whitespace,
                m.text(),
                m.span(),
            )))
        })?;
        Ok(vec![entry(recognizer, 100)])
    }

    fn filters(&self) -> Vec<Filter> {
        vec![Filter::new("remove_whitespace", 500, |_, group| {
            remove_whitespace(group)
        })]
    }
}

pub(crate) fn remove_whitespace(group: Group) -> Group {
    let mut group = map_nested(group, &mut remove_whitespace);
    group.children.retain(|node| !node.is_whitespace());
    group
}
