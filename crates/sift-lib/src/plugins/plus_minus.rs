use sift_core::{Group, GroupKind, Marker, MarkerKind, SyntaxNode};

use super::map_nested;
use crate::Result;
use crate::pipeline::{Filter, Plugin, Recognizers, entry};
use crate::recognize::{RegexRecognizer, term_start};

/// `+required` and `-banned` prefixes.
///
/// A level containing either marker is rebuilt from three buckets as
/// `AndNot(AndMaybe(required, optional), banned)`. The `AndMaybe` wrapper
/// appears only with required terms and the `AndNot` wrapper only with
/// banned ones. Levels without markers are left alone.
///
/// Not a default plugin; see [`QueryParser::simple`](crate::QueryParser::simple).
#[derive(Debug, Clone)]
pub struct PlusMinusPlugin {
    plus: String,
    minus: String,
    required: GroupKind,
    optional: GroupKind,
    banned: GroupKind,
}

impl PlusMinusPlugin {
    pub const NAME: &'static str = "plus_minus";

    pub fn new() -> Self {
        Self {
            plus: r"\+".to_owned(),
            minus: "-".to_owned(),
            required: GroupKind::And,
            optional: GroupKind::Or,
            banned: GroupKind::Or,
        }
    }

    pub fn patterns(mut self, plus: impl Into<String>, minus: impl Into<String>) -> Self {
        self.plus = plus.into();
        self.minus = minus.into();
        self
    }

    /// Group kinds for the required, optional and banned buckets.
    pub fn buckets(mut self, required: GroupKind, optional: GroupKind, banned: GroupKind) -> Self {
        self.required = required;
        self.optional = optional;
        self.banned = banned;
        self
    }
}

impl Default for PlusMinusPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for PlusMinusPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn recognizers(&self) -> Result<Recognizers> {
        let plus = RegexRecognizer::new("plus", &self.plus, |m| {
            Some(SyntaxNode::Marker(Marker::new(MarkerKind::Plus, m.text(), m.span())))
        })?
        .with_guard(term_start);
        let minus = RegexRecognizer::new("minus", &self.minus, |m| {
            Some(SyntaxNode::Marker(Marker::new(MarkerKind::Minus, m.text(), m.span())))
        })?
        .with_guard(term_start);
        Ok(vec![entry(plus, 0), entry(minus, 0)])
    }

    fn filters(&self) -> Vec<Filter> {
        let kinds = Buckets {
            required: self.required,
            optional: self.optional,
            banned: self.banned,
        };
        vec![Filter::new("plus_minus", 510, move |_, group| {
            partition(kinds, group)
        })]
    }
}

#[derive(Debug, Clone, Copy)]
struct Buckets {
    required: GroupKind,
    optional: GroupKind,
    banned: GroupKind,
}

#[derive(Clone, Copy)]
enum Bucket {
    Required,
    Optional,
    Banned,
}

fn partition(kinds: Buckets, group: Group) -> Group {
    let group = map_nested(group, &mut |g| partition(kinds, g));
    let has_markers = group.iter().any(|node| {
        matches!(
            node.as_marker().map(|m| &m.kind),
            Some(MarkerKind::Plus | MarkerKind::Minus)
        )
    });
    if !has_markers {
        return group;
    }

    let mut required = Group::new(kinds.required);
    let mut optional = Group::new(kinds.optional);
    let mut banned = Group::new(kinds.banned);
    let mut next = Bucket::Optional;
    let mut last = Bucket::Optional;

    let template = group.empty_copy();
    for node in group.children {
        let bucket = match node.as_marker().map(|m| &m.kind) {
            Some(MarkerKind::Plus) => {
                next = Bucket::Required;
                continue;
            }
            Some(MarkerKind::Minus) => {
                next = Bucket::Banned;
                continue;
            }
            Some(MarkerKind::Boost(_)) => last,
            _ => std::mem::replace(&mut next, Bucket::Optional),
        };
        last = bucket;
        match bucket {
            Bucket::Required => required.push(node),
            Bucket::Optional => optional.push(node),
            Bucket::Banned => banned.push(node),
        }
    }

    let mut result = optional;
    if !required.is_empty() {
        result = Group::with_children(GroupKind::AndMaybe, vec![required.into(), result.into()]);
    }
    if !banned.is_empty() {
        result = Group::with_children(GroupKind::AndNot, vec![result.into(), banned.into()]);
    }
    result.boost = template.boost;
    result.field = template.field;
    result
}
