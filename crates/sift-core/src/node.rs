//! Syntax node model shared by every pipeline stage.
//!
//! A parse starts as a flat list of nodes produced by recognizers and is
//! rewritten by filters into a tree of [`Group`]s. Four node families exist:
//! - [`TextNode`]: content leaves (words, prefixes, wildcards, phrases, ranges)
//! - [`Marker`]: sentinels that some later filter consumes
//! - [`Group`]: ordered composites tagged with a [`GroupKind`]
//! - [`Operator`]: operator keywords consumed by the precedence engine
//!
//! Markers and operators are transient. A finished tree holds only text
//! nodes and groups, unless an operator had no operand (reported as a
//! diagnostic by the engine).

use rowan::TextRange;

use crate::schema::Schema;

pub const DEFAULT_BOOST: f32 = 1.0;
pub const DEFAULT_SLOP: u32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxNode {
    Text(TextNode),
    Marker(Marker),
    Group(Group),
    Operator(Operator),
}

impl SyntaxNode {
    /// Plain word without span information.
    pub fn word(text: impl Into<String>) -> Self {
        Self::Text(TextNode::new(TextKind::Word(text.into())))
    }

    pub fn has_text(&self) -> bool {
        self.text().is_some()
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => t.text(),
            _ => None,
        }
    }

    /// Content nodes and groups can be scoped to a field; markers and operators cannot.
    pub fn has_field(&self) -> bool {
        matches!(self, Self::Text(_) | Self::Group(_))
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Text(t) => t.field.as_deref(),
            Self::Group(g) => g.field.as_deref(),
            _ => None,
        }
    }

    /// Assigns a field. Without `override_existing`, an already-set field wins.
    /// On groups the assignment propagates to every field-capable descendant.
    pub fn set_field(&mut self, name: &str, override_existing: bool) {
        match self {
            Self::Text(t) => t.set_field(name, override_existing),
            Self::Group(g) => g.set_field(name, override_existing),
            _ => {}
        }
    }

    pub fn has_boost(&self) -> bool {
        matches!(self, Self::Text(_) | Self::Group(_))
    }

    pub fn boost(&self) -> f32 {
        match self {
            Self::Text(t) => t.boost,
            Self::Group(g) => g.boost,
            _ => DEFAULT_BOOST,
        }
    }

    pub fn set_boost(&mut self, boost: f32) {
        match self {
            Self::Text(t) => t.boost = boost,
            Self::Group(g) => g.boost = boost,
            _ => {}
        }
    }

    /// Multiplies the current boost by `factor`.
    pub fn apply_boost(&mut self, factor: f32) {
        let boost = self.boost() * factor;
        self.set_boost(boost);
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, Self::Marker(m) if m.kind == MarkerKind::Whitespace)
    }

    pub fn is_boost_marker(&self) -> bool {
        matches!(self, Self::Marker(m) if matches!(m.kind, MarkerKind::Boost(_)))
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    pub fn as_marker(&self) -> Option<&Marker> {
        match self {
            Self::Marker(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Self::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Field name carried by a field-name marker.
    pub fn field_marker_name(&self) -> Option<&str> {
        match self {
            Self::Marker(Marker {
                kind: MarkerKind::FieldName(name),
                ..
            }) => Some(name),
            _ => None,
        }
    }

    pub fn span(&self) -> Option<TextRange> {
        match self {
            Self::Text(t) => t.span,
            Self::Marker(m) => Some(m.span),
            Self::Operator(o) => Some(o.span),
            Self::Group(_) => None,
        }
    }

    /// Content leaves with their boost multiplied by every enclosing group boost.
    pub fn effective_leaves(&self) -> Vec<(&TextNode, f32)> {
        let mut out = Vec::new();
        collect_leaves(self, DEFAULT_BOOST, &mut out);
        out
    }
}

fn collect_leaves<'a>(node: &'a SyntaxNode, inherited: f32, out: &mut Vec<(&'a TextNode, f32)>) {
    match node {
        SyntaxNode::Text(t) => out.push((t, inherited * t.boost)),
        SyntaxNode::Group(g) => {
            for child in &g.children {
                collect_leaves(child, inherited * g.boost, out);
            }
        }
        SyntaxNode::Marker(_) | SyntaxNode::Operator(_) => {}
    }
}

impl From<TextNode> for SyntaxNode {
    fn from(node: TextNode) -> Self {
        Self::Text(node)
    }
}

impl From<Group> for SyntaxNode {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    pub kind: TextKind,
    pub field: Option<String>,
    pub boost: f32,
    pub span: Option<TextRange>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TextKind {
    Word(String),
    Prefix(String),
    Wildcard(String),
    Phrase { text: String, slop: u32 },
    Range(TermRange),
}

/// Bounds of a range leaf. A missing bound is open-ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermRange {
    pub start: Option<String>,
    pub end: Option<String>,
    pub start_excl: bool,
    pub end_excl: bool,
}

impl TextNode {
    pub fn new(kind: TextKind) -> Self {
        Self {
            kind,
            field: None,
            boost: DEFAULT_BOOST,
            span: None,
        }
    }

    pub fn with_span(mut self, span: TextRange) -> Self {
        self.span = Some(span);
        self
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            TextKind::Word(_) => "Word",
            TextKind::Prefix(_) => "Prefix",
            TextKind::Wildcard(_) => "Wildcard",
            TextKind::Phrase { .. } => "Phrase",
            TextKind::Range(_) => "Range",
        }
    }

    /// Literal text. Ranges have bounds instead of text.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            TextKind::Word(t) | TextKind::Prefix(t) | TextKind::Wildcard(t) => Some(t),
            TextKind::Phrase { text, .. } => Some(text),
            TextKind::Range(_) => None,
        }
    }

    /// Returns false for ranges, which carry no literal text.
    pub fn prepend_text(&mut self, prefix: &str) -> bool {
        let text = match &mut self.kind {
            TextKind::Word(t) | TextKind::Prefix(t) | TextKind::Wildcard(t) => t,
            TextKind::Phrase { text, .. } => text,
            TextKind::Range(_) => return false,
        };
        text.insert_str(0, prefix);
        true
    }

    pub fn set_field(&mut self, name: &str, override_existing: bool) {
        if override_existing || self.field.is_none() {
            self.field = Some(name.to_owned());
        }
    }

    /// Extends the span leftwards to cover a consumed prefix such as `title:`.
    pub fn extend_span(&mut self, covered: TextRange) {
        self.span = Some(match self.span {
            Some(span) => span.cover(covered),
            None => covered,
        });
    }

    /// Words this leaf contributes to a compiled query, analyzed by the
    /// schema when its field (or the default field) is known.
    pub fn analyzed_terms(
        &self,
        schema: Option<&dyn Schema>,
        default_field: Option<&str>,
    ) -> Vec<String> {
        let Some(text) = self.text() else {
            return Vec::new();
        };
        let field = self.field.as_deref().or(default_field);
        match (schema, field) {
            (Some(schema), Some(field)) if schema.has_field(field) => schema.analyze(field, text),
            _ => text.split_whitespace().map(str::to_owned).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    /// Matched source text, used when the marker is demoted to a word.
    pub text: String,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MarkerKind {
    Whitespace,
    Plus,
    Minus,
    OpenBracket,
    CloseBracket,
    /// Numeric text after the caret, parsed only when applied.
    Boost(String),
    Comparison(Relation),
    FieldName(String),
}

impl Marker {
    pub fn new(kind: MarkerKind, text: impl Into<String>, span: TextRange) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            MarkerKind::Whitespace => "Whitespace",
            MarkerKind::Plus => "Plus",
            MarkerKind::Minus => "Minus",
            MarkerKind::OpenBracket => "OpenBracket",
            MarkerKind::CloseBracket => "CloseBracket",
            MarkerKind::Boost(_) => "Boost",
            MarkerKind::Comparison(_) => "Comparison",
            MarkerKind::FieldName(_) => "FieldName",
        }
    }

    /// Turns the marker back into the literal text it was recognized from.
    pub fn demote(self) -> SyntaxNode {
        SyntaxNode::Text(TextNode::new(TextKind::Word(self.text)).with_span(self.span))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Lt,
    Gt,
    Le,
    Ge,
}

impl Relation {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "<" => Some(Self::Lt),
            ">" => Some(Self::Gt),
            "<=" | "=<" => Some(Self::Le),
            ">=" | "=>" => Some(Self::Ge),
            _ => None,
        }
    }

    /// Range bounds equivalent to `field:<rel>text`.
    pub fn to_range(self, text: &str) -> TermRange {
        let text = Some(text.to_owned());
        match self {
            Self::Lt => TermRange {
                start: None,
                end: text,
                start_excl: false,
                end_excl: true,
            },
            Self::Gt => TermRange {
                start: text,
                end: None,
                start_excl: true,
                end_excl: false,
            },
            Self::Le => TermRange {
                start: None,
                end: text,
                start_excl: false,
                end_excl: false,
            },
            Self::Ge => TermRange {
                start: text,
                end: None,
                start_excl: false,
                end_excl: false,
            },
        }
    }
}

/// Logical composition of a group's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    /// Unordered grouping; the query compiler picks the default conjunction.
    Plain,
    And,
    Or,
    Not,
    AndNot,
    AndMaybe,
    Require,
}

impl GroupKind {
    /// Chained infix operators of a merging kind extend one group instead of nesting.
    pub fn is_merging(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Plain => "Group",
            Self::And => "And",
            Self::Or => "Or",
            Self::Not => "Not",
            Self::AndNot => "AndNot",
            Self::AndMaybe => "AndMaybe",
            Self::Require => "Require",
        }
    }

    /// Keyword used when rendering the group back to query syntax.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::And => Some("AND"),
            Self::Or => Some("OR"),
            Self::Not => Some("NOT"),
            Self::AndNot => Some("ANDNOT"),
            Self::AndMaybe => Some("ANDMAYBE"),
            Self::Require => Some("REQUIRE"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub kind: GroupKind,
    pub children: Vec<SyntaxNode>,
    pub boost: f32,
    pub field: Option<String>,
}

impl Group {
    pub fn new(kind: GroupKind) -> Self {
        Self::with_children(kind, Vec::new())
    }

    pub fn with_children(kind: GroupKind, children: Vec<SyntaxNode>) -> Self {
        Self {
            kind,
            children,
            boost: DEFAULT_BOOST,
            field: None,
        }
    }

    /// Same kind, boost and field, no children.
    pub fn empty_copy(&self) -> Self {
        Self {
            kind: self.kind,
            children: Vec::new(),
            boost: self.boost,
            field: self.field.clone(),
        }
    }

    pub fn push(&mut self, node: impl Into<SyntaxNode>) {
        self.children.push(node.into());
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SyntaxNode> {
        self.children.iter()
    }

    pub fn set_field(&mut self, name: &str, override_existing: bool) {
        if override_existing || self.field.is_none() {
            self.field = Some(name.to_owned());
        }
        for child in &mut self.children {
            child.set_field(name, override_existing);
        }
    }

    /// Rebuilds the group with `f` applied to every child, keeping group attributes.
    pub fn map_children(self, mut f: impl FnMut(SyntaxNode) -> SyntaxNode) -> Self {
        let Self {
            kind,
            children,
            boost,
            field,
        } = self;
        Self {
            kind,
            children: children.into_iter().map(&mut f).collect(),
            boost,
            field,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Assoc {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arity {
    Prefix,
    Infix,
}

/// Operator keyword awaiting resolution into a group.
#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    pub group: GroupKind,
    pub assoc: Assoc,
    pub arity: Arity,
    pub text: String,
    pub span: TextRange,
}
