//! Query-syntax rendering.
//!
//! Output re-tokenizes into equivalent nodes under the default parser
//! configuration. Fields shared with the enclosing group are not repeated.

use std::fmt::{self, Display, Formatter};

use crate::node::{
    DEFAULT_BOOST, DEFAULT_SLOP, Group, GroupKind, Marker, Operator, SyntaxNode, TermRange,
    TextKind, TextNode,
};

const KEYWORDS: [&str; 6] = ["AND", "OR", "NOT", "ANDNOT", "ANDMAYBE", "REQUIRE"];

impl Display for SyntaxNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_node(f, self, None)
    }
}

impl Display for TextNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_text(f, self, None)
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_group(f, self, None)
    }
}

impl Display for TermRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_range(f, self)
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.text.trim())
    }
}

fn write_node(f: &mut Formatter<'_>, node: &SyntaxNode, inherited: Option<&str>) -> fmt::Result {
    match node {
        SyntaxNode::Text(t) => write_text(f, t, inherited),
        SyntaxNode::Group(g) => write_group(f, g, inherited),
        SyntaxNode::Marker(m) => write!(f, "{m}"),
        SyntaxNode::Operator(o) => write!(f, "{o}"),
    }
}

fn write_field(f: &mut Formatter<'_>, field: Option<&str>, inherited: Option<&str>) -> fmt::Result {
    match field {
        Some(name) if Some(name) != inherited => write!(f, "{name}:"),
        _ => Ok(()),
    }
}

fn write_boost(f: &mut Formatter<'_>, boost: f32) -> fmt::Result {
    if boost != DEFAULT_BOOST {
        write!(f, "^{boost}")?;
    }
    Ok(())
}

fn write_text(f: &mut Formatter<'_>, node: &TextNode, inherited: Option<&str>) -> fmt::Result {
    write_field(f, node.field.as_deref(), inherited)?;
    match &node.kind {
        TextKind::Word(text) if word_needs_quotes(text) => write!(f, "'{text}'")?,
        TextKind::Word(text) | TextKind::Wildcard(text) => f.write_str(text)?,
        TextKind::Prefix(text) => write!(f, "{text}*")?,
        TextKind::Phrase { text, slop } => {
            write!(f, "\"{text}\"")?;
            if *slop != DEFAULT_SLOP {
                write!(f, "~{slop}")?;
            }
        }
        TextKind::Range(range) => write_range(f, range)?,
    }
    write_boost(f, node.boost)
}

fn write_range(f: &mut Formatter<'_>, range: &TermRange) -> fmt::Result {
    f.write_str(if range.start_excl { "{" } else { "[" })?;
    if let Some(start) = &range.start {
        write_bound(f, start)?;
        f.write_str(" ")?;
    }
    f.write_str("TO")?;
    if let Some(end) = &range.end {
        f.write_str(" ")?;
        write_bound(f, end)?;
    }
    f.write_str(if range.end_excl { "}" } else { "]" })
}

fn write_bound(f: &mut Formatter<'_>, bound: &str) -> fmt::Result {
    let needs_quotes = bound.is_empty()
        || bound.chars().any(|c| c.is_whitespace() || "[]{}".contains(c))
        || bound.to_ascii_lowercase().contains("to");
    if needs_quotes && !bound.contains('\'') {
        write!(f, "'{bound}'")
    } else {
        f.write_str(bound)
    }
}

fn write_group(f: &mut Formatter<'_>, group: &Group, inherited: Option<&str>) -> fmt::Result {
    write_field(f, group.field.as_deref(), inherited)?;
    let scope = group.field.as_deref().or(inherited);
    f.write_str("(")?;
    if group.kind == GroupKind::Not {
        f.write_str("NOT ")?;
    }
    let separator = match group.kind.keyword() {
        Some(kw) if group.kind != GroupKind::Not => format!(" {kw} "),
        _ => " ".to_owned(),
    };
    for (i, child) in group.children.iter().enumerate() {
        if i > 0 {
            f.write_str(&separator)?;
        }
        write_node(f, child, scope)?;
    }
    f.write_str(")")?;
    write_boost(f, group.boost)
}

/// Words that would otherwise re-tokenize as something other than one word.
fn word_needs_quotes(text: &str) -> bool {
    if text.contains('\'') {
        return false;
    }
    text.is_empty()
        || KEYWORDS.contains(&text)
        || text.starts_with(['+', '-'])
        || text
            .chars()
            .any(|c| c.is_whitespace() || "()[]{}\"*?^:".contains(c))
}
