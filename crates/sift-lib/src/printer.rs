//! Indented dump of syntax trees.
//!
//! One node per line, children indented by two spaces:
//!
//! ```text
//! Or
//!   Word "a" @title ^2
//!   Range [1 TO 10}
//! ```

use std::fmt::Write;

use sift_core::{Colors, DEFAULT_BOOST, Group, SyntaxNode, TextKind, TextNode, TextRange};

enum Root<'t> {
    Tree(&'t Group),
    Flat(&'t [SyntaxNode]),
}

pub struct TreePrinter<'t> {
    root: Root<'t>,
    spans: bool,
    colors: Colors,
}

impl<'t> TreePrinter<'t> {
    pub fn new(root: &'t Group) -> Self {
        Self {
            root: Root::Tree(root),
            spans: false,
            colors: Colors::OFF,
        }
    }

    /// Prints a node sequence without an enclosing group.
    pub fn flat(nodes: &'t [SyntaxNode]) -> Self {
        Self {
            root: Root::Flat(nodes),
            spans: false,
            colors: Colors::OFF,
        }
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn with_colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        match self.root {
            Root::Tree(group) => self.format_group(group, 0, w),
            Root::Flat(nodes) => nodes
                .iter()
                .try_for_each(|node| self.format_node(node, 0, w)),
        }
    }

    fn format_node(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        match node {
            SyntaxNode::Group(g) => self.format_group(g, indent, w),
            SyntaxNode::Text(t) => self.format_text(t, indent, w),
            SyntaxNode::Marker(m) => {
                let c = self.colors;
                write!(
                    w,
                    "{}{}{}{} {:?}",
                    "  ".repeat(indent),
                    c.leftover,
                    m.kind_name(),
                    c.reset,
                    m.text
                )?;
                self.finish_line(Some(m.span), w)
            }
            SyntaxNode::Operator(o) => {
                let c = self.colors;
                write!(
                    w,
                    "{}{}Operator{} {} {:?}",
                    "  ".repeat(indent),
                    c.leftover,
                    c.reset,
                    o.group.name(),
                    o.text
                )?;
                self.finish_line(Some(o.span), w)
            }
        }
    }

    fn format_group(&self, group: &Group, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let c = self.colors;
        write!(
            w,
            "{}{}{}{}",
            "  ".repeat(indent),
            c.node,
            group.kind.name(),
            c.reset
        )?;
        self.format_attributes(group.field.as_deref(), group.boost, w)?;
        self.finish_line(None, w)?;
        for child in &group.children {
            self.format_node(child, indent + 1, w)?;
        }
        Ok(())
    }

    fn format_text(&self, node: &TextNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let c = self.colors;
        write!(
            w,
            "{}{}{}{} ",
            "  ".repeat(indent),
            c.node,
            node.kind_name(),
            c.reset
        )?;
        match &node.kind {
            TextKind::Range(range) => write!(w, "{}{}{}", c.literal, range, c.reset)?,
            TextKind::Phrase { text, slop } => {
                write!(w, "{}{:?}{} ~{}", c.literal, text, c.reset, slop)?
            }
            TextKind::Word(text) | TextKind::Prefix(text) | TextKind::Wildcard(text) => {
                write!(w, "{}{:?}{}", c.literal, text, c.reset)?
            }
        }
        self.format_attributes(node.field.as_deref(), node.boost, w)?;
        self.finish_line(node.span, w)
    }

    fn format_attributes(
        &self,
        field: Option<&str>,
        boost: f32,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let c = self.colors;
        if let Some(field) = field {
            write!(w, " {}@{}{}", c.meta, field, c.reset)?;
        }
        if boost != DEFAULT_BOOST {
            write!(w, " {}^{}{}", c.meta, boost, c.reset)?;
        }
        Ok(())
    }

    fn finish_line(&self, span: Option<TextRange>, w: &mut impl Write) -> std::fmt::Result {
        if let Some(span) = span.filter(|_| self.spans) {
            let c = self.colors;
            write!(
                w,
                " {}[{}..{}]{}",
                c.meta,
                u32::from(span.start()),
                u32::from(span.end()),
                c.reset
            )?;
        }
        writeln!(w)
    }
}
