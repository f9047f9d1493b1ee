//! Pipeline observation.
//!
//! `NoopTracer` methods are empty and inline away, so untraced parses pay
//! nothing. `PrintTracer` records a dump of every stage.

use sift_core::{Colors, Group, SyntaxNode};

use crate::printer::TreePrinter;

pub trait Tracer {
    /// Called once with the flat sequence produced by the recognizers.
    fn trace_tokens(&mut self, tokens: &[SyntaxNode]);

    /// Called after each filter with the tree it returned.
    fn trace_filter(&mut self, name: &str, priority: i32, tree: &Group);
}

pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_tokens(&mut self, _tokens: &[SyntaxNode]) {}

    #[inline(always)]
    fn trace_filter(&mut self, _name: &str, _priority: i32, _tree: &Group) {}
}

/// Collects a human-readable dump of each pipeline stage.
#[derive(Debug, Default)]
pub struct PrintTracer {
    lines: Vec<String>,
    spans: bool,
    colors: Colors,
}

impl PrintTracer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn with_colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    fn push_section(&mut self, header: String, body: String) {
        let c = self.colors;
        self.lines.push(format!("{}{}{}", c.meta, header, c.reset));
        self.lines
            .extend(body.lines().map(|line| format!("  {line}")));
    }
}

impl Tracer for PrintTracer {
    fn trace_tokens(&mut self, tokens: &[SyntaxNode]) {
        let body = TreePrinter::flat(tokens)
            .with_spans(self.spans)
            .with_colors(self.colors)
            .dump();
        self.push_section("tokens".to_owned(), body);
    }

    fn trace_filter(&mut self, name: &str, priority: i32, tree: &Group) {
        let body = TreePrinter::new(tree)
            .with_spans(self.spans)
            .with_colors(self.colors)
            .dump();
        self.push_section(format!("{name} ({priority})"), body);
    }
}
