//! Diagnostic rendering against the query string.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use rowan::TextRange;

use super::Diagnostics;
use super::message::{DiagnosticMessage, Severity};

/// Renders diagnostics as one line each, or as annotated snippets once a
/// source is attached.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
    threshold: Severity,
    summary: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
            threshold: Severity::Info,
            summary: false,
        }
    }

    /// Annotate each message with the query string it refers to.
    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    /// Skip messages less severe than `severity`.
    pub fn min_severity(mut self, severity: Severity) -> Self {
        self.threshold = severity;
        self
    }

    /// End with a count line such as `2 warnings, 1 info`.
    pub fn summary(mut self, value: bool) -> Self {
        self.summary = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let shown: Vec<&DiagnosticMessage> = self
            .diagnostics
            .iter()
            .filter(|d| d.severity() <= self.threshold)
            .collect();

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };
        for (i, diag) in shown.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            match self.source {
                Some(source) => self.format_snippet(&renderer, source, diag, w)?,
                None => write!(w, "{}", diag)?,
            }
        }

        if self.summary && !shown.is_empty() {
            w.write_str(if self.source.is_some() { "\n\n" } else { "\n" })?;
            write_summary(&shown, w)?;
        }
        Ok(())
    }

    fn format_snippet(
        &self,
        renderer: &Renderer,
        source: &str,
        diag: &DiagnosticMessage,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let span = clamp_span(diag.range(), source.len());
        // The title carries the message; a label would repeat it after the carets.
        let mut snippet = Snippet::source(source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(span));
        if let Some(path) = self.path {
            snippet = snippet.path(path);
        }

        let report = [level(diag.severity())
            .primary_title(diag.message())
            .element(snippet)];
        write!(w, "{}", renderer.render(&report))
    }
}

fn level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Warning => Level::WARNING,
        Severity::Info => Level::INFO,
    }
}

fn write_summary(shown: &[&DiagnosticMessage], w: &mut impl Write) -> std::fmt::Result {
    let warnings = shown.iter().filter(|d| d.is_warning()).count();
    let infos = shown.len() - warnings;

    let mut parts = Vec::new();
    match warnings {
        0 => {}
        1 => parts.push("1 warning".to_owned()),
        n => parts.push(format!("{n} warnings")),
    }
    if infos > 0 {
        parts.push(format!("{infos} info"));
    }
    w.write_str(&parts.join(", "))
}

/// Zero-width spans (a missing bracket at the end) still get one caret.
fn clamp_span(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start = usize::from(range.start()).min(limit);
    let end = usize::from(range.end()).min(limit);
    if start == end {
        return start..(start + 1).min(limit);
    }
    start..end
}

impl Diagnostics {
    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }
}
