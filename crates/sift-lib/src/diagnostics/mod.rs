//! Recovered-condition reporting.
//!
//! Filters never fail. When they fall back to a literal reading of the
//! input, they record what happened here with the byte range involved.

mod message;
mod printer;

#[cfg(test)]
mod tests;

use rowan::TextRange;

pub use message::{DiagnosticKind, DiagnosticMessage, Severity};
pub use printer::DiagnosticsPrinter;

/// Messages in the order the filters reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<DiagnosticMessage>,
}

/// Pending report; nothing is recorded until [`emit`](Self::emit).
#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    sink: &'a mut Diagnostics,
    entry: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a report of `kind` over `range`, with the kind's fallback message.
    pub fn report(&mut self, kind: DiagnosticKind, range: TextRange) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            sink: self,
            entry: DiagnosticMessage::with_default_message(kind, range),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.entries.iter()
    }

    pub fn kinds(&self) -> Vec<DiagnosticKind> {
        self.entries.iter().map(|e| e.kind).collect()
    }

    /// Messages of one kind, e.g. every dangling operator.
    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &DiagnosticMessage> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }

    /// Messages whose range overlaps or borders `range` of the query string.
    pub fn touching(&self, range: TextRange) -> impl Iterator<Item = &DiagnosticMessage> {
        self.entries
            .iter()
            .filter(move |e| e.range.intersect(range).is_some())
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.entries
            .iter()
            .filter(|e| e.severity() == severity)
            .count()
    }

    pub fn has_warnings(&self) -> bool {
        self.entries.iter().any(|e| e.is_warning())
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// True when every recovery was a literal-text demotion.
    pub fn is_clean(&self) -> bool {
        !self.has_warnings()
    }

    pub fn render(&self, source: &str) -> String {
        self.printer().source(source).render()
    }

    pub fn render_colored(&self, source: &str, colored: bool) -> String {
        self.printer().source(source).colored(colored).render()
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }
}

impl<'a> DiagnosticBuilder<'a> {
    /// Detail rendered into the kind's message template.
    pub fn message(mut self, detail: impl Into<String>) -> Self {
        self.entry.message = self.entry.kind.message(Some(&detail.into()));
        self
    }

    pub fn emit(self) {
        self.sink.entries.push(self.entry);
    }
}
