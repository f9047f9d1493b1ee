use rowan::TextRange;
use sift_core::{Group, Schema};

use crate::diagnostics::{DiagnosticBuilder, DiagnosticKind, Diagnostics};

type Transform = dyn Fn(&mut FilterContext<'_>, Group) -> Group + Send + Sync;

/// A tree-rewriting pass run at a fixed priority.
///
/// Filters receive the whole current tree and return its replacement. The
/// engine does not recurse on their behalf.
pub struct Filter {
    name: String,
    priority: i32,
    transform: Box<Transform>,
}

impl Filter {
    pub fn new<F>(name: impl Into<String>, priority: i32, transform: F) -> Self
    where
        F: Fn(&mut FilterContext<'_>, Group) -> Group + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            priority,
            transform: Box::new(transform),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn apply(&self, cx: &mut FilterContext<'_>, group: Group) -> Group {
        (self.transform)(cx, group)
    }
}

impl std::fmt::Debug for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .finish()
    }
}

/// Per-parse state handed to every filter.
pub struct FilterContext<'a> {
    source: &'a str,
    schema: Option<&'a dyn Schema>,
    default_field: Option<&'a str>,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> FilterContext<'a> {
    pub fn new(
        source: &'a str,
        schema: Option<&'a dyn Schema>,
        default_field: Option<&'a str>,
        diagnostics: &'a mut Diagnostics,
    ) -> Self {
        Self {
            source,
            schema,
            default_field,
            diagnostics,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn schema(&self) -> Option<&'a dyn Schema> {
        self.schema
    }

    pub fn default_field(&self) -> Option<&'a str> {
        self.default_field
    }

    pub fn report(&mut self, kind: DiagnosticKind, range: TextRange) -> DiagnosticBuilder<'_> {
        self.diagnostics.report(kind, range)
    }
}
