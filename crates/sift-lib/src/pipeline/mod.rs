//! The parsing pipeline.
//!
//! A [`QueryParser`] is built once from plugins and reused for every query:
//! - **Tokenize**: recognizers compete at each position; the longest claim wins
//! - **Filter**: the flat sequence, wrapped in a plain root group, passes
//!   through every filter in ascending priority order
//!
//! Recognizers and filters are sorted once at build time (stable, so equal
//! priorities keep registration order) and never change afterwards.

mod filter;
mod plugin;
mod tokenize;
mod trace;

#[cfg(test)]
mod trace_tests;

use std::sync::Arc;

use sift_core::{Group, GroupKind, Schema, SyntaxNode};

pub use filter::{Filter, FilterContext};
pub use plugin::{Plugin, Recognizers};
pub use trace::{NoopTracer, PrintTracer, Tracer};

pub(crate) use plugin::entry;

use crate::Result;
use crate::diagnostics::Diagnostics;
use crate::plugins;
use crate::recognize::Recognizer;

pub struct QueryParser {
    recognizers: Vec<Box<dyn Recognizer>>,
    filters: Vec<Filter>,
    default_field: Option<String>,
    schema: Option<Arc<dyn Schema>>,
}

impl QueryParser {
    /// Parser with the default plugin set searching `default_field`.
    pub fn new(default_field: impl Into<String>) -> Result<Self> {
        Self::builder()
            .default_field(default_field)
            .default_plugins()
            .build()
    }

    /// Parser for flat `+required -banned optional` queries without
    /// operator keywords.
    pub fn simple(default_field: impl Into<String>) -> Result<Self> {
        Self::builder()
            .default_field(default_field)
            .simple_plugins()
            .build()
    }

    pub fn builder() -> QueryParserBuilder {
        QueryParserBuilder::default()
    }

    pub fn default_field(&self) -> Option<&str> {
        self.default_field.as_deref()
    }

    pub fn schema(&self) -> Option<&dyn Schema> {
        self.schema.as_deref()
    }

    /// Recognizer names in consultation order.
    pub fn recognizer_names(&self) -> Vec<&str> {
        self.recognizers.iter().map(|r| r.name()).collect()
    }

    /// `(name, priority)` of every filter in execution order.
    pub fn filter_order(&self) -> Vec<(&str, i32)> {
        self.filters
            .iter()
            .map(|f| (f.name(), f.priority()))
            .collect()
    }

    /// The flat node sequence before any filter runs.
    pub fn tokenize(&self, source: &str) -> Vec<SyntaxNode> {
        tokenize::tokenize(&self.recognizers, source)
    }

    pub fn parse(&self, source: &str) -> Parse {
        self.parse_traced(source, &mut NoopTracer)
    }

    pub fn parse_traced<T: Tracer>(&self, source: &str, tracer: &mut T) -> Parse {
        let tokens = self.tokenize(source);
        tracer.trace_tokens(&tokens);

        let mut diagnostics = Diagnostics::new();
        let mut root = Group::with_children(GroupKind::Plain, tokens);
        let mut cx = FilterContext::new(
            source,
            self.schema.as_deref(),
            self.default_field.as_deref(),
            &mut diagnostics,
        );
        for filter in &self.filters {
            root = filter.apply(&mut cx, root);
            tracer.trace_filter(filter.name(), filter.priority(), &root);
        }

        Parse { root, diagnostics }
    }
}

impl std::fmt::Debug for QueryParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryParser")
            .field("recognizers", &self.recognizer_names())
            .field("filters", &self.filters)
            .field("default_field", &self.default_field)
            .finish_non_exhaustive()
    }
}

/// Result of parsing one query string.
#[derive(Debug, Clone)]
pub struct Parse {
    root: Group,
    diagnostics: Diagnostics,
}

impl Parse {
    pub fn root(&self) -> &Group {
        &self.root
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_root(self) -> Group {
        self.root
    }

    pub fn into_parts(self) -> (Group, Diagnostics) {
        (self.root, self.diagnostics)
    }
}

#[derive(Default)]
pub struct QueryParserBuilder {
    plugins: Vec<Box<dyn Plugin>>,
    default_field: Option<String>,
    schema: Option<Arc<dyn Schema>>,
}

impl QueryParserBuilder {
    pub fn default_field(mut self, name: impl Into<String>) -> Self {
        self.default_field = Some(name.into());
        self
    }

    pub fn schema(self, schema: impl Schema + 'static) -> Self {
        self.shared_schema(Arc::new(schema))
    }

    pub fn shared_schema(mut self, schema: Arc<dyn Schema>) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Appends every default plugin not already registered.
    pub fn default_plugins(mut self) -> Self {
        for plugin in plugins::defaults() {
            if !self.has_plugin(plugin.name()) {
                self.plugins.push(plugin);
            }
        }
        self
    }

    /// Appends every plugin of the flat `+`/`-` set not already registered.
    pub fn simple_plugins(mut self) -> Self {
        for plugin in plugins::simple() {
            if !self.has_plugin(plugin.name()) {
                self.plugins.push(plugin);
            }
        }
        self
    }

    /// Registers `plugin`, replacing a registered plugin of the same name in place.
    pub fn plugin(self, plugin: impl Plugin + 'static) -> Self {
        self.boxed_plugin(Box::new(plugin))
    }

    pub fn boxed_plugin(mut self, plugin: Box<dyn Plugin>) -> Self {
        match self.plugins.iter().position(|p| p.name() == plugin.name()) {
            Some(i) => self.plugins[i] = plugin,
            None => self.plugins.push(plugin),
        }
        self
    }

    pub fn without_plugin(mut self, name: &str) -> Self {
        self.plugins.retain(|p| p.name() != name);
        self
    }

    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p.name() == name)
    }

    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    /// Compiles all recognizers and fixes the recognizer and filter order.
    pub fn build(self) -> Result<QueryParser> {
        let mut recognizers = Vec::new();
        let mut filters = Vec::new();
        for plugin in &self.plugins {
            recognizers.extend(plugin.recognizers()?);
            filters.extend(plugin.filters());
        }

        recognizers.sort_by_key(|(_, priority)| *priority);
        filters.sort_by_key(|f| f.priority());

        Ok(QueryParser {
            recognizers: recognizers.into_iter().map(|(r, _)| r).collect(),
            filters,
            default_field: self.default_field,
            schema: self.schema,
        })
    }
}
