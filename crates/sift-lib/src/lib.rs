//! Sift: plugin-driven parser for free-text search queries.
//!
//! Parsing happens in two stages. Recognizers compete to tag the input into a
//! flat node sequence, then filters rewrite that sequence in priority order
//! into a tree of groups.
//!
//! # Example
//!
//! ```
//! use sift_lib::QueryParser;
//!
//! let parser = QueryParser::new("content").expect("default patterns compile");
//! let parse = parser.parse("title:(hello world) OR body:hi^2");
//! assert!(parse.diagnostics().is_empty());
//! println!("{}", parse.root());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod diagnostics;
pub mod pipeline;
pub mod plugins;
pub mod printer;
pub mod recognize;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod printer_tests;

pub use config::ParserConfig;
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use pipeline::{
    Filter, FilterContext, NoopTracer, Parse, Plugin, PrintTracer, QueryParser,
    QueryParserBuilder, Tracer,
};
pub use printer::TreePrinter;
pub use recognize::{Matched, Recognizer, RegexRecognizer};

/// Errors raised while building a parser.
///
/// Parsing itself never fails; degraded input is reported through [`Diagnostics`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A recognizer pattern failed to compile.
    #[error("invalid pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<regex_automata::meta::BuildError>,
    },

    /// A recognizer reads a capture group its pattern does not define.
    #[error("pattern `{pattern}` has no `{group}` group")]
    MissingGroup { pattern: String, group: String },

    #[error("invalid parser configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
