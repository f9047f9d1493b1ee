#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for the sift query parser.
//!
//! - **Node model** (`SyntaxNode` and friends): what recognizers emit and filters rewrite
//! - **Schema** (`Schema`, `FieldSchema`): field lookups and per-field text analysis
//! - **Display**: query-syntax rendering of nodes, the inverse of tokenization

mod colors;
mod display;
mod node;
mod schema;

#[cfg(test)]
mod schema_tests;

pub use colors::Colors;
pub use node::{
    Arity, Assoc, DEFAULT_BOOST, DEFAULT_SLOP, Group, GroupKind, Marker, MarkerKind, Operator,
    Relation, SyntaxNode, TermRange, TextKind, TextNode,
};
pub use schema::{Analyzer, FieldSchema, Schema};

pub use rowan::{TextRange, TextSize};
