//! Recognizers tag the query string one node at a time.
//!
//! A recognizer looks at the input anchored at a cursor and either claims
//! some text, producing a node, or declines. Declining is not an error.

mod pattern;


use rowan::{TextRange, TextSize};
use sift_core::SyntaxNode;

pub use pattern::{Guard, Matched, RegexRecognizer, after_field, term_start};

pub trait Recognizer: Send + Sync {
    /// Short name shown in traces.
    fn name(&self) -> &str;

    /// Tries to claim text starting at byte offset `pos`.
    ///
    /// Returns the node and the offset just past the claimed text. A claim
    /// must be non-empty.
    fn recognize(&self, source: &str, pos: usize) -> Option<(SyntaxNode, usize)>;
}

/// Byte offsets to a span. Query strings are far below `u32::MAX` bytes.
pub(crate) fn text_range(start: usize, end: usize) -> TextRange {
    TextRange::new(TextSize::from(start as u32), TextSize::from(end as u32))
}
