use sift_core::{SyntaxNode, TextKind, TextNode};

use crate::recognize::{Recognizer, text_range};

/// Splits `source` into a flat node sequence.
///
/// At each position every recognizer is tried and the longest claim wins;
/// on equal length the earlier recognizer wins. Text no recognizer claims
/// is collected into words, one per unclaimed run.
pub(crate) fn tokenize(recognizers: &[Box<dyn Recognizer>], source: &str) -> Vec<SyntaxNode> {
    let mut nodes = Vec::new();
    let mut literal_start: Option<usize> = None;
    let mut pos = 0;

    while pos < source.len() {
        match longest_claim(recognizers, source, pos) {
            Some((node, end)) => {
                if let Some(start) = literal_start.take() {
                    nodes.push(literal(source, start, pos));
                }
                nodes.push(node);
                pos = end;
            }
            None => {
                literal_start.get_or_insert(pos);
                pos += source[pos..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if let Some(start) = literal_start {
        nodes.push(literal(source, start, pos));
    }
    nodes
}

fn longest_claim(
    recognizers: &[Box<dyn Recognizer>],
    source: &str,
    pos: usize,
) -> Option<(SyntaxNode, usize)> {
    let mut best: Option<(SyntaxNode, usize)> = None;
    for recognizer in recognizers {
        let Some((node, end)) = recognizer.recognize(source, pos) else {
            continue;
        };
        if end <= pos || !source.is_char_boundary(end) {
            continue;
        }
        if best.as_ref().is_none_or(|(_, best_end)| end > *best_end) {
            best = Some((node, end));
        }
    }
    best
}

fn literal(source: &str, start: usize, end: usize) -> SyntaxNode {
    SyntaxNode::Text(
        TextNode::new(TextKind::Word(source[start..end].to_owned()))
            .with_span(text_range(start, end)),
    )
}
