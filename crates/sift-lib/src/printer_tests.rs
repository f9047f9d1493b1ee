use sift_core::{Colors, Group, GroupKind, SyntaxNode, TermRange, TextKind, TextNode, TextRange};

use crate::TreePrinter;

fn sample() -> Group {
    let mut word = TextNode::new(TextKind::Word("a".into())).with_span(TextRange::new(0.into(), 1.into()));
    word.field = Some("title".into());
    word.boost = 2.0;
    let range = TextNode::new(TextKind::Range(TermRange {
        start: Some("1".into()),
        end: None,
        start_excl: true,
        end_excl: false,
    }));
    let mut or = Group::with_children(GroupKind::Or, vec![word.into(), range.into()]);
    or.boost = 1.5;
    Group::with_children(GroupKind::Plain, vec![or.into(), SyntaxNode::word("b")])
}

#[test]
fn tree_dump() {
    insta::assert_snapshot!(TreePrinter::new(&sample()).dump(), @r#"
    Group
      Or ^1.5
        Word "a" @title ^2
        Range {1 TO]
      Word "b"
    "#);
}

#[test]
fn tree_dump_with_spans() {
    insta::assert_snapshot!(TreePrinter::new(&sample()).with_spans(true).dump(), @r#"
    Group
      Or ^1.5
        Word "a" @title ^2 [0..1]
        Range {1 TO]
      Word "b"
    "#);
}

#[test]
fn colored_dump() {
    let group = Group::with_children(GroupKind::And, vec![SyntaxNode::word("x")]);
    let out = TreePrinter::new(&group).with_colors(Colors::ON).dump();
    assert_eq!(
        out,
        "\x1b[34mAnd\x1b[0m\n  \x1b[34mWord\x1b[0m \x1b[32m\"x\"\x1b[0m\n"
    );
}
