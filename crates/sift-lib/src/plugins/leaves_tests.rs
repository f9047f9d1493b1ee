use sift_core::{SyntaxNode, TextKind};

use super::PhrasePlugin;
use super::test_utils::{ast, ast_with, defaults};

#[test]
fn single_quoted_term() {
    insta::assert_snapshot!(ast("'two words' it's ''"), @r#"
    Group
      Word "two words"
      Word "it's"
      Word ""
    "#);
}

#[test]
fn prefix_and_wildcard() {
    insta::assert_snapshot!(ast("pre* (ab*) c*t w?ld x*y?"), @r#"
    Group
      Prefix "pre"
      Group
        Prefix "ab"
      Wildcard "c*t"
      Wildcard "w?ld"
      Wildcard "x*y?"
    "#);
}

#[test]
fn phrase_slop() {
    insta::assert_snapshot!(ast(r#""a b"~3 "c d""#), @r#"
    Group
      Phrase "a b" ~3
      Phrase "c d" ~1
    "#);
}

#[test]
fn phrase_default_slop_is_configurable() {
    let builder = defaults().plugin(PhrasePlugin::new().default_slop(2));

    insta::assert_snapshot!(ast_with(builder, r#""c d""#), @r#"
    Group
      Phrase "c d" ~2
    "#);
}

#[test]
fn range_brackets() {
    insta::assert_snapshot!(ast("[1 TO 10] {1 TO 10} [a to} {TO z]"), @r#"
    Group
      Range [1 TO 10]
      Range {1 TO 10}
      Range [a TO}
      Range {TO z]
    "#);
}

#[test]
fn range_bounds_are_unquoted() {
    insta::assert_snapshot!(ast("['a b' TO 'c']"), @r#"
    Group
      Range ['a b' TO c]
    "#);
}

/// Display output re-tokenizes into the same leaf.
#[test]
fn leaf_display_round_trips() {
    let parser = defaults().build().unwrap();
    let queries = [
        "word",
        "'two words'",
        "'AND'",
        "pre*",
        "w?ld",
        r#""a b"~3"#,
        "[1 TO 10}",
        "{'a b' TO 'tomato']",
        "[TO z]",
    ];

    for query in queries {
        let tokens = parser.tokenize(query);
        let [SyntaxNode::Text(leaf)] = tokens.as_slice() else {
            panic!("{query} did not tokenize to one leaf: {tokens:?}");
        };
        let rendered = leaf.to_string();
        let again = parser.tokenize(&rendered);
        let [SyntaxNode::Text(again)] = again.as_slice() else {
            panic!("{rendered} did not tokenize to one leaf: {again:?}");
        };
        assert_eq!(leaf.kind, again.kind, "{query} -> {rendered}");
    }
}

#[test]
fn rendered_words_with_syntax_are_quoted() {
    let parser = defaults().build().unwrap();
    let tokens = parser.tokenize("'a:b (c)'");
    let [SyntaxNode::Text(leaf)] = tokens.as_slice() else {
        panic!("expected one leaf");
    };
    assert_eq!(leaf.kind, TextKind::Word("a:b (c)".to_owned()));
    assert_eq!(leaf.to_string(), "'a:b (c)'");
}
