use sift_core::{Analyzer, FieldSchema};

use super::FieldsPlugin;
use super::test_utils::{ast, ast_with, ast_with_spans, defaults, diagnostics, diagnostics_with};

fn title_schema() -> FieldSchema {
    FieldSchema::new().with_field("title", Analyzer::Whitespace)
}

#[test]
fn field_applies_to_next_term() {
    insta::assert_snapshot!(ast(r#"title:hello body title:"a b""#), @r#"
    Group
      Word "hello" @title
      Word "body"
      Phrase "a b" ~1 @title
    "#);
}

#[test]
fn span_covers_field_prefix() {
    insta::assert_snapshot!(ast_with_spans("x title:hello"), @r#"
    Group
      Word "x" [0..1]
      Word "hello" @title [2..13]
    "#);
}

#[test]
fn field_propagates_into_group() {
    insta::assert_snapshot!(ast("title:(hello world)"), @r#"
    Group
      Group @title
        Word "hello" @title
        Word "world" @title
    "#);
}

#[test]
fn inner_field_is_not_overridden() {
    insta::assert_snapshot!(ast("title:(a body:b)"), @r#"
    Group
      Group @title
        Word "a" @title
        Word "b" @body
    "#);
}

#[test]
fn dangling_field_becomes_text() {
    let input = "title: hello";

    insta::assert_snapshot!(ast(input), @r#"
    Group
      Word "title:"
      Word "hello"
    "#);
    insta::assert_snapshot!(diagnostics(input), @"info at 0..6: field prefix has nothing to apply to");
}

#[test]
fn unknown_field_merges_into_text() {
    let input = "foo:bar title:x";
    let builder = || defaults().schema(title_schema());

    insta::assert_snapshot!(ast_with(builder(), input), @r#"
    Group
      Word "foo:bar"
      Word "x" @title
    "#);
    insta::assert_snapshot!(diagnostics_with(builder(), input), @"info at 0..4: `foo` is not a known field, treated as text");
}

#[test]
fn unknown_field_before_group_stays_separate() {
    let builder = defaults().schema(title_schema());

    insta::assert_snapshot!(ast_with(builder, "foo:(a)"), @r#"
    Group
      Word "foo:"
      Group
        Word "a"
    "#);
}

#[test]
fn unknown_field_accepted_without_rejection() {
    let builder = defaults()
        .schema(title_schema())
        .plugin(FieldsPlugin::new().reject_unknown(false));

    insta::assert_snapshot!(ast_with(builder, "foo:bar"), @r#"
    Group
      Word "bar" @foo
    "#);
}

#[test]
fn unknown_field_accepted_without_schema() {
    insta::assert_snapshot!(ast("foo:bar"), @r#"
    Group
      Word "bar" @foo
    "#);
}

#[test]
fn field_name_needs_term_start() {
    insta::assert_snapshot!(ast("a:b:c"), @r#"
    Group
      Word "b:c" @a
    "#);
}
