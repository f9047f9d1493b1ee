use super::test_utils::{ast, ast_with_spans, diagnostics};

#[test]
fn greater_or_equal() {
    insta::assert_snapshot!(ast_with_spans("price:>=10"), @r#"
    Group
      Range [10 TO] @price [0..10]
    "#);
}

#[test]
fn every_relation() {
    insta::assert_snapshot!(ast("p:<5 p:>5 p:<=5 p:=<5 p:>=5 p:=>5"), @r#"
    Group
      Range [TO 5} @p
      Range {5 TO] @p
      Range [TO 5] @p
      Range [TO 5] @p
      Range [5 TO] @p
      Range [5 TO] @p
    "#);
}

#[test]
fn value_keeps_its_boost() {
    insta::assert_snapshot!(ast("p:>3^2"), @r#"
    Group
      Range {3 TO] @p ^2
    "#);
}

#[test]
fn symbol_outside_field_is_text() {
    insta::assert_snapshot!(ast("a <5"), @r#"
    Group
      Word "a"
      Word "<5"
    "#);
}

#[test]
fn comparison_without_value_is_demoted() {
    let input = "p:< x";

    insta::assert_snapshot!(ast(input), @r#"
    Group
      Word "<" @p
      Word "x"
    "#);
    insta::assert_snapshot!(diagnostics(input), @"info at 2..3: comparison needs a field and a value");
}
