use super::test_utils::{ast, diagnostics};

#[test]
fn boost_applies_to_previous_term() {
    insta::assert_snapshot!(ast("a^2 b^0.5"), @r#"
    Group
      Word "a" ^2
      Word "b" ^0.5
    "#);
}

#[test]
fn non_numeric_boost_stays_literal() {
    insta::assert_snapshot!(ast("foo^bar"), @r#"
    Group
      Word "foo^bar"
    "#);
    assert!(diagnostics("foo^bar").is_empty());
}

#[test]
fn boost_applies_to_group() {
    insta::assert_snapshot!(ast("(a b)^2"), @r#"
    Group
      Group ^2
        Word "a"
        Word "b"
    "#);
}

#[test]
fn boost_applies_after_operators() {
    insta::assert_snapshot!(ast("a^2 OR (b AND c)^3"), @r#"
    Group
      Or
        Word "a" ^2
        Group ^3
          And
            Word "b"
            Word "c"
    "#);
}

#[test]
fn boost_without_target_is_demoted() {
    let input = "^2 a ^3";

    insta::assert_snapshot!(ast(input), @r#"
    Group
      Word "^2"
      Word "a"
      Word "^3"
    "#);
    insta::assert_snapshot!(diagnostics(input), @r"
    info at 0..2: boost has nothing to apply to
    info at 5..7: boost has nothing to apply to
    ");
}

#[test]
fn empty_boost_is_demoted() {
    let input = "a^ b";

    insta::assert_snapshot!(ast(input), @r#"
    Group
      Word "a"
      Word "^"
      Word "b"
    "#);
    insta::assert_snapshot!(diagnostics(input), @"info at 1..2: `^` is not a valid boost");
}
