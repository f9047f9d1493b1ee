use super::test_utils::{ast, diagnostics};

#[test]
fn nested_brackets() {
    insta::assert_snapshot!(ast("a (b (c d))"), @r#"
    Group
      Word "a"
      Group
        Word "b"
        Group
          Word "c"
          Word "d"
    "#);
}

#[test]
fn single_top_level_group_replaces_root() {
    insta::assert_snapshot!(ast("((a b))"), @r#"
    Group
      Group
        Word "a"
        Word "b"
    "#);
}

#[test]
fn unclosed_group_is_flattened() {
    let input = "(a AND b";

    insta::assert_snapshot!(ast(input), @r#"
    Group
      And
        Word "a"
        Word "b"
    "#);
    insta::assert_snapshot!(diagnostics(input), @"warning at 0..1: missing closing `)`; contents merged into the enclosing group");
}

#[test]
fn unclosed_levels_flatten_in_stack_order() {
    let input = "x (a (b";

    insta::assert_snapshot!(ast(input), @r#"
    Group
      Word "x"
      Word "a"
      Word "b"
    "#);
    insta::assert_snapshot!(diagnostics(input), @r"
    warning at 2..3: missing closing `)`; contents merged into the enclosing group
    warning at 5..6: missing closing `)`; contents merged into the enclosing group
    ");
}

#[test]
fn unmatched_close_bracket_is_dropped() {
    let input = "a) b";

    insta::assert_snapshot!(ast(input), @r#"
    Group
      Word "a"
      Word "b"
    "#);
    insta::assert_snapshot!(diagnostics(input), @"warning at 1..2: unmatched `)`");
}

#[test]
fn custom_brackets() {
    use super::GroupPlugin;
    use super::test_utils::{ast_with, defaults};

    let builder = defaults().plugin(GroupPlugin::with_brackets("<", ">"));
    insta::assert_snapshot!(ast_with(builder, "<a b> (c)"), @r#"
    Group
      Group
        Word "a"
        Word "b"
      Word "(c)"
    "#);
}
