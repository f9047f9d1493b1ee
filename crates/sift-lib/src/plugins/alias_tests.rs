use sift_core::{Analyzer, FieldSchema, Group};

use super::FieldAliasPlugin;
use super::test_utils::{ast_with, defaults, diagnostics_with};
use crate::pipeline::{Filter, Plugin};

fn aliases() -> FieldAliasPlugin {
    FieldAliasPlugin::new().alias("title", ["t", "heading"])
}

#[test]
fn alias_is_renamed_to_canonical() {
    insta::assert_snapshot!(ast_with(defaults().plugin(aliases()), "t:a heading:(b c)"), @r#"
    Group
      Word "a" @title
      Group @title
        Word "b" @title
        Word "c" @title
    "#);
}

#[test]
fn alias_passes_unknown_field_check() {
    let schema = FieldSchema::new().with_field("title", Analyzer::Whitespace);
    let builder = || defaults().schema(schema.clone()).plugin(aliases());

    insta::assert_snapshot!(ast_with(builder(), "t:a"), @r#"
    Group
      Word "a" @title
    "#);
    assert!(diagnostics_with(builder(), "t:a").is_empty());
}

/// Assigns field `t` to every top-level group, between field assignment
/// and alias resolution.
struct ScopeEverything;

impl Plugin for ScopeEverything {
    fn name(&self) -> &'static str {
        "scope_everything"
    }

    fn filters(&self) -> Vec<Filter> {
        vec![Filter::new("scope", 102, |_, group: Group| {
            group.map_children(|mut node| {
                node.set_field("t", false);
                node
            })
        })]
    }
}

#[test]
fn assigned_fields_are_renamed() {
    let builder = defaults().plugin(aliases()).plugin(ScopeEverything);

    insta::assert_snapshot!(ast_with(builder, "a (b)"), @r#"
    Group
      Word "a" @title
      Group @title
        Word "b" @title
    "#);
}

#[test]
fn canonical_lookup() {
    let plugin = aliases();
    assert_eq!(plugin.canonical("heading"), Some("title"));
    assert_eq!(plugin.canonical("title"), None);
}
