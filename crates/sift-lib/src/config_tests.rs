use indoc::indoc;
use sift_core::{GroupKind, SyntaxNode};

use crate::{Error, ParserConfig, TreePrinter};

fn ast(config: &ParserConfig, source: &str) -> String {
    let parser = config.build().unwrap();
    TreePrinter::new(parser.parse(source).root()).dump()
}

const FULL: &str = indoc! {r#"
    {
      "default_field": "body",
      "schema": { "title": "lowercase", "body": "whitespace" },
      "aliases": { "title": ["t"] },
      "multifield": { "fields": ["title", "body"], "boosts": { "title": 2.0 } }
    }
"#};

#[test]
fn empty_config_is_default() {
    let config = ParserConfig::from_json("{}").unwrap();
    assert_eq!(config, ParserConfig::default());
    assert!(config.reject_unknown_fields);
    assert!(!config.plus_minus);
}

#[test]
fn full_config() {
    let config = ParserConfig::from_json(FULL).unwrap();
    let input = "t:Hello world foo:bar";

    insta::assert_snapshot!(ast(&config, input), @r#"
    Group
      Word "Hello" @title
      Or
        Word "world" @title ^2
        Word "world" @body
      Or
        Word "foo:bar" @title ^2
        Word "foo:bar" @body
    "#);

    let parser = config.build().unwrap();
    let parse = parser.parse(input);
    insta::assert_snapshot!(
        parse.diagnostics().printer().render(),
        @"info at 14..18: `foo` is not a known field, treated as text"
    );

    let SyntaxNode::Text(hello) = &parse.root().children[0] else {
        panic!("expected a leaf");
    };
    assert_eq!(
        hello.analyzed_terms(parser.schema(), parser.default_field()),
        ["hello"]
    );
}

#[test]
fn unknown_key_is_rejected() {
    let err = ParserConfig::from_json(r#"{"bogus": 1}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
    assert!(err.to_string().starts_with("invalid parser configuration: unknown field `bogus`"));
}

#[test]
fn operator_overrides() {
    let config = ParserConfig::from_json(indoc! {r#"
        {
          "operators": [
            { "group": "and", "pattern": "\\s*&&\\s*" },
            { "group": "or", "pattern": null }
          ]
        }
    "#})
    .unwrap();

    insta::assert_snapshot!(ast(&config, "a&&b OR c"), @r#"
    Group
      And
        Word "a"
        Word "b"
      Word "OR"
      Word "c"
    "#);
}

#[test]
fn syntax_toggles() {
    let config = ParserConfig::from_json(r#"{"plus_minus": false, "comparisons": false}"#).unwrap();

    insta::assert_snapshot!(ast(&config, "+a p:<5"), @r#"
    Group
      Word "+a"
      Word "<5" @p
    "#);
}

#[test]
fn plus_minus_enabled() {
    let config = ParserConfig::from_json(r#"{"plus_minus": true}"#).unwrap();

    insta::assert_snapshot!(ast(&config, "+a -b"), @r#"
    AndNot
      AndMaybe
        And
          Word "a"
        Or
      Or
        Word "b"
    "#);
}

#[test]
fn copy_fields_inline() {
    let config = ParserConfig::from_json(
        r#"{"copy_fields": {"map": {"a": "b"}, "group": null, "mirror": true}}"#,
    )
    .unwrap();
    let copy = config.copy_fields.as_ref().unwrap();
    assert_eq!(copy.group, None);

    insta::assert_snapshot!(ast(&config, "b:x"), @r#"
    Group
      Word "x" @b
      Word "x" @a
    "#);
}

#[test]
fn multifield_group_defaults_to_or() {
    let config = ParserConfig::from_json(r#"{"multifield": {"fields": ["a"]}}"#).unwrap();
    assert_eq!(config.multifield.unwrap().group, GroupKind::Or);
}
