use crate::{Analyzer, FieldSchema, Schema, TextKind, TextNode};

#[test]
fn from_json_preserves_order() {
    let schema = FieldSchema::from_json(r#"{"title": "lowercase", "id": "keyword", "body": "whitespace"}"#)
        .unwrap();

    let names: Vec<_> = schema.field_names().collect();
    assert_eq!(names, ["title", "id", "body"]);
    assert_eq!(schema.analyzer("id"), Some(Analyzer::Keyword));
}

#[test]
fn from_json_rejects_unknown_analyzer() {
    assert!(FieldSchema::from_json(r#"{"title": "stemming"}"#).is_err());
}

#[test]
fn analyzers() {
    assert_eq!(Analyzer::Keyword.analyze("New York"), ["New York"]);
    assert!(Analyzer::Keyword.analyze("").is_empty());
    assert_eq!(Analyzer::Whitespace.analyze(" New  York "), ["New", "York"]);
    assert_eq!(Analyzer::Lowercase.analyze("New York"), ["new", "york"]);
}

#[test]
fn analyzed_terms_use_field_analyzer() {
    let schema = FieldSchema::new()
        .with_field("title", Analyzer::Lowercase)
        .with_field("id", Analyzer::Keyword);

    let mut phrase = TextNode::new(TextKind::Phrase {
        text: "Big Apple".into(),
        slop: 1,
    });
    assert_eq!(phrase.analyzed_terms(Some(&schema), Some("title")), ["big", "apple"]);

    phrase.field = Some("id".into());
    assert_eq!(phrase.analyzed_terms(Some(&schema), Some("title")), ["Big Apple"]);
}

#[test]
fn analyzed_terms_fall_back_to_whitespace_split() {
    let schema: FieldSchema = [("title", Analyzer::Lowercase)].into_iter().collect();
    let node = TextNode::new(TextKind::Word("Big Apple".into()));

    assert_eq!(node.analyzed_terms(Some(&schema), Some("body")), ["Big", "Apple"]);
    assert_eq!(node.analyzed_terms(None, Some("title")), ["Big", "Apple"]);
    assert!(schema.has_field("title"));
    assert_eq!(schema.analyze("missing", "A b"), ["A", "b"]);
}
