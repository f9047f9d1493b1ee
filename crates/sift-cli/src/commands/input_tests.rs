use std::path::PathBuf;

use super::input::{LoadError, QueryInput};

fn input() -> QueryInput {
    QueryInput {
        query_path: None,
        query_text: None,
        config: None,
        field: None,
    }
}

#[test]
fn inline_text_wins_over_path() {
    let input = QueryInput {
        query_path: Some(PathBuf::from("query.txt")),
        query_text: Some("a b".to_owned()),
        ..input()
    };

    let query = input.load_query().unwrap();
    assert_eq!(query.name, "<query>");
    assert_eq!(query.text, "a b");
}

#[test]
fn missing_query() {
    let err = input().load_query().unwrap_err();

    assert!(matches!(err, LoadError::MissingQuery));
    insta::assert_snapshot!(err, @"query is required: use positional argument or -q/--query");
}

#[test]
fn unreadable_query_file() {
    let input = QueryInput {
        query_path: Some(PathBuf::from("does/not/exist.txt")),
        ..input()
    };

    let err = input.load_query().unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }));
    assert!(err.to_string().starts_with("failed to read 'does/not/exist.txt'"));
}

#[test]
fn unreadable_config_file() {
    let input = QueryInput {
        config: Some(PathBuf::from("does/not/exist.json")),
        ..input()
    };

    assert!(matches!(input.load_parser(), Err(LoadError::Read { .. })));
}

#[test]
fn field_flag_sets_default_field() {
    let input = QueryInput {
        field: Some("body".to_owned()),
        ..input()
    };

    let parser = input.load_parser().unwrap();
    assert_eq!(parser.default_field(), Some("body"));
}

#[test]
fn defaults_without_config() {
    let parser = input().load_parser().unwrap();

    assert_eq!(parser.default_field(), None);
    assert_eq!(parser.filter_order().len(), 7);
}
