use sift_lib::QueryParser;

use super::check::{passes, render_report};
use super::input::{LoadedQuery, render_diagnostics};

fn query(text: &str) -> LoadedQuery {
    LoadedQuery {
        name: "<query>".to_owned(),
        text: text.to_owned(),
    }
}

#[test]
fn clean_query_passes_strict() {
    let parse = QueryParser::new("body").unwrap().parse("a AND b");

    assert!(passes(parse.diagnostics(), true));
}

#[test]
fn warnings_fail_only_under_strict() {
    let parse = QueryParser::new("body").unwrap().parse("a AND ");

    assert!(passes(parse.diagnostics(), false));
    assert!(!passes(parse.diagnostics(), true));
}

#[test]
fn info_passes_strict() {
    let parse = QueryParser::new("body").unwrap().parse("a^ b");

    assert!(!parse.diagnostics().is_empty());
    assert!(passes(parse.diagnostics(), true));
}

#[test]
fn diagnostics_are_annotated_with_query_name() {
    let query = query("a AND ");
    let parse = QueryParser::new("body").unwrap().parse(&query.text);
    let out = render_diagnostics(parse.diagnostics(), &query, false);

    assert!(out.contains("warning"), "{out}");
    assert!(out.contains("<query>"), "{out}");
    assert!(out.contains("`AND` has no operand"), "{out}");
}

#[test]
fn report_ends_with_summary() {
    let query = query("a AND ");
    let parse = QueryParser::new("body").unwrap().parse(&query.text);
    let out = render_report(parse.diagnostics(), &query, false);

    assert!(out.ends_with("\n\n1 warning"), "{out}");
}
