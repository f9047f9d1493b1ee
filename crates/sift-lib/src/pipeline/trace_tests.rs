use sift_core::Colors;

use crate::plugins::BoostPlugin;
use crate::{PrintTracer, QueryParser};

fn boost_only() -> QueryParser {
    QueryParser::builder()
        .plugin(BoostPlugin::new())
        .build()
        .unwrap()
}

#[test]
fn records_every_stage() {
    let mut tracer = PrintTracer::new();
    boost_only().parse_traced("a^2", &mut tracer);

    insta::assert_snapshot!(tracer.dump(), @r#"
    tokens
      Word "a"
      Boost "^2"
    clean_boost (0)
      Group
        Word "a"
        Boost "^2"
    apply_boost (700)
      Group
        Word "a" ^2
    "#);
}

#[test]
fn spans_are_optional() {
    let mut tracer = PrintTracer::new().with_spans(true);
    boost_only().parse_traced("^2", &mut tracer);

    insta::assert_snapshot!(tracer.dump(), @r#"
    tokens
      Boost "^2" [0..2]
    clean_boost (0)
      Group
        Word "^2" [0..2]
    apply_boost (700)
      Group
        Word "^2" [0..2]
    "#);
}

#[test]
fn traced_parse_matches_plain_parse() {
    let parser = QueryParser::new("body").unwrap();
    let query = "title:(a OR b)^2 NOT c";

    let mut tracer = PrintTracer::new().with_colors(Colors::ON);
    let traced = parser.parse_traced(query, &mut tracer);
    let plain = parser.parse(query);

    assert_eq!(traced.root(), plain.root());
    assert_eq!(traced.diagnostics(), plain.diagnostics());
    assert_eq!(tracer.lines()[0], "\x1b[2mtokens\x1b[0m");
}
