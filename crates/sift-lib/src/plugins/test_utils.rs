use crate::{QueryParser, QueryParserBuilder, TreePrinter};

pub fn defaults() -> QueryParserBuilder {
    QueryParser::builder().default_plugins()
}

pub fn ast(source: &str) -> String {
    ast_with(defaults(), source)
}

pub fn ast_with(builder: QueryParserBuilder, source: &str) -> String {
    let parser = builder.build().expect("parser builds");
    let parse = parser.parse(source);
    TreePrinter::new(parse.root()).dump()
}

pub fn ast_with_spans(source: &str) -> String {
    let parser = defaults().build().expect("parser builds");
    let parse = parser.parse(source);
    TreePrinter::new(parse.root()).with_spans(true).dump()
}

pub fn diagnostics(source: &str) -> String {
    diagnostics_with(defaults(), source)
}

pub fn diagnostics_with(builder: QueryParserBuilder, source: &str) -> String {
    let parser = builder.build().expect("parser builds");
    parser.parse(source).diagnostics().printer().render()
}
