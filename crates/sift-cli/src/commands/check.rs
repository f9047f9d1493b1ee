use sift_lib::Diagnostics;

use super::input::{self, LoadedQuery, QueryInput};

pub struct CheckArgs {
    pub input: QueryInput,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let (parser, query) = input::prepare(&args.input);
    let parse = parser.parse(&query.text);

    if !parse.diagnostics().is_empty() {
        eprintln!("{}", render_report(parse.diagnostics(), &query, args.color));
    }
    if !passes(parse.diagnostics(), args.strict) {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}

/// Annotated diagnostics followed by a count line.
pub(crate) fn render_report(diagnostics: &Diagnostics, query: &LoadedQuery, color: bool) -> String {
    diagnostics
        .printer()
        .source(&query.text)
        .path(&query.name)
        .colored(color)
        .summary(true)
        .render()
}

/// Parsing always recovers, so only `--strict` turns warnings into failure.
pub(crate) fn passes(diagnostics: &Diagnostics, strict: bool) -> bool {
    !(strict && diagnostics.has_warnings())
}
