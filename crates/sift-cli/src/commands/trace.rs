//! Print every pipeline stage for a query.

use sift_core::Colors;
use sift_lib::PrintTracer;

use super::input::{self, QueryInput};

pub struct TraceArgs {
    pub input: QueryInput,
    pub spans: bool,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let (parser, query) = input::prepare(&args.input);

    let mut tracer = PrintTracer::new()
        .with_spans(args.spans)
        .with_colors(Colors::new(args.color));
    let parse = parser.parse_traced(&query.text, &mut tracer);

    print!("{}", tracer.dump());
    input::print_diagnostics(parse.diagnostics(), &query, args.color);
}
