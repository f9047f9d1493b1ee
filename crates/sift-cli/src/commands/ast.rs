//! Show the parsed tree of a query.

use sift_core::{Colors, Group};
use sift_lib::TreePrinter;

use super::input::{self, QueryInput};

pub struct AstArgs {
    pub input: QueryInput,
    pub spans: bool,
    pub syntax: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let (parser, query) = input::prepare(&args.input);
    let parse = parser.parse(&query.text);

    input::print_diagnostics(parse.diagnostics(), &query, args.color);
    print!("{}", render_tree(parse.root(), &args));
}

pub(crate) fn render_tree(root: &Group, args: &AstArgs) -> String {
    if args.syntax {
        return format!("{root}\n");
    }
    TreePrinter::new(root)
        .with_spans(args.spans)
        .with_colors(Colors::new(args.color))
        .dump()
}
