use super::ast::{AstArgs, render_tree};
use super::input::QueryInput;

fn args(query: &str) -> AstArgs {
    AstArgs {
        input: QueryInput {
            query_path: None,
            query_text: Some(query.to_owned()),
            config: None,
            field: None,
        },
        spans: false,
        syntax: false,
        color: false,
    }
}

fn render(args: &AstArgs) -> String {
    let parser = args.input.load_parser().unwrap();
    let query = args.input.load_query().unwrap();
    render_tree(parser.parse(&query.text).root(), args)
}

#[test]
fn dump_by_default() {
    insta::assert_snapshot!(render(&args("a OR b AND c")), @r#"
    Group
      Or
        Word "a"
        And
          Word "b"
          Word "c"
    "#);
}

#[test]
fn dump_with_spans() {
    let args = AstArgs {
        spans: true,
        ..args("a^2")
    };

    insta::assert_snapshot!(render(&args), @r#"
    Group
      Word "a" ^2 [0..1]
    "#);
}

#[test]
fn syntax_output() {
    let args = AstArgs {
        syntax: true,
        ..args("a OR b AND c")
    };

    insta::assert_snapshot!(render(&args), @"((a OR (b AND c)))");
}
