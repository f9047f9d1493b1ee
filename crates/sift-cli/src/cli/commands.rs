//! Command builders for the CLI.
//!
//! Every command accepts the same flags; the ones a command ignores are
//! hidden from its `--help`.

use clap::Command;

use super::args::*;

/// Query input and parser setup, shared by all commands.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(query_path_arg())
        .arg(query_text_arg())
        .arg(config_arg())
        .arg(field_arg())
}

/// Add hidden check args (for commands that always succeed on parse).
fn with_hidden_check_args(cmd: Command) -> Command {
    cmd.arg(strict_arg().hide(true))
}

/// Add hidden tree output args (for commands that print no tree).
fn with_hidden_tree_args(cmd: Command) -> Command {
    cmd.arg(spans_arg().hide(true))
        .arg(syntax_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("sift")
        .about("Parse free-text search queries into syntax trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(ast_command())
        .subcommand(check_command())
        .subcommand(trace_command())
}

/// Show the parsed tree of a query.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Show the parsed tree of a query")
        .override_usage(
            "\
  sift ast <QUERY>
  sift ast -q <TEXT> [-c <FILE>]",
        )
        .after_help(
            r#"EXAMPLES:
  sift ast query.txt                        # tree dump
  sift ast -q 'title:rust OR cargo^2'       # inline query
  sift ast -q 'a AND (b' --spans            # with byte offsets
  sift ast -q 'a AND (b OR c)' --syntax     # back to query syntax
  sift ast -q 'tags:x' -c parser.json       # custom configuration"#,
        );

    with_hidden_check_args(
        with_input_args(cmd)
            .arg(spans_arg())
            .arg(syntax_arg())
            .arg(color_arg()),
    )
}

/// Report the diagnostics of a query.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Report diagnostics for a query")
        .override_usage(
            "\
  sift check <QUERY> [--strict]
  sift check -q <TEXT> [--strict]",
        )
        .after_help(
            r#"EXAMPLES:
  sift check query.txt                # print diagnostics
  sift check -q 'a AND' --strict      # exit 1 on warnings"#,
        );

    with_hidden_tree_args(
        with_input_args(cmd)
            .arg(strict_arg())
            .arg(color_arg()),
    )
}

/// Show every pipeline stage for a query.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Show the tokens and the tree after every filter")
        .override_usage(
            "\
  sift trace <QUERY>
  sift trace -q <TEXT> [--spans]",
        )
        .after_help(
            r#"EXAMPLES:
  sift trace -q 'a OR b^2'            # every stage
  sift trace query.txt --spans        # with byte offsets"#,
        );

    with_hidden_check_args(
        with_input_args(cmd)
            .arg(spans_arg())
            .arg(color_arg())
            .arg(syntax_arg().hide(true)),
    )
}
