//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` pulls the relevant fields, ignoring hidden ones
//! - `Into<*Args>` impls bridge dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::input::QueryInput;
use crate::commands::trace::TraceArgs;

/// Input flags every command reads.
pub struct InputParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub config: Option<PathBuf>,
    pub field: Option<String>,
}

impl InputParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_path: m.get_one::<PathBuf>("query_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            config: m.get_one::<PathBuf>("config").cloned(),
            field: m.get_one::<String>("field").cloned(),
        }
    }
}

impl From<InputParams> for QueryInput {
    fn from(p: InputParams) -> Self {
        Self {
            query_path: p.query_path,
            query_text: p.query_text,
            config: p.config,
            field: p.field,
        }
    }
}

pub struct AstParams {
    pub input: InputParams,
    pub spans: bool,
    pub syntax: bool,
    pub color: ColorChoice,
    // Note: strict is parsed but not extracted (unified flags)
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            spans: m.get_flag("spans"),
            syntax: m.get_flag("syntax"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            input: p.input.into(),
            spans: p.spans,
            syntax: p.syntax,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub input: InputParams,
    pub strict: bool,
    pub color: ColorChoice,
    // Note: spans and syntax are parsed but not extracted (unified flags)
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: p.input.into(),
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub input: InputParams,
    pub spans: bool,
    pub color: ColorChoice,
    // Note: strict and syntax are parsed but not extracted (unified flags)
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            spans: m.get_flag("spans"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            input: p.input.into(),
            spans: p.spans,
            color: p.color.should_colorize(),
        }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
