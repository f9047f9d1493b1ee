//! Query and parser loading shared by all commands.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use sift_lib::{Diagnostics, ParserConfig, QueryParser};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("query is required: use positional argument or -q/--query")]
    MissingQuery,

    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration '{path}': {source}")]
    Config {
        path: String,
        #[source]
        source: sift_lib::Error,
    },

    #[error(transparent)]
    Parser(#[from] sift_lib::Error),
}

pub struct QueryInput {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub config: Option<PathBuf>,
    pub field: Option<String>,
}

/// A query string and the name diagnostics refer to it by.
#[derive(Debug)]
pub struct LoadedQuery {
    pub name: String,
    pub text: String,
}

impl QueryInput {
    /// Inline text wins over the positional path.
    pub fn load_query(&self) -> Result<LoadedQuery, LoadError> {
        if let Some(text) = &self.query_text {
            return Ok(LoadedQuery {
                name: "<query>".to_owned(),
                text: text.clone(),
            });
        }

        let Some(path) = &self.query_path else {
            return Err(LoadError::MissingQuery);
        };
        let (name, content) = if path.as_os_str() == "-" {
            ("<stdin>".to_owned(), read_stdin()?)
        } else {
            (path.display().to_string(), read_file(path)?)
        };

        // A file's final newline is not part of the query.
        let text = content.trim_end_matches(['\n', '\r']).to_owned();
        Ok(LoadedQuery { name, text })
    }

    /// Parser from the configuration file (or defaults), with `--field` applied last.
    pub fn load_parser(&self) -> Result<QueryParser, LoadError> {
        let mut config = match &self.config {
            Some(path) => {
                let json = read_file(path)?;
                ParserConfig::from_json(&json).map_err(|source| LoadError::Config {
                    path: path.display().to_string(),
                    source,
                })?
            }
            None => ParserConfig::default(),
        };
        if let Some(field) = &self.field {
            config.default_field = Some(field.clone());
        }
        Ok(config.build()?)
    }
}

/// Loads parser and query, or exits with an error message.
pub fn prepare(input: &QueryInput) -> (QueryParser, LoadedQuery) {
    let loaded = input
        .load_parser()
        .and_then(|parser| Ok((parser, input.load_query()?)));
    match loaded {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn render_diagnostics(diagnostics: &Diagnostics, query: &LoadedQuery, color: bool) -> String {
    diagnostics
        .printer()
        .source(&query.text)
        .path(&query.name)
        .colored(color)
        .render()
}

/// Writes diagnostics to stderr, if there are any.
pub fn print_diagnostics(diagnostics: &Diagnostics, query: &LoadedQuery, color: bool) {
    if !diagnostics.is_empty() {
        eprintln!("{}", render_diagnostics(diagnostics, query, color));
    }
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })
}

fn read_stdin() -> Result<String, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|source| LoadError::Read {
            path: "<stdin>".to_owned(),
            source,
        })?;
    Ok(buf)
}
