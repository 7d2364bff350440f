//! Crate-level error type and `Result` alias.
//! Wraps I/O, glob, template and JSON failures, and carries per-document
//! parse errors together with the offending path.
use std::path::PathBuf;

use thiserror::Error;

use crate::core::parser::DocError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid glob pattern \"{pattern}\": {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Unreadable glob entry: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Malformed query doc {}: {}", path.display(), source)]
    Doc {
        path: PathBuf,
        #[source]
        source: DocError,
    },

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Template {} failed: {}", path.display(), source)]
    CustomTemplate {
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config {}: {}", path.display(), reason)]
    Config { path: PathBuf, reason: String },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },
}
