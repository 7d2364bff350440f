//! Shared types: the parsed `QueryCommand` record, the name-ordered
//! `CommandMap`, and the `OutputFormat` selector.
use std::collections::BTreeMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One documented query command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryCommand {
    pub name: String,
    pub description: String,
    /// Argument signature without the `Usage:` label and command name
    pub arguments: String,
    /// Example block, dedented; empty when the doc has none
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub example: Vec<String>,
}

impl QueryCommand {
    /// Full usage line as it would be typed, e.g. `clientlist [-uid]`.
    pub fn signature(&self) -> String {
        if self.arguments.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.arguments)
        }
    }

    pub fn has_example(&self) -> bool {
        !self.example.is_empty()
    }
}

/// Commands keyed by name. Iteration order is the listing order.
pub type CommandMap = BTreeMap<String, QueryCommand>;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Html,
    Json,
}

impl OutputFormat {
    pub fn default_output(&self) -> &'static str {
        match self {
            OutputFormat::Html => "query.html",
            OutputFormat::Json => "query.json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
