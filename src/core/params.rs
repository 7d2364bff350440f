use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::OutputFormat;

pub const DEFAULT_TITLE: &str = "TeamSpeak Query Commands";

/// Render parameters suitable for JSON config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// Glob pattern selecting the query docs
    pub pattern: Option<String>,
    /// Output path; None means the format's default file name
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub title: String,
    /// Template file replacing the built-in HTML listing
    pub template: Option<PathBuf>,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            pattern: None,
            output: None,
            format: OutputFormat::Html,
            title: DEFAULT_TITLE.to_string(),
            template: None,
        }
    }
}

impl RenderParams {
    /// Load parameters from a JSON file. Missing keys take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.format.default_output()))
    }

    pub fn require_pattern(&self) -> Result<&str> {
        self.pattern.as_deref().ok_or(Error::MissingArgument {
            arg: "--querycommands".to_string(),
        })
    }
}
