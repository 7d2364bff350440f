//! High-level library API: parse a glob of query docs into a name-ordered
//! command map, render it, and write the listing. Prefer these entrypoints
//! over the parser and writer modules when embedding querydocs.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::params::RenderParams;
use crate::core::parser::parse_doc;
use crate::error::{Error, Result};
use crate::io::reader::{expand_pattern, read_doc};
use crate::io::writers::{render_html, render_json, render_template_file};
use crate::types::{CommandMap, OutputFormat, QueryCommand};

/// Outcome of parsing a doc set
#[derive(Debug, Default)]
pub struct ParseReport {
    pub commands: CommandMap,
    pub parsed: usize,
    pub skipped: usize,
    /// Files that were skipped, with the reason
    pub failures: Vec<(PathBuf, String)>,
}

impl ParseReport {
    fn skip(&mut self, path: &Path, err: Error) {
        warn!("Skipping {:?}: {}", path, err);
        self.skipped += 1;
        self.failures.push((path.to_path_buf(), err.to_string()));
    }
}

/// Parse a single doc file, attaching the path to any parse error.
pub fn parse_doc_file(path: &Path) -> Result<QueryCommand> {
    let text = read_doc(path)?;
    parse_doc(&text).map_err(|source| Error::Doc {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse every doc matched by `pattern`. Malformed or unreadable docs are
/// skipped and recorded in the report; only an invalid pattern is fatal.
pub fn parse_docs(pattern: &str) -> Result<ParseReport> {
    let expansion = expand_pattern(pattern)?;
    info!(
        "Found {} query docs for {:?}",
        expansion.files.len(),
        pattern
    );

    let mut report = ParseReport::default();
    for entry in expansion.unreadable {
        let path = entry.path().to_path_buf();
        report.skip(&path, Error::Glob(entry));
    }
    for path in &expansion.files {
        match parse_doc_file(path) {
            Ok(cmd) => {
                if let Some(previous) = report.commands.insert(cmd.name.clone(), cmd) {
                    warn!(
                        "Duplicate command \"{}\"; {:?} replaces an earlier doc",
                        previous.name, path
                    );
                }
                report.parsed += 1;
            }
            Err(e) => report.skip(path, e),
        }
    }

    Ok(report)
}

/// Render `commands` in name order. A configured template file replaces the
/// built-in HTML listing; JSON output ignores it.
pub fn render(commands: &CommandMap, params: &RenderParams) -> Result<String> {
    match (params.format, &params.template) {
        (OutputFormat::Html, Some(template)) => {
            render_template_file(commands, &params.title, template)
        }
        (OutputFormat::Html, None) => render_html(commands, &params.title),
        (OutputFormat::Json, template) => {
            if let Some(template) = template {
                warn!("Ignoring template {:?} for JSON output", template);
            }
            render_json(commands)
        }
    }
}

/// Render and write the listing, creating parent directories as needed.
pub fn render_to_path(commands: &CommandMap, output: &Path, params: &RenderParams) -> Result<()> {
    let rendered = render(commands, params)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, rendered)?;

    info!(
        "Wrote {} commands as {} to {:?}",
        commands.len(),
        params.format,
        output
    );
    Ok(())
}

/// Parse the docs named by `params.pattern` and write the listing to
/// `params.output` (or the format's default file name).
pub fn generate(params: &RenderParams) -> Result<ParseReport> {
    let pattern = params.require_pattern()?;
    let report = parse_docs(pattern)?;
    render_to_path(&report.commands, &params.output_path(), params)?;
    Ok(report)
}
