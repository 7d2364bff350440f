use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Paths matched by a glob pattern.
#[derive(Debug, Default)]
pub struct Expansion {
    /// Regular files, sorted by path
    pub files: Vec<PathBuf>,
    /// Entries the glob walker could not read; `GlobError::path` names them
    pub unreadable: Vec<glob::GlobError>,
}

/// Expand a glob pattern to the regular files it matches.
///
/// Entries the glob walker cannot read are collected in
/// [`Expansion::unreadable`] rather than failing the expansion. A pattern that
/// matches nothing yields an empty expansion.
pub fn expand_pattern(pattern: &str) -> Result<Expansion> {
    let entries = glob::glob(pattern).map_err(|source| Error::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut expansion = Expansion::default();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => expansion.files.push(path),
            Ok(path) => debug!("Skipping non-file match: {:?}", path),
            Err(e) => expansion.unreadable.push(e),
        }
    }

    if expansion.files.is_empty() && expansion.unreadable.is_empty() {
        warn!("Pattern \"{}\" matched no query docs", pattern);
    }

    expansion.files.sort();
    Ok(expansion)
}

/// Read a whole query doc into memory.
pub fn read_doc(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}
