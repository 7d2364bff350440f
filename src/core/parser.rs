//! Query doc parser.
//!
//! A ServerQuery doc is a plain-text file laid out as:
//!
//! ```text
//! Usage: clientlist [-uid] [-away] [-voice] [-times] [-groups]
//!                   [-info] [-icon] [-country]
//!
//! Displays a list of clients online on a virtual server including
//! their ID, nickname, status flags, etc.
//!
//! Example:
//!    clientlist -away
//!    clid=5 cid=7 client_database_id=40 client_nickname=ScP
//!    error id=0 msg=ok
//! ```
//!
//! Lines are scanned once and bucketed under the most recently seen section.
//! The usage block runs until the first blank line, the description is the
//! paragraph that follows, and an `Example:` label opens the example block.
use thiserror::Error;
use tracing::debug;

use crate::types::QueryCommand;

const USAGE_LABEL: &str = "Usage:";
const EXAMPLE_LABELS: [&str; 2] = ["Example:", "Examples:"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocError {
    #[error("document is empty")]
    Empty,

    #[error("expected the first line to start with \"Usage:\", found \"{found}\"")]
    MissingUsage { found: String },

    #[error("usage line does not name a command")]
    MissingCommand,

    #[error("no description paragraph after the usage block")]
    MissingDescription,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Usage,
    Description,
    /// Unlabelled text after the description paragraph; ignored.
    Trailing,
    Example,
}

fn is_example_label(trimmed: &str) -> bool {
    EXAMPLE_LABELS
        .iter()
        .any(|label| trimmed.eq_ignore_ascii_case(label))
}

/// Parse a single query doc into a [`QueryCommand`].
pub fn parse_doc(text: &str) -> Result<QueryCommand, DocError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.lines().skip_while(|line| line.trim().is_empty());

    let first = lines.next().ok_or(DocError::Empty)?.trim();
    let Some(first_rest) = first.strip_prefix(USAGE_LABEL) else {
        return Err(DocError::MissingUsage {
            found: first.to_string(),
        });
    };

    let mut usage: Vec<&str> = vec![first_rest];
    let mut description: Vec<&str> = Vec::new();
    let mut example: Vec<&str> = Vec::new();
    let mut section = Section::Usage;

    for line in lines {
        let trimmed = line.trim();
        if is_example_label(trimmed) {
            section = Section::Example;
            continue;
        }

        match section {
            Section::Usage => {
                if trimmed.is_empty() {
                    section = Section::Description;
                } else {
                    usage.push(trimmed);
                }
            }
            Section::Description => {
                if !trimmed.is_empty() {
                    description.push(trimmed);
                } else if !description.is_empty() {
                    section = Section::Trailing;
                }
            }
            Section::Trailing => {}
            Section::Example => example.push(line.trim_end()),
        }
    }

    let joined_usage = usage.join(" ");
    let mut tokens = joined_usage.split_whitespace();
    let name = tokens.next().ok_or(DocError::MissingCommand)?.to_string();
    let arguments = tokens.collect::<Vec<_>>().join(" ");

    if description.is_empty() {
        return Err(DocError::MissingDescription);
    }
    let description = description.join(" ");

    debug!(command = %name, "parsed query doc");

    Ok(QueryCommand {
        name,
        description,
        arguments,
        example: dedent(&example),
    })
}

/// Drop surrounding blank lines and strip the common leading indentation.
fn dedent(lines: &[&str]) -> Vec<String> {
    let start = lines
        .iter()
        .position(|line| !line.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(start, |i| i + 1);
    let body = &lines[start..end];

    let indent = body
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    body.iter()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                line.chars().skip(indent).collect()
            }
        })
        .collect()
}
