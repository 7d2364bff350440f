//! JSON dump of the parsed commands, for tooling that wants the records
//! rather than the page.
use crate::error::Result;
use crate::types::{CommandMap, QueryCommand};

/// Pretty-printed JSON array of commands in name order.
pub fn render_json(commands: &CommandMap) -> Result<String> {
    let sorted: Vec<&QueryCommand> = commands.values().collect();
    Ok(serde_json::to_string_pretty(&sorted)?)
}
