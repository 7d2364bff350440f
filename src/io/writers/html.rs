//! HTML listing rendered through the compiled-in `templates/query.html`.
use askama::Template;

use crate::error::Result;
use crate::types::{CommandMap, QueryCommand};

/// Template binding for the command listing page.
#[derive(Template, Debug)]
#[template(path = "query.html")]
pub struct QueryListingTemplate<'a> {
    pub title: &'a str,
    /// Commands in listing order
    pub commands: &'a [&'a QueryCommand],
    /// Human-readable generation timestamp (UTC)
    pub generated_at: &'a str,
}

pub(crate) fn generation_timestamp() -> String {
    chrono::Utc::now()
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string()
}

/// Render the HTML listing for `commands`, sorted by command name.
pub fn render_html(commands: &CommandMap, title: &str) -> Result<String> {
    let sorted: Vec<&QueryCommand> = commands.values().collect();
    let generated_at = generation_timestamp();

    let page = QueryListingTemplate {
        title,
        commands: &sorted,
        generated_at: &generated_at,
    };
    Ok(page.render()?)
}
