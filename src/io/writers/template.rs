//! User-supplied listing templates, loaded and rendered at runtime.
//!
//! The template sees `title`, `generated_at`, and `commands`: the records in
//! name order, each with `name`, `description`, `arguments` and `example`
//! (`example` is left out when the doc has none).
//! Auto-escaping follows the template's file extension (`.html`, `.htm` and
//! `.xml` are escaped).
use std::fs;
use std::path::Path;

use minijinja::{Environment, context};

use super::html::generation_timestamp;
use crate::error::{Error, Result};
use crate::types::{CommandMap, QueryCommand};

/// Render `commands` through the template file at `path`.
pub fn render_template_file(commands: &CommandMap, title: &str, path: &Path) -> Result<String> {
    let source = fs::read_to_string(path)?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("template");
    let sorted: Vec<&QueryCommand> = commands.values().collect();

    let template_error = |source: minijinja::Error| Error::CustomTemplate {
        path: path.to_path_buf(),
        source,
    };

    let mut env = Environment::new();
    env.add_template(name, &source).map_err(template_error)?;
    let template = env.get_template(name).map_err(template_error)?;
    template
        .render(context! {
            title => title,
            generated_at => generation_timestamp(),
            commands => sorted,
        })
        .map_err(template_error)
}
