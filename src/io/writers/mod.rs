//! Listing renderers. `html` feeds the compiled-in askama template,
//! `template` renders a user-supplied template file at runtime, and `json`
//! serializes the records directly.
pub mod html;
pub mod json;
pub mod template;

pub use html::{QueryListingTemplate, render_html};
pub use json::render_json;
pub use template::render_template_file;
