#![doc = r#"
querydocs: turns TeamSpeak ServerQuery command docs into a static listing.

The ServerQuery docs ship as one plain-text file per command. Each starts with a
`Usage:` block, followed by a description paragraph and an optional `Example:`
block. This crate parses a glob of such files into a name-ordered map of
[`QueryCommand`] records and renders them as an HTML page (the built-in askama
template, or a user-supplied minijinja template file) or a JSON array. It powers the `querydocs` CLI and can be embedded directly.

Quick start
-----------
```rust,no_run
use std::path::PathBuf;
use querydocs::{generate, OutputFormat, RenderParams};

fn main() -> querydocs::Result<()> {
    let params = RenderParams {
        pattern: Some("docs/query/*.txt".to_string()),
        output: Some(PathBuf::from("query.html")),
        format: OutputFormat::Html,
        ..RenderParams::default()
    };

    let report = generate(&params)?;
    println!("parsed={} skipped={}", report.parsed, report.skipped);
    Ok(())
}
```

Parse a single doc
------------------
```rust
use querydocs::parse_doc;

let cmd = parse_doc("Usage: use [sid={serverID}]\n\nSelects the virtual server.\n").unwrap();
assert_eq!(cmd.name, "use");
assert_eq!(cmd.arguments, "[sid={serverID}]");
```

Error handling
--------------
Library functions return `querydocs::Result<T>`. Malformed docs do not fail a
batch: `parse_docs` skips them and records the reason in `ParseReport::failures`.

Useful modules
--------------
- [`api`]: parse a doc set, render, write.
- [`core`]: the doc parser and render parameters.
- [`io`]: glob expansion, file reads, HTML/JSON writers.
- [`error`]: crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::params::{DEFAULT_TITLE, RenderParams};
pub use crate::core::parser::{DocError, parse_doc};
pub use error::{Error, Result};
pub use types::{CommandMap, OutputFormat, QueryCommand};

// High-level API re-exports
pub use api::{ParseReport, generate, parse_doc_file, parse_docs, render, render_to_path};
