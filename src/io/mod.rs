//! I/O layer: glob expansion and whole-file reads for query docs (`reader`),
//! and the HTML/JSON renderers that produce the listing (`writers`).
pub mod reader;
pub use reader::{Expansion, expand_pattern, read_doc};

pub mod writers;
