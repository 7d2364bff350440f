use clap::Parser;
use std::path::PathBuf;

use querydocs::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "querydocs",
    version,
    about = "Visualize TeamSpeak ServerQuery docs"
)]
pub struct CliArgs {
    /// Glob pattern selecting the query command docs (e.g. "docs/query/*.txt")
    #[arg(short = 'q', long = "querycommands")]
    pub querycommands: Option<String>,

    /// Output path (defaults to query.html, or query.json for --format json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (html or json)
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Template file to render instead of the built-in HTML listing
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Page title for the HTML listing
    #[arg(long)]
    pub title: Option<String>,

    /// JSON config file with pattern/output/format/title; flags override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
