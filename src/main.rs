//! querydocs CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the conversion, and
//! exit with an error status on fatal failures. For programmatic use, prefer
//! the library API (`querydocs::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
