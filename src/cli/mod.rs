//! Command Line Interface (CLI) layer for querydocs.
//!
//! Defines argument parsing (`args`), CLI error types (`errors`), and the
//! orchestration logic (`runner`) that merges config and flags before calling
//! into `querydocs::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
