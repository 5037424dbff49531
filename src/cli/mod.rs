//! CLI module for planpick
//!
//! Provides command-line interface for:
//! - start: Boot the engine and enter the serving loop
//! - view: One-shot initial view snapshot
//! - check: Catalog lint with summary statistics

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, run, run_command, start, view, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_lines, write_error, write_json};
