//! CLI argument definitions using clap
//!
//! Commands:
//! - planpick start --config <path>
//! - planpick view --config <path>
//! - planpick check --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// planpick - A deterministic, catalog-driven eSIM plan selection engine
#[derive(Parser, Debug)]
#[command(name = "planpick")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Boot the engine and serve selection intents from stdin
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./planpick.json")]
        config: PathBuf,
    },

    /// Boot the engine, print the initial view, and exit
    View {
        /// Path to configuration file
        #[arg(long, default_value = "./planpick.json")]
        config: PathBuf,
    },

    /// Load the catalog and print summary statistics
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./planpick.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
