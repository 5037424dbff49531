//! CLI command implementations
//!
//! Every command follows the same boot sequence: load configuration,
//! load the catalog, seed the engine. `start` then serves intents from
//! stdin; `view` and `check` are one-shots. A boot failure at any step
//! stops the process before anything is served.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::ApiHandler;
use crate::catalog::{self, Catalog};
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::selection::SelectionEngine;
use crate::view::SelectionView;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_lines, write_error, write_json};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the catalog file (optional, default "./catalog.json")
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
}

fn default_catalog_path() -> String {
    "./catalog.json".to_string()
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.catalog_path.is_empty() {
            return Err(CliError::config_error("catalog_path must not be empty"));
        }

        Ok(())
    }

    /// Get catalog path as Path
    pub fn catalog_path(&self) -> &Path {
        Path::new(&self.catalog_path)
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Start { config } => start(&config),
        Command::View { config } => view(&config),
        Command::Check { config } => check(&config),
    }
}

/// Boot the engine and serve selection intents from stdin
///
/// Boot sequence:
/// 1. Configuration load
/// 2. Catalog load
/// 3. Engine seed
///
/// Then enters the serving loop: one JSON request per stdin line, one
/// JSON response per stdout line, until EOF.
pub fn start(config_path: &Path) -> CliResult<()> {
    let engine = boot(config_path)?;
    let mut handler = ApiHandler::new(engine);

    log_event(Event::Serving);

    for request_result in read_lines() {
        match request_result {
            Ok(request) => {
                let response = handler.handle(&request);
                write_json(&response.to_json())?;
            }
            Err(e) => {
                // Stdin is gone; nothing more can arrive.
                write_error(e.code_str(), e.message())?;
                break;
            }
        }
    }

    log_event(Event::SessionClosed);

    Ok(())
}

/// Boot the engine, print the initial view as one JSON line, and exit
pub fn view(config_path: &Path) -> CliResult<()> {
    let engine = boot(config_path)?;
    let view = SelectionView::from_engine(&engine);

    write_json(&serde_json::to_string(&view)?)?;

    Ok(())
}

/// Load the catalog only and print summary statistics
///
/// A lint for catalog authors: exits non-zero when the file does not
/// load, without seeding an engine.
pub fn check(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let catalog = load_catalog(&config)?;

    let summary = json!({
        "countries": catalog.len(),
        "tiers": catalog.tier_count(),
        "plans": catalog.plan_count(),
    });
    write_json(&summary.to_string())?;

    Ok(())
}

/// Boot sequence shared by `start` and `view`
fn boot(config_path: &Path) -> CliResult<SelectionEngine> {
    log_event(Event::BootStart);

    let config = Config::load(config_path)?;
    log_event_with_fields(Event::ConfigLoaded, &[("catalog_path", &config.catalog_path)]);

    let catalog = load_catalog(&config)?;
    log_event_with_fields(
        Event::CatalogLoaded,
        &[
            ("countries", &catalog.len().to_string()),
            ("tiers", &catalog.tier_count().to_string()),
            ("plans", &catalog.plan_count().to_string()),
        ],
    );

    let engine = SelectionEngine::new(catalog);
    let selection = engine.selection();
    log_event_with_fields(
        Event::SelectionSeeded,
        &[
            ("country", selection.country_code.as_deref().unwrap_or("")),
            ("size", selection.size_label.as_deref().unwrap_or("")),
        ],
    );

    log_event(Event::BootComplete);

    Ok(engine)
}

fn load_catalog(config: &Config) -> CliResult<Catalog> {
    catalog::load_file(config.catalog_path()).map_err(|e| {
        log_event_with_fields(Event::CatalogLoadFailed, &[("reason", e.message())]);
        CliError::boot_failed(e.to_string())
    })
}
