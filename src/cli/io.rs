//! JSON I/O handling for CLI
//!
//! - Input: one JSON request object per stdin line
//! - Output: one JSON response object per stdout line
//! - UTF-8 only; blank lines are skipped
//!
//! Parsing of request content happens in the API layer; this module
//! only moves lines.

use std::io::{self, BufRead, Write};

use super::errors::{CliError, CliResult};

/// Read request lines from stdin until EOF.
///
/// Blank lines are dropped so an interactive session can separate
/// requests visually without producing parse errors.
pub fn read_lines() -> impl Iterator<Item = CliResult<String>> {
    let stdin = io::stdin();
    stdin
        .lock()
        .lines()
        .map(|line| line.map_err(CliError::from))
        .filter(|line| match line {
            Ok(l) => !l.trim().is_empty(),
            Err(_) => true,
        })
}

/// Write a raw JSON string to stdout as one line
pub fn write_json(json_str: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", json_str)?;
    stdout.flush()?;

    Ok(())
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
