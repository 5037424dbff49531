//! Catalog loading
//!
//! Reads a catalog document from disk or from an in-memory string. The
//! document is a single JSON object mapping country codes to entries;
//! unknown fields inside an entry are tolerated so the file can grow
//! without breaking older builds.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use super::errors::{CatalogError, CatalogResult};
use super::types::{Catalog, CountryEntry};

/// Load and parse a catalog file.
pub fn load_file(path: &Path) -> CatalogResult<Catalog> {
    let shown = path.display().to_string();
    let content =
        fs::read_to_string(path).map_err(|e| CatalogError::io(shown.clone(), e))?;
    parse_with_source(&content, &shown)
}

/// Parse a catalog document from an in-memory string.
pub fn parse_str(content: &str) -> CatalogResult<Catalog> {
    parse_with_source(content, "<in-memory>")
}

fn parse_with_source(content: &str, source: &str) -> CatalogResult<Catalog> {
    let entries: IndexMap<String, CountryEntry> = serde_json::from_str(content)
        .map_err(|e| CatalogError::malformed(source, e))?;
    Ok(Catalog::from_entries(entries))
}
