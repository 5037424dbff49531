//! Catalog subsystem for planpick
//!
//! The catalog is the read-only dataset behind every selection: countries
//! keyed by code, each with labelled size tiers holding ordered plan lists.
//!
//! # Design Principles
//!
//! - Loaded once at boot, immutable afterwards
//! - Countries ordered by display name, case-insensitive and deterministic
//! - Tiers and plans keep the order they were authored in
//! - A country without a `size` mapping is valid and simply has no tiers
//! - Unreadable or malformed catalog files are fatal

mod errors;
mod loader;
mod types;

pub use errors::{CatalogError, CatalogErrorCode, CatalogResult, Severity};
pub use loader::{load_file, parse_str};
pub use types::{Catalog, Country, CountryEntry, Plan};
