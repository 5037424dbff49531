//! Selection subsystem for planpick
//!
//! Holds the cascading selection state (country, size tier, plan index)
//! and keeps it consistent with the catalog across every mutation.
//!
//! # Consistency Rules
//!
//! - Selected country exists in the catalog, or is empty because the
//!   catalog is (SEL1)
//! - Selected size is a tier the selected country offers, or is empty
//!   because the country offers none (SEL2)
//! - Plan index is in range for the selected tier's plan list, or 0
//!   when there is nothing to point at (SEL3)
//! - Invalid intents are rejected whole; the selection never changes on
//!   a rejected intent (SEL4)
//!
//! # Design Principles
//!
//! - Validate against the catalog before mutating, never after
//! - Repair runs after every accepted mutation and is idempotent
//! - Fallbacks are positional: first country, first tier, index 0
//! - Empty is a state, not an error

mod engine;
mod errors;
mod repair;
mod state;

pub use engine::SelectionEngine;
pub use errors::{SelectionError, SelectionErrorCode, SelectionResult, Severity};
pub use state::Selection;
