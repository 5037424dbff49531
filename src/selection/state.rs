//! Selection state
//!
//! The selection is a triple of country code, size label, and plan index.
//! `None` marks a field with nothing to point at, which is a valid state,
//! not an error: an empty catalog has no country, a tierless country has
//! no size label.

use serde::{Deserialize, Serialize};

/// The current position in the catalog.
///
/// `plan_index` is positional within the selected tier's plan list and
/// only meaningful while `size_label` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Selection {
    /// Code of the selected country, `None` when the catalog is empty
    pub country_code: Option<String>,
    /// Label of the selected tier, `None` when the country has no tiers
    pub size_label: Option<String>,
    /// Index into the selected tier's plan list
    pub plan_index: usize,
}

impl Selection {
    /// The selection before any seeding: nothing points anywhere.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a fully specified selection
    pub fn new(
        country_code: impl Into<String>,
        size_label: impl Into<String>,
        plan_index: usize,
    ) -> Self {
        Self {
            country_code: Some(country_code.into()),
            size_label: Some(size_label.into()),
            plan_index,
        }
    }

    /// Returns true if no country is selected
    pub fn is_empty(&self) -> bool {
        self.country_code.is_none()
    }
}
