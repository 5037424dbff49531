//! Catalog type definitions
//!
//! The catalog is the static dataset the engine selects from: countries,
//! each carrying labelled size tiers, each tier an ordered list of
//! purchasable plans. It is built once at boot and never mutated.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A purchasable offering: a validity period and a price.
///
/// Plans keep the order they were authored in; that order drives both
/// display and positional selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Validity period in days
    pub days: u32,
    /// Price in USD
    pub price: f64,
}

impl Plan {
    /// Create a new plan
    pub fn new(days: u32, price: f64) -> Self {
        Self { days, price }
    }
}

/// One entry of the catalog source file, keyed by country code.
///
/// Field names are the on-disk contract. `size` is optional; an absent
/// `size` means the country currently offers no tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryEntry {
    /// Display name, also the sort key
    pub country_name: String,
    /// Flag icon reference for the presentation layer
    pub flag_name: String,
    /// Tier label -> ordered plan list, in authored order
    #[serde(default)]
    pub size: IndexMap<String, Vec<Plan>>,
}

impl CountryEntry {
    /// Create an entry with no tiers
    pub fn new(country_name: impl Into<String>, flag_name: impl Into<String>) -> Self {
        Self {
            country_name: country_name.into(),
            flag_name: flag_name.into(),
            size: IndexMap::new(),
        }
    }

    /// Add a tier, keeping insertion order
    pub fn with_tier(mut self, label: impl Into<String>, plans: Vec<Plan>) -> Self {
        self.size.insert(label.into(), plans);
        self
    }
}

/// A country with its size tiers, as the engine sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    /// Unique country code (the source mapping's key)
    pub code: String,
    /// Display name
    pub name: String,
    /// Flag icon reference
    pub flag: String,
    /// Tier label -> ordered plan list, in authored order
    pub tiers: IndexMap<String, Vec<Plan>>,
}

impl Country {
    /// Returns true if the country offers at least one tier
    pub fn has_tiers(&self) -> bool {
        !self.tiers.is_empty()
    }

    /// First tier label in authored order, if any
    pub fn first_tier_label(&self) -> Option<&str> {
        self.tiers.keys().next().map(String::as_str)
    }

    /// Tier labels in authored order
    pub fn tier_labels(&self) -> impl Iterator<Item = &str> {
        self.tiers.keys().map(String::as_str)
    }

    /// The plan list for a tier label, if the tier exists
    pub fn tier(&self, label: &str) -> Option<&[Plan]> {
        self.tiers.get(label).map(Vec::as_slice)
    }
}

/// The immutable catalog: countries ordered by display name.
///
/// Ordering is a deterministic case-insensitive comparison of display
/// names (Unicode-lowercased). Ties keep the source file's entry order.
/// Country codes are unique because the source mapping's keys are.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    countries: Vec<Country>,
}

impl Catalog {
    /// An empty catalog
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from source entries, sorting countries by name.
    pub fn from_entries(entries: IndexMap<String, CountryEntry>) -> Self {
        let mut countries: Vec<Country> = entries
            .into_iter()
            .map(|(code, entry)| Country {
                code,
                name: entry.country_name,
                flag: entry.flag_name,
                tiers: entry.size,
            })
            .collect();

        // Stable sort: equal keys keep source entry order.
        countries.sort_by_cached_key(|c| c.name.to_lowercase());

        Self { countries }
    }

    /// Returns true if the catalog has no countries
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Number of countries
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// First country in display order, if any
    pub fn first(&self) -> Option<&Country> {
        self.countries.first()
    }

    /// Look up a country by code
    pub fn get(&self, code: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.code == code)
    }

    /// Countries in display order
    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter()
    }

    /// Total tier count across all countries
    pub fn tier_count(&self) -> usize {
        self.countries.iter().map(|c| c.tiers.len()).sum()
    }

    /// Total plan count across all countries and tiers
    pub fn plan_count(&self) -> usize {
        self.countries
            .iter()
            .flat_map(|c| c.tiers.values())
            .map(Vec::len)
            .sum()
    }
}
