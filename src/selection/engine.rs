//! Selection engine
//!
//! Owns the catalog and the current selection, and applies caller intents
//! to it. Every mutation follows the same shape: validate the intent
//! against the catalog, apply it, then repair downstream state. A
//! rejected intent returns an error and leaves the selection exactly as
//! it was.

use crate::catalog::{Catalog, Country, Plan};

use super::errors::{SelectionError, SelectionResult};
use super::repair::repair;
use super::state::Selection;

/// The stateful selection engine.
///
/// The selection it holds is consistent with the catalog at all times:
/// it is repaired at construction and after every accepted intent.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    catalog: Catalog,
    selection: Selection,
}

impl SelectionEngine {
    /// Create an engine over a catalog, seeded to the first country,
    /// its first tier, and plan index 0.
    pub fn new(catalog: Catalog) -> Self {
        let mut engine = Self {
            catalog,
            selection: Selection::empty(),
        };
        engine.initialize();
        engine
    }

    /// Reset the selection to the catalog defaults. Over an empty
    /// catalog this yields the empty selection.
    pub fn initialize(&mut self) -> &Selection {
        self.selection = Selection::empty();
        repair(&self.catalog, &mut self.selection);
        &self.selection
    }

    /// Select a country by code.
    ///
    /// Downstream state is rebuilt from the new country: the size always
    /// becomes its first tier, even when the new country offers a tier
    /// with the previously selected label.
    pub fn select_country(&mut self, code: &str) -> SelectionResult<&Selection> {
        if self.catalog.get(code).is_none() {
            return Err(SelectionError::unknown_country(code));
        }
        self.selection.country_code = Some(code.to_string());
        self.selection.size_label = None;
        self.selection.plan_index = 0;
        repair(&self.catalog, &mut self.selection);
        Ok(&self.selection)
    }

    /// Select a size tier by label. Restarts the plan position, also
    /// when the label is the one already selected.
    pub fn select_size(&mut self, label: &str) -> SelectionResult<&Selection> {
        let country_code = match self.selection.country_code.as_deref() {
            Some(code) => code.to_string(),
            None => return Err(SelectionError::tier_without_country(label)),
        };
        let offered = self
            .catalog
            .get(&country_code)
            .map_or(false, |c| c.tier(label).is_some());
        if !offered {
            return Err(SelectionError::unknown_tier(label, country_code));
        }
        self.selection.size_label = Some(label.to_string());
        self.selection.plan_index = 0;
        repair(&self.catalog, &mut self.selection);
        Ok(&self.selection)
    }

    /// Select a plan by its position in the current tier's plan list.
    pub fn select_plan(&mut self, index: usize) -> SelectionResult<&Selection> {
        let available = self.current_plans().len();
        if index >= available {
            return Err(SelectionError::plan_index_out_of_range(index, available));
        }
        self.selection.plan_index = index;
        repair(&self.catalog, &mut self.selection);
        Ok(&self.selection)
    }

    /// Re-validate the selection against the catalog. Returns true if
    /// anything had to change.
    pub fn repair(&mut self) -> bool {
        repair(&self.catalog, &mut self.selection)
    }

    /// The catalog this engine selects from
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current selection triple
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected country, if any
    pub fn current_country(&self) -> Option<&Country> {
        self.selection
            .country_code
            .as_deref()
            .and_then(|code| self.catalog.get(code))
    }

    /// Tier labels offered by the selected country, in authored order
    pub fn current_size_labels(&self) -> Vec<&str> {
        self.current_country()
            .map(|c| c.tier_labels().collect())
            .unwrap_or_default()
    }

    /// Plan list of the selected tier; empty when no tier is selected
    pub fn current_plans(&self) -> &[Plan] {
        self.current_country()
            .zip(self.selection.size_label.as_deref())
            .and_then(|(country, label)| country.tier(label))
            .unwrap_or(&[])
    }

    /// The plan the selection points at, if any
    pub fn current_plan(&self) -> Option<&Plan> {
        self.current_plans().get(self.selection.plan_index)
    }
}
