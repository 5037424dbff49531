//! View model
//!
//! A flat, serializable snapshot of everything a picker frontend needs
//! to render one frame: the country list, the selected country's tiers,
//! the selected tier's plans, and the selection itself. Each row carries
//! an `active` flag so the frontend never re-derives selection state.

use serde::{Deserialize, Serialize};

use crate::selection::{Selection, SelectionEngine};

use super::format::{format_duration, format_price, format_size_label, CURRENCY};

/// One country in the picker list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRow {
    pub code: String,
    pub name: String,
    pub flag: String,
    pub active: bool,
}

/// One size tier of the selected country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeRow {
    /// The label as authored in the catalog, used in selection intents
    pub label: String,
    /// Compact display form of the label
    pub display: String,
    pub active: bool,
}

/// One plan of the selected tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRow {
    pub days: u32,
    pub price: f64,
    pub duration_display: String,
    pub price_display: String,
    pub currency: String,
    pub active: bool,
}

/// A complete render-ready snapshot of the picker state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionView {
    /// All countries, in display order
    pub countries: Vec<CountryRow>,
    /// Tiers of the selected country, in authored order
    pub sizes: Vec<SizeRow>,
    /// Plans of the selected tier, in authored order
    pub plans: Vec<PlanRow>,
    /// The selection triple behind the `active` flags
    pub selected: Selection,
    pub has_sizes: bool,
    pub has_plans: bool,
}

impl SelectionView {
    /// Snapshot the engine's current state.
    pub fn from_engine(engine: &SelectionEngine) -> Self {
        let selected = engine.selection().clone();

        let countries = engine
            .catalog()
            .iter()
            .map(|c| CountryRow {
                code: c.code.clone(),
                name: c.name.clone(),
                flag: c.flag.clone(),
                active: selected.country_code.as_deref() == Some(c.code.as_str()),
            })
            .collect();

        let sizes: Vec<SizeRow> = engine
            .current_country()
            .map(|country| {
                country
                    .tier_labels()
                    .map(|label| SizeRow {
                        label: label.to_string(),
                        display: format_size_label(label),
                        active: selected.size_label.as_deref() == Some(label),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let plans: Vec<PlanRow> = engine
            .current_plans()
            .iter()
            .enumerate()
            .map(|(i, plan)| PlanRow {
                days: plan.days,
                price: plan.price,
                duration_display: format_duration(plan.days),
                price_display: format_price(plan.price),
                currency: CURRENCY.to_string(),
                active: i == selected.plan_index,
            })
            .collect();

        Self {
            has_sizes: !sizes.is_empty(),
            has_plans: !plans.is_empty(),
            countries,
            sizes,
            plans,
            selected,
        }
    }

    /// The active country row, if any
    pub fn active_country(&self) -> Option<&CountryRow> {
        self.countries.iter().find(|c| c.active)
    }

    /// The active plan row, if any
    pub fn active_plan(&self) -> Option<&PlanRow> {
        self.plans.iter().find(|p| p.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CountryEntry, Plan};
    use indexmap::IndexMap;

    fn sample_engine() -> SelectionEngine {
        let mut entries = IndexMap::new();
        entries.insert(
            "JP".to_string(),
            CountryEntry::new("Japan", "japan")
                .with_tier("1 GB", vec![Plan::new(7, 4.5)])
                .with_tier("3 GB", vec![Plan::new(30, 9.0), Plan::new(15, 6.0)]),
        );
        entries.insert(
            "US".to_string(),
            CountryEntry::new("United States", "united-states-of-america"),
        );
        SelectionEngine::new(Catalog::from_entries(entries))
    }

    #[test]
    fn test_view_marks_active_rows() {
        let mut engine = sample_engine();
        engine.select_size("3 GB").unwrap();
        engine.select_plan(1).unwrap();

        let view = SelectionView::from_engine(&engine);
        assert_eq!(view.active_country().unwrap().code, "JP");
        assert!(view.sizes[1].active);
        assert!(!view.sizes[0].active);
        assert_eq!(view.active_plan().unwrap().days, 15);
    }

    #[test]
    fn test_view_formats_rows() {
        let engine = sample_engine();
        let view = SelectionView::from_engine(&engine);

        assert_eq!(view.sizes[0].label, "1 GB");
        assert_eq!(view.sizes[0].display, "1GB");
        assert_eq!(view.plans[0].price_display, "$4.50");
        assert_eq!(view.plans[0].duration_display, "7 days");
        assert_eq!(view.plans[0].currency, "USD");
    }

    #[test]
    fn test_view_of_tierless_country() {
        let mut engine = sample_engine();
        engine.select_country("US").unwrap();

        let view = SelectionView::from_engine(&engine);
        assert!(!view.has_sizes);
        assert!(!view.has_plans);
        assert!(view.sizes.is_empty());
        assert!(view.plans.is_empty());
        assert_eq!(view.selected.size_label, None);
    }

    #[test]
    fn test_view_of_empty_catalog() {
        let engine = SelectionEngine::new(Catalog::empty());
        let view = SelectionView::from_engine(&engine);

        assert!(view.countries.is_empty());
        assert!(view.active_country().is_none());
        assert_eq!(view.selected, Selection::empty());
    }

    #[test]
    fn test_view_round_trips_through_json() {
        let engine = sample_engine();
        let view = SelectionView::from_engine(&engine);

        let json = serde_json::to_string(&view).unwrap();
        let back: SelectionView = serde_json::from_str(&json).unwrap();
        assert_eq!(back, view);
    }
}
