//! Observability events for planpick
//!
//! This module defines all observable events that can occur during
//! planpick operation.
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events in planpick
///
/// These events cover:
/// - Boot & Lifecycle
/// - Catalog loading
/// - Selection changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// planpick startup begins
    BootStart,
    /// planpick startup complete, ready to serve
    BootComplete,
    /// Serving loop accepting requests
    Serving,
    /// Serving loop ended (input exhausted)
    SessionClosed,

    // Configuration & catalog
    /// Configuration loaded
    ConfigLoaded,
    /// Catalog loaded and ordered
    CatalogLoaded,
    /// Catalog could not be loaded (FATAL)
    CatalogLoadFailed,

    // Selection lifecycle
    /// Initial selection seeded from the catalog
    SelectionSeeded,
    /// Country intent accepted
    CountrySelected,
    /// Size intent accepted
    SizeSelected,
    /// Plan intent accepted
    PlanSelected,
    /// Downstream state was rebuilt after a mutation
    SelectionRepaired,
    /// Intent rejected, selection unchanged
    IntentRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            // Boot & Lifecycle
            Event::BootStart => "PLANPICK_STARTUP_BEGIN",
            Event::BootComplete => "PLANPICK_STARTUP_COMPLETE",
            Event::Serving => "PLANPICK_SERVING",
            Event::SessionClosed => "SESSION_CLOSED",

            // Configuration & catalog
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::CatalogLoaded => "CATALOG_LOADED",
            Event::CatalogLoadFailed => "CATALOG_LOAD_FAILED",

            // Selection lifecycle
            Event::SelectionSeeded => "SELECTION_SEEDED",
            Event::CountrySelected => "COUNTRY_SELECTED",
            Event::SizeSelected => "SIZE_SELECTED",
            Event::PlanSelected => "PLAN_SELECTED",
            Event::SelectionRepaired => "SELECTION_REPAIRED",
            Event::IntentRejected => "INTENT_REJECTED",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::CatalogLoadFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
