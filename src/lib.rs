//! planpick - A deterministic, catalog-driven eSIM plan selection engine
//!
//! A catalog of countries, each with labelled size tiers holding ordered
//! plan lists, and a selection triple (country, size, plan index) that
//! is re-validated and repaired after every mutation.

pub mod api;
pub mod catalog;
pub mod cli;
pub mod observability;
pub mod selection;
pub mod view;
