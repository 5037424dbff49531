//! View subsystem for planpick
//!
//! Turns engine state into render-ready data. Frontends consume the
//! view verbatim; all formatting decisions live here, not in clients.
//!
//! # Design Principles
//!
//! - One snapshot per frame, rebuilt after every accepted intent
//! - Rows carry explicit `active` flags
//! - Empty lists are rendered as empty lists, never omitted

mod format;
mod model;

pub use format::{format_duration, format_price, format_size_label, CURRENCY};
pub use model::{CountryRow, PlanRow, SelectionView, SizeRow};
