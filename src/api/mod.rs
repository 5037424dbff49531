//! API layer for planpick
//!
//! Parses intent requests, dispatches them to the selection engine, and
//! formats responses. This is the seam a presentation collaborator
//! drives; no selection logic lives here.
//!
//! # Design Principles
//!
//! - One request object in, one response object out
//! - Error codes from lower subsystems pass through unchanged
//! - Rejected intents leave the selection untouched
//! - Every successful operation returns the refreshed view snapshot
//!
//! # Supported Operations
//!
//! - initialize
//! - select_country
//! - select_size
//! - select_plan
//! - view

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ApiError, ApiErrorCode, ApiResult, Severity};
pub use handler::ApiHandler;
pub use request::{Request, SelectCountryRequest, SelectPlanRequest, SelectSizeRequest};
pub use response::{ErrorResponse, Response, SuccessResponse};
