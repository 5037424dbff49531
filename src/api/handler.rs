//! API handler
//!
//! Dispatches parsed intents to the selection engine and wraps the
//! outcome in a response envelope. Engine rejections pass their codes
//! through unchanged, and every successful operation carries the
//! refreshed view snapshot so the caller can re-render without a second
//! round trip.

use serde_json::Value;

use crate::observability::{log_event_with_fields, Event};
use crate::selection::SelectionEngine;
use crate::view::SelectionView;

use super::errors::{ApiError, ApiResult};
use super::request::Request;
use super::response::Response;

/// Request handler around one selection engine.
///
/// Requests are handled strictly one at a time; the host's serving loop
/// serializes them by construction.
pub struct ApiHandler {
    engine: SelectionEngine,
}

impl ApiHandler {
    /// Create a handler over a seeded engine
    pub fn new(engine: SelectionEngine) -> Self {
        Self { engine }
    }

    /// The engine behind this handler
    pub fn engine(&self) -> &SelectionEngine {
        &self.engine
    }

    /// Handle a raw JSON request string
    pub fn handle(&mut self, json_request: &str) -> Response {
        let request = match Request::parse(json_request) {
            Ok(r) => r,
            Err(e) => {
                log_event_with_fields(Event::IntentRejected, &[("code", e.code())]);
                return Response::error(&e);
            }
        };

        let result = match request {
            Request::Initialize => self.handle_initialize(),
            Request::SelectCountry(r) => self.handle_select_country(&r.code),
            Request::SelectSize(r) => self.handle_select_size(&r.label),
            Request::SelectPlan(r) => self.handle_select_plan(r.index),
            Request::View => self.snapshot(),
        };

        match result {
            Ok(data) => Response::success(data),
            Err(e) => {
                log_event_with_fields(Event::IntentRejected, &[("code", e.code())]);
                Response::error(&e)
            }
        }
    }

    /// Re-seed the selection from the catalog defaults
    fn handle_initialize(&mut self) -> ApiResult<Value> {
        self.engine.initialize();
        let selection = self.engine.selection();
        log_event_with_fields(
            Event::SelectionSeeded,
            &[
                ("country", selection.country_code.as_deref().unwrap_or("")),
                ("size", selection.size_label.as_deref().unwrap_or("")),
            ],
        );
        self.snapshot()
    }

    fn handle_select_country(&mut self, code: &str) -> ApiResult<Value> {
        self.engine
            .select_country(code)
            .map_err(ApiError::from_selection_error)?;
        log_event_with_fields(Event::CountrySelected, &[("country", code)]);

        // A country switch always rebuilds the downstream selection.
        let selection = self.engine.selection();
        log_event_with_fields(
            Event::SelectionRepaired,
            &[
                ("plan_index", "0"),
                ("size", selection.size_label.as_deref().unwrap_or("")),
            ],
        );
        self.snapshot()
    }

    fn handle_select_size(&mut self, label: &str) -> ApiResult<Value> {
        self.engine
            .select_size(label)
            .map_err(ApiError::from_selection_error)?;
        log_event_with_fields(Event::SizeSelected, &[("size", label)]);
        self.snapshot()
    }

    fn handle_select_plan(&mut self, index: usize) -> ApiResult<Value> {
        self.engine
            .select_plan(index)
            .map_err(ApiError::from_selection_error)?;
        log_event_with_fields(Event::PlanSelected, &[("plan_index", &index.to_string())]);
        self.snapshot()
    }

    /// The refreshed view snapshot, as response data
    fn snapshot(&self) -> ApiResult<Value> {
        let view = SelectionView::from_engine(&self.engine);
        Ok(serde_json::to_value(view).expect("SelectionView serialization cannot fail"))
    }
}
