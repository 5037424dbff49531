//! Session Flow Tests
//!
//! End-to-end intent sequences through the API handler: parse, dispatch,
//! respond. Every success carries the refreshed view; every rejection
//! carries a stable code and leaves the view unchanged.

use indexmap::IndexMap;
use planpick::api::{ApiHandler, Response};
use planpick::catalog::{Catalog, CountryEntry, Plan};
use planpick::selection::SelectionEngine;
use serde_json::Value;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_handler() -> ApiHandler {
    let mut entries = IndexMap::new();
    entries.insert(
        "JP".to_string(),
        CountryEntry::new("Japan", "japan")
            .with_tier("1GB", vec![Plan::new(7, 4.5)])
            .with_tier("3GB", vec![Plan::new(30, 9.0), Plan::new(15, 6.0)]),
    );
    entries.insert(
        "KR".to_string(),
        CountryEntry::new("South Korea", "south-korea")
            .with_tier("500MB", vec![Plan::new(3, 2.0)]),
    );
    entries.insert(
        "US".to_string(),
        CountryEntry::new("United States", "united-states-of-america"),
    );
    ApiHandler::new(SelectionEngine::new(Catalog::from_entries(entries)))
}

fn ok_data(resp: &Response) -> Value {
    let parsed: Value = serde_json::from_str(&resp.to_json()).unwrap();
    assert_eq!(parsed["status"], "ok", "expected ok, got: {}", parsed);
    parsed["data"].clone()
}

fn err_code(resp: &Response) -> String {
    let parsed: Value = serde_json::from_str(&resp.to_json()).unwrap();
    assert_eq!(parsed["status"], "error", "expected error, got: {}", parsed);
    parsed["code"].as_str().unwrap().to_string()
}

// =============================================================================
// Full Session Walk-Through
// =============================================================================

#[test]
fn test_full_picker_session() {
    let mut handler = setup_handler();

    // Seeded view: Japan, first tier, first plan.
    let data = ok_data(&handler.handle(r#"{"op": "view"}"#));
    assert_eq!(data["selected"]["country_code"], "JP");
    assert_eq!(data["selected"]["size_label"], "1GB");
    assert_eq!(data["countries"].as_array().unwrap().len(), 3);
    assert_eq!(data["countries"][0]["code"], "JP");
    assert_eq!(data["countries"][0]["active"], true);

    // Switch tier: plan list changes, index restarts.
    let data = ok_data(&handler.handle(r#"{"op": "select_size", "label": "3GB"}"#));
    assert_eq!(data["selected"]["size_label"], "3GB");
    assert_eq!(data["selected"]["plan_index"], 0);
    assert_eq!(data["plans"].as_array().unwrap().len(), 2);
    assert_eq!(data["plans"][0]["active"], true);

    // Pick the second plan.
    let data = ok_data(&handler.handle(r#"{"op": "select_plan", "index": 1}"#));
    assert_eq!(data["selected"]["plan_index"], 1);
    assert_eq!(data["plans"][1]["active"], true);
    assert_eq!(data["plans"][1]["days"], 15);
    assert_eq!(data["plans"][1]["price_display"], "$6.00");

    // Switch to a tierless country: explicit empty state.
    let data = ok_data(&handler.handle(r#"{"op": "select_country", "code": "US"}"#));
    assert_eq!(data["selected"]["country_code"], "US");
    assert!(data["selected"]["size_label"].is_null());
    assert_eq!(data["has_sizes"], false);
    assert_eq!(data["has_plans"], false);
    assert_eq!(data["sizes"].as_array().unwrap().len(), 0);

    // Back to defaults.
    let data = ok_data(&handler.handle(r#"{"op": "initialize"}"#));
    assert_eq!(data["selected"]["country_code"], "JP");
    assert_eq!(data["selected"]["size_label"], "1GB");
    assert_eq!(data["selected"]["plan_index"], 0);
}

// =============================================================================
// Rejections
// =============================================================================

#[test]
fn test_engine_rejection_codes_pass_through() {
    let mut handler = setup_handler();

    let resp = handler.handle(r#"{"op": "select_country", "code": "ZZ"}"#);
    assert_eq!(err_code(&resp), "PICK_UNKNOWN_COUNTRY");

    let resp = handler.handle(r#"{"op": "select_size", "label": "9GB"}"#);
    assert_eq!(err_code(&resp), "PICK_UNKNOWN_TIER");

    let resp = handler.handle(r#"{"op": "select_plan", "index": 7}"#);
    assert_eq!(err_code(&resp), "PICK_PLAN_INDEX_OUT_OF_RANGE");
}

#[test]
fn test_rejection_leaves_view_unchanged() {
    let mut handler = setup_handler();
    handler.handle(r#"{"op": "select_size", "label": "3GB"}"#);
    handler.handle(r#"{"op": "select_plan", "index": 1}"#);
    let before = ok_data(&handler.handle(r#"{"op": "view"}"#));

    handler.handle(r#"{"op": "select_country", "code": "ZZ"}"#);
    handler.handle(r#"{"op": "select_size", "label": "9GB"}"#);
    handler.handle(r#"{"op": "select_plan", "index": 7}"#);

    let after = ok_data(&handler.handle(r#"{"op": "view"}"#));
    assert_eq!(before, after);
}

#[test]
fn test_request_layer_rejections() {
    let mut handler = setup_handler();

    let resp = handler.handle("not json at all");
    assert_eq!(err_code(&resp), "PICK_INVALID_REQUEST");

    let resp = handler.handle(r#"{"op": "checkout"}"#);
    assert_eq!(err_code(&resp), "PICK_UNKNOWN_OPERATION");

    let resp = handler.handle(r#"{"op": "select_country"}"#);
    assert_eq!(err_code(&resp), "PICK_INVALID_REQUEST");

    // Malformed requests never touch the engine.
    let data = ok_data(&handler.handle(r#"{"op": "view"}"#));
    assert_eq!(data["selected"]["country_code"], "JP");
}

// =============================================================================
// View Payload Shape
// =============================================================================

#[test]
fn test_view_rows_carry_display_fields() {
    let mut handler = setup_handler();
    let data = ok_data(&handler.handle(r#"{"op": "view"}"#));

    let country = &data["countries"][0];
    assert_eq!(country["name"], "Japan");
    assert_eq!(country["flag"], "japan");

    let size = &data["sizes"][0];
    assert_eq!(size["label"], "1GB");
    assert_eq!(size["display"], "1GB");

    let plan = &data["plans"][0];
    assert_eq!(plan["duration_display"], "7 days");
    assert_eq!(plan["price_display"], "$4.50");
    assert_eq!(plan["currency"], "USD");
}

#[test]
fn test_country_switch_view_is_derived_from_new_country() {
    let mut handler = setup_handler();
    let data = ok_data(&handler.handle(r#"{"op": "select_country", "code": "KR"}"#));

    // Sizes and plans now belong to South Korea.
    assert_eq!(data["sizes"].as_array().unwrap().len(), 1);
    assert_eq!(data["sizes"][0]["label"], "500MB");
    assert_eq!(data["plans"][0]["days"], 3);
    assert_eq!(data["plans"][0]["active"], true);
}

/// Every accepted operation, the read-only view included, answers with
/// the full view snapshot; no success is dataless.
#[test]
fn test_every_success_carries_the_view() {
    let mut handler = setup_handler();
    let requests = [
        r#"{"op": "view"}"#,
        r#"{"op": "select_country", "code": "KR"}"#,
        r#"{"op": "select_size", "label": "500MB"}"#,
        r#"{"op": "select_plan", "index": 0}"#,
        r#"{"op": "initialize"}"#,
    ];

    for request in requests {
        let data = ok_data(&handler.handle(request));
        assert!(!data.is_null(), "dataless success for {}", request);
        assert!(data["selected"].is_object());
        assert!(data["countries"].is_array());
        assert!(data["sizes"].is_array());
        assert!(data["plans"].is_array());
    }
}

#[test]
fn test_empty_catalog_session() {
    let mut handler = ApiHandler::new(SelectionEngine::new(Catalog::empty()));

    let data = ok_data(&handler.handle(r#"{"op": "view"}"#));
    assert_eq!(data["countries"].as_array().unwrap().len(), 0);
    assert!(data["selected"]["country_code"].is_null());
    assert_eq!(data["has_sizes"], false);
    assert_eq!(data["has_plans"], false);

    // Intents against nothing are rejected, session continues.
    let resp = handler.handle(r#"{"op": "select_country", "code": "JP"}"#);
    assert_eq!(err_code(&resp), "PICK_UNKNOWN_COUNTRY");
    let data = ok_data(&handler.handle(r#"{"op": "initialize"}"#));
    assert!(data["selected"]["country_code"].is_null());
}
