//! API request types
//!
//! JSON request parsing for all supported operations.

use serde::{Deserialize, Serialize};

use super::errors::{ApiError, ApiResult};

/// Select country request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectCountryRequest {
    pub code: String,
}

/// Select size request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectSizeRequest {
    pub label: String,
}

/// Select plan request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectPlanRequest {
    pub index: usize,
}

/// Unified request envelope
#[derive(Debug, Clone)]
pub enum Request {
    Initialize,
    SelectCountry(SelectCountryRequest),
    SelectSize(SelectSizeRequest),
    SelectPlan(SelectPlanRequest),
    View,
}

/// Raw request for parsing
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawRequest {
    op: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    index: Option<usize>,
}

impl Request {
    /// Parse a request from JSON string
    pub fn parse(json: &str) -> ApiResult<Self> {
        let raw: RawRequest = serde_json::from_str(json)
            .map_err(|e| ApiError::invalid_request(format!("Invalid JSON: {}", e)))?;

        match raw.op.as_str() {
            "initialize" => Ok(Request::Initialize),
            "select_country" => {
                let code = raw
                    .code
                    .ok_or_else(|| ApiError::invalid_request("Missing code"))?;
                Ok(Request::SelectCountry(SelectCountryRequest { code }))
            }
            "select_size" => {
                let label = raw
                    .label
                    .ok_or_else(|| ApiError::invalid_request("Missing label"))?;
                Ok(Request::SelectSize(SelectSizeRequest { label }))
            }
            "select_plan" => {
                let index = raw
                    .index
                    .ok_or_else(|| ApiError::invalid_request("Missing index"))?;
                Ok(Request::SelectPlan(SelectPlanRequest { index }))
            }
            "view" => Ok(Request::View),
            other => Err(ApiError::unknown_operation(other)),
        }
    }
}
