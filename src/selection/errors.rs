//! Selection error types
//!
//! Error codes:
//! - PICK_UNKNOWN_COUNTRY (REJECT)
//! - PICK_UNKNOWN_TIER (REJECT)
//! - PICK_PLAN_INDEX_OUT_OF_RANGE (REJECT)
//!
//! Every rejected intent leaves the selection untouched; there is no
//! partial application.

use std::fmt;

/// Severity levels for selection errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Client intent rejected, state unchanged
    Reject,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
        }
    }
}

/// Selection-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionErrorCode {
    /// Country code not present in the catalog
    UnknownCountry,
    /// Tier label not offered by the selected country
    UnknownTier,
    /// Plan index outside the selected tier's plan list
    PlanIndexOutOfRange,
}

impl SelectionErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            SelectionErrorCode::UnknownCountry => "PICK_UNKNOWN_COUNTRY",
            SelectionErrorCode::UnknownTier => "PICK_UNKNOWN_TIER",
            SelectionErrorCode::PlanIndexOutOfRange => "PICK_PLAN_INDEX_OUT_OF_RANGE",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Reject
    }

    /// Returns the consistency rule the rejected intent would have broken
    pub fn invariant(&self) -> &'static str {
        match self {
            SelectionErrorCode::UnknownCountry => "SEL1",
            SelectionErrorCode::UnknownTier => "SEL2",
            SelectionErrorCode::PlanIndexOutOfRange => "SEL3",
        }
    }
}

impl fmt::Display for SelectionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Selection error type with full context
#[derive(Debug, Clone)]
pub struct SelectionError {
    /// Error code
    code: SelectionErrorCode,
    /// Human-readable message
    message: String,
    /// The rejected value, as given by the caller
    subject: Option<String>,
}

impl SelectionError {
    /// Create an unknown country error
    pub fn unknown_country(code: impl Into<String>) -> Self {
        let c = code.into();
        Self {
            code: SelectionErrorCode::UnknownCountry,
            message: format!("Country '{}' is not in the catalog", c),
            subject: Some(c),
        }
    }

    /// Create an unknown tier error
    pub fn unknown_tier(label: impl Into<String>, country: impl Into<String>) -> Self {
        let l = label.into();
        Self {
            code: SelectionErrorCode::UnknownTier,
            message: format!(
                "Size '{}' is not offered by country '{}'",
                l,
                country.into()
            ),
            subject: Some(l),
        }
    }

    /// Create an unknown tier error for when no country is selected
    pub fn tier_without_country(label: impl Into<String>) -> Self {
        let l = label.into();
        Self {
            code: SelectionErrorCode::UnknownTier,
            message: format!("Size '{}' cannot be selected: no country is selected", l),
            subject: Some(l),
        }
    }

    /// Create a plan index out of range error
    pub fn plan_index_out_of_range(index: usize, available: usize) -> Self {
        Self {
            code: SelectionErrorCode::PlanIndexOutOfRange,
            message: format!(
                "Plan index {} is out of range (tier has {} plans)",
                index, available
            ),
            subject: Some(index.to_string()),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SelectionErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the consistency rule tag
    pub fn invariant(&self) -> &'static str {
        self.code.invariant()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the rejected value if applicable
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )?;
        write!(f, " [violates {}]", self.code.invariant())?;
        Ok(())
    }
}

impl std::error::Error for SelectionError {}

/// Result type for selection operations
pub type SelectionResult<T> = Result<T, SelectionError>;
