//! Catalog error types
//!
//! All catalog errors are fatal: a catalog that cannot be read or parsed
//! leaves the engine with nothing to select from, so boot stops.

use std::fmt;

/// Severity of a catalog error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The process cannot continue
    Fatal,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Fatal => "FATAL",
        }
    }
}

/// Machine-readable catalog error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogErrorCode {
    /// The catalog file could not be read
    Io,
    /// The catalog file is not the expected JSON shape
    Malformed,
}

impl CatalogErrorCode {
    /// Stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            CatalogErrorCode::Io => "PICK_CATALOG_IO",
            CatalogErrorCode::Malformed => "PICK_CATALOG_MALFORMED",
        }
    }

    /// Severity classification
    pub fn severity(&self) -> Severity {
        Severity::Fatal
    }
}

/// A catalog loading error with source context
#[derive(Debug, Clone)]
pub struct CatalogError {
    code: CatalogErrorCode,
    message: String,
    path: Option<String>,
}

impl CatalogError {
    /// The file could not be read
    pub fn io(path: impl Into<String>, reason: impl fmt::Display) -> Self {
        let path = path.into();
        Self {
            message: format!("cannot read catalog file '{}': {}", path, reason),
            code: CatalogErrorCode::Io,
            path: Some(path),
        }
    }

    /// The content is not a valid catalog document
    pub fn malformed(source: impl Into<String>, reason: impl fmt::Display) -> Self {
        let source = source.into();
        Self {
            message: format!("malformed catalog in '{}': {}", source, reason),
            code: CatalogErrorCode::Malformed,
            path: Some(source),
        }
    }

    pub fn code(&self) -> CatalogErrorCode {
        self.code
    }

    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.severity().as_str(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for CatalogError {}

/// Result alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
