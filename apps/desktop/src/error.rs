//! # API Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Counter POS                            │
//! │                                                                         │
//! │  Shell                       Rust Backend                               │
//! │  ─────                       ────────────                               │
//! │                                                                         │
//! │  > add Saffron 2                                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown item? ─── CoreError::ItemNotFound("...") ──┐           │  │
//! │  │         │                                           │           │  │
//! │  │         ▼                                           ▼           │  │
//! │  │  Export failed? ─── ExportError::Write { .. } ──── ApiError ───►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  [NOT_FOUND] Item not found: Saffron                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Invalid quantity text is NOT an error: the cart ignores it and the
//! command answers with the unchanged invoice.

use serde::Serialize;
use std::fmt;

use counter_core::CoreError;
use counter_receipt::ExportError;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Item not found: Saffron"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Item name not in the catalog
    NotFound,

    /// Input or catalog data failed validation
    ValidationError,

    /// Cart operation failed
    CartError,

    /// Receipt could not be written
    ExportError,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::CartError => "CART_ERROR",
            ErrorCode::ExportError => "EXPORT_ERROR",
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotFound(name) => ApiError::not_found("Item", &name),
            err @ CoreError::DuplicateItem { .. } => ApiError::validation(err.to_string()),
            err @ CoreError::QuantityOverflow { .. } => ApiError::new(ErrorCode::CartError, err.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts receipt export errors to API errors.
///
/// The operator sees the path involved; the full error goes to the log.
impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        tracing::error!("Receipt export failed: {}", err);
        match err {
            ExportError::CreateDir { path, .. } => ApiError::new(
                ErrorCode::ExportError,
                format!("Could not create receipt folder {}", path.display()),
            ),
            ExportError::Write { path, .. } => ApiError::new(
                ErrorCode::ExportError,
                format!("Could not save receipt {}", path.display()),
            ),
            ExportError::Encode { .. } | ExportError::Serialize(_) => {
                ApiError::new(ErrorCode::ExportError, "Could not build receipt document")
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}
