//! # Error Types
//!
//! Domain-specific error types for counter-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  counter-core errors (this file)                                       │
//! │  ├── CoreError        - Catalog and cart rule violations               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  counter-receipt errors (separate crate)                               │
//! │  ├── ExportError      - Receipt could not be written                   │
//! │  └── OpenError        - Opener could not be launched (non-fatal)       │
//! │                                                                         │
//! │  Desktop app errors                                                    │
//! │  └── ApiError         - What the shell sees (serialized)               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Shell                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Which Failures Are Errors?
//! A malformed quantity typed at the counter is NOT an error: the cart
//! reports it as [`crate::CartChange::Unchanged`] and stays as it was.
//! `ValidationError` only escapes from the explicit parsing helpers and
//! from catalog construction.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// Item name is not in the catalog.
    ///
    /// ## When This Occurs
    /// - The shell passed a name that was never listed
    /// - A typo in a scripted command
    ///
    /// The cart refuses such names on `add`, so an invoice never has to
    /// resolve one.
    #[error("Item not found in catalog: {0}")]
    ItemNotFound(String),

    /// The same item name was declared twice while building a catalog.
    ///
    /// ## User Workflow
    /// ```text
    /// Catalog::new([Flours{Wheat Flour}, Misc{Wheat Flour}])
    ///      │
    ///      ▼
    /// name index already holds "Wheat Flour" (from Flours)
    ///      │
    ///      ▼
    /// DuplicateItem { name: "Wheat Flour", first: "Flours", second: "Misc" }
    /// ```
    #[error("Item '{name}' is declared in both '{first_category}' and '{second_category}'")]
    DuplicateItem {
        name: String,
        first_category: String,
        second_category: String,
    },

    /// Adding to an entry would overflow the quantity representation.
    #[error("Quantity for {name} would exceed the maximum of {max}")]
    QuantityOverflow { name: String, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g. non-numeric quantity text).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
