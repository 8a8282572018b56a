//! # Validation Module
//!
//! Input parsing and business rule checks for Counter POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog construction (startup)                               │
//! │  ├── validate_item_name / validate_unit / validate_price               │
//! │  └── duplicate names rejected by Catalog::new                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Counter input (every keystroke-submit)                       │
//! │  ├── parse_quantity ← free-form text from the quantity box             │
//! │  └── Failures are IGNORED by the cart, never shown as errors           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use counter_core::validation::parse_quantity;
//!
//! assert_eq!(parse_quantity("1.5").unwrap().thousandths(), 1_500);
//! assert!(parse_quantity("abc").is_err());
//! assert!(parse_quantity("-2").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::quantity::Quantity;
use crate::{MAX_LABEL_LEN, MAX_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Quantity Parsing
// =============================================================================

/// Parses operator-typed quantity text.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must be a finite real number (`2`, `1.5`, `.25`, `1e2`)
/// - Must not be negative; zero is valid
/// - Must not exceed [`MAX_QUANTITY`] units
/// - Rounded to three decimal places
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Quantity box: "1.5"  [Add]                                            │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  parse_quantity("1.5") ← THIS FUNCTION                                 │
/// │       │                                                                 │
/// │       ├── "" / "abc" / "NaN" → Err → cart ignores the click            │
/// │       ├── "-2"               → Err → cart ignores the click            │
/// │       └── OK(1.500)          → cart.add(...)                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn parse_quantity(text: &str) -> ValidationResult<Quantity> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    let value: f64 = text.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "quantity".to_string(),
        reason: format!("'{}' is not a number", text),
    })?;

    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    if value > MAX_QUANTITY as f64 {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_QUANTITY,
        });
    }

    let thousandths = (value * Quantity::SCALE as f64).round() as i64;
    Ok(Quantity::from_thousandths(thousandths))
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_LABEL_LEN`] characters
///
/// ## Example
/// ```rust
/// use counter_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Wheat Flour").is_ok());
/// assert!(validate_item_name("  ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_label("name", name)
}

/// Validates a display unit such as `per kg`.
pub fn validate_unit(unit: &str) -> ValidationResult<()> {
    validate_label("unit", unit)
}

/// Validates a category name.
pub fn validate_category_name(name: &str) -> ValidationResult<()> {
    validate_label("category", name)
}

/// Validates a unit price. Zero is allowed (free items).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

fn validate_label(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_LABEL_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_LABEL_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
