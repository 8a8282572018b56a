//! # counter-core: Pure Business Logic for Counter POS
//!
//! This crate holds everything the billing counter knows about prices,
//! quantities, the cart and the invoice. It performs no I/O: the clock is
//! read by the caller and passed in.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Counter POS Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation Shell (apps/desktop)              │   │
//! │  │      catalog ──► add / remove ──► invoice ──► export            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ counter-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   cart    │  │  invoice  │  │ validation│  │   │
//! │  │   │  Catalog  │  │   Cart    │  │  Invoice  │  │  parsing  │  │   │
//! │  │   │  lookup   │  │ CartChange│  │  LineItem │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CLOCK • PURE FUNCTIONS                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              counter-receipt (Export Layer)                     │   │
//! │  │            A6 layout, PDF writer, document opener               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type in integer paisa (no floating point!)
//! - [`quantity`] - Fixed-point quantities for weight/volume units
//! - [`types`] - Catalog items, categories, line items
//! - [`catalog`] - Read-only catalog with a flat name index
//! - [`cart`] - The operator's cart and its mutation rules
//! - [`invoice`] - Invoice rendering shared by display and export
//! - [`validation`] - Input parsing and business rule checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use counter_core::{Cart, Catalog, Invoice};
//!
//! let catalog = Catalog::departmental_store();
//! let mut cart = Cart::new();
//!
//! cart.add_text(&catalog, "Wheat Flour", "2").unwrap();
//! cart.add_text(&catalog, "Wheat Flour", "1.5").unwrap();
//!
//! let now = NaiveDate::from_ymd_opt(2024, 5, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//! let invoice = Invoice::render(&cart, &catalog, now);
//!
//! assert_eq!(invoice.lines[0].to_string(), "Wheat Flour: 3.5 per kg x Rs.40 = Rs.140");
//! assert_eq!(invoice.grand_total.to_string(), "Rs.140");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod invoice;
pub mod money;
pub mod quantity;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartChange, CartEntry, IgnoredReason};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use invoice::Invoice;
pub use money::Money;
pub use quantity::Quantity;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Fixed prefix printed in front of every amount.
///
/// Currency formatting beyond this prefix is out of scope.
pub const CURRENCY_PREFIX: &str = "Rs.";

/// Largest quantity accepted from a single input, in whole units.
///
/// ## Business Reason
/// Keeps fixed-point arithmetic far away from overflow and catches
/// runaway typing (e.g. a barcode pasted into the quantity box).
pub const MAX_QUANTITY: i64 = 1_000_000;

/// Maximum length of an item name or unit label, in characters.
pub const MAX_LABEL_LEN: usize = 100;

/// Format used for the human-readable invoice timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
