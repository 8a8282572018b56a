//! # Money Module
//!
//! Provides the `Money` type for handling rupee amounts safely.
//!
//! ## Integer Paisa
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FLOATS AT THE COUNTER                                                  │
//! │                                                                         │
//! │  At the counter:                                                        │
//! │    1.1 kg × Rs.35 = 38.50000000000001 → ugly receipt line              │
//! │                                                                         │
//! │  Stored as paisa instead                                                │
//! │    3500 paisa × 1.100 kg = 3850 paisa, exactly                         │
//! │    Rounding happens once per line, half away from zero                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use counter_core::money::Money;
//! use counter_core::quantity::Quantity;
//!
//! let price = Money::from_rupees(40);                       // Rs.40 per kg
//! let line = price.multiply_quantity(Quantity::from_thousandths(3500));
//! assert_eq!(line.to_string(), "Rs.140");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use ts_rs::TS;

use crate::quantity::Quantity;
use crate::CURRENCY_PREFIX;

// =============================================================================
// Money Type
// =============================================================================

/// A rupee amount stored as a whole number of paisa (1/100 rupee).
///
/// Signed so that subtraction never wraps. Catalog prices are checked
/// non-negative when the catalog is built.
///
/// ## Flow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Paisa through the invoice                            │
/// │                                                                         │
/// │  CatalogItem.unit_price ──► LineItem.unit_price ──► LineItem.line_total │
/// │                                                          │              │
/// │                                                          ▼              │
/// │                                        Invoice.grand_total (Σ lines)    │
/// │                                                          │              │
/// │                              ┌───────────────────────────┴────────┐     │
/// │                              ▼                                    ▼     │
/// │                     Invoice display text               A6 PDF receipt   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paisa (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use counter_core::money::Money;
    ///
    /// let price = Money::from_paisa(5250); // Rs.52.50
    /// assert_eq!(price.paisa(), 5250);
    /// ```
    #[inline]
    pub const fn from_paisa(paisa: i64) -> Self {
        Money(paisa)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// Catalog prices are whole rupees, so this is the usual constructor.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Returns the value in paisa.
    #[inline]
    pub const fn paisa(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion (truncated toward zero).
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paisa portion (always 0-99).
    #[inline]
    pub const fn paisa_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Rs.0
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// True below Rs.0.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a (possibly fractional) quantity.
    ///
    /// ## Rounding
    /// The exact product is in 1/1000 paisa. It is rounded once, half away
    /// from zero, to whole paisa. 128-bit intermediates prevent overflow;
    /// a result outside the i64 range saturates.
    ///
    /// ## Example
    /// ```rust
    /// use counter_core::money::Money;
    /// use counter_core::quantity::Quantity;
    ///
    /// let rice_flour = Money::from_rupees(35);
    /// let line = rice_flour.multiply_quantity(Quantity::from_thousandths(1_333));
    /// // 35 × 1.333 = 46.655 → Rs.46.66
    /// assert_eq!(line.paisa(), 4_666);
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Item: Wheat Flour Rs.40 per kg
    /// Quantity: 3.5
    ///      │
    ///      ▼
    /// multiply_quantity(3.5) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: Rs.140
    /// ```
    pub fn multiply_quantity(&self, quantity: Quantity) -> Money {
        let scale = Quantity::SCALE as i128;
        let half = scale / 2;
        let product = self.0 as i128 * quantity.thousandths() as i128;
        let rounded = if product >= 0 {
            (product + half) / scale
        } else {
            (product - half) / scale
        };
        Money(rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount with the fixed `Rs.` prefix.
///
/// Whole amounts print without decimals (`Rs.80`); anything with paisa
/// prints two decimals (`Rs.52.50`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let rupees = self.rupees().abs();
        let paisa = self.paisa_part();
        if paisa == 0 {
            write!(f, "{}{}{}", sign, CURRENCY_PREFIX, rupees)
        } else {
            write!(f, "{}{}{}.{:02}", sign, CURRENCY_PREFIX, rupees, paisa)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Saturates at the i64 bounds, the same way `multiply_quantity` does.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

/// Summing line totals into a grand total.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
