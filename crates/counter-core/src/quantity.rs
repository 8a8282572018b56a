//! # Quantity Module
//!
//! Fixed-point quantities for items sold by weight, volume or count.
//!
//! ## Representation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Quantity(i64) = thousandths of a unit                                  │
//! │                                                                         │
//! │    "2"     ──► 2000   ──► displays "2.0"                               │
//! │    "1.5"   ──► 1500   ──► displays "1.5"                               │
//! │    "0.125" ──► 125    ──► displays "0.125"                             │
//! │    "0.3333"──► 333    (rounded to three decimals on input)             │
//! │                                                                         │
//! │  add(2) + add(1.5) == add(3.5), bit for bit                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A quantity is never negative. Parsing from operator text lives in
//! [`crate::validation::parse_quantity`]; `str::parse` delegates to it.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation;

/// A non-negative quantity with three decimal places.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS,
)]
#[ts(export)]
pub struct Quantity(i64);

impl Quantity {
    /// Thousandths per whole unit.
    pub const SCALE: i64 = 1000;

    /// Creates a quantity from thousandths of a unit.
    ///
    /// Negative input is clamped to zero.
    #[inline]
    pub const fn from_thousandths(thousandths: i64) -> Self {
        if thousandths < 0 {
            Quantity(0)
        } else {
            Quantity(thousandths)
        }
    }

    /// Creates a quantity of whole units.
    ///
    /// Negative input is clamped to zero.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Quantity::from_thousandths(units.saturating_mul(Self::SCALE))
    }

    /// Zero quantity.
    #[inline]
    pub const fn zero() -> Self {
        Quantity(0)
    }

    /// Raw value in thousandths.
    #[inline]
    pub const fn thousandths(&self) -> i64 {
        self.0
    }

    /// Whole-unit portion.
    #[inline]
    pub const fn whole_units(&self) -> i64 {
        self.0 / Self::SCALE
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two quantities, `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Quantity) -> Option<Quantity> {
        self.0.checked_add(other.0).map(Quantity)
    }

    /// Subtracts, stopping at zero.
    #[inline]
    pub fn saturating_sub(self, other: Quantity) -> Quantity {
        Quantity((self.0 - other.0).max(0))
    }
}

/// Prints like a plain real number with at least one decimal place.
///
/// `2000` → `2.0`, `3500` → `3.5`, `1250` → `1.25`, `125` → `0.125`.
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::SCALE;
        let frac = self.0 % Self::SCALE;
        if frac == 0 {
            return write!(f, "{}.0", whole);
        }
        let digits = format!("{:03}", frac);
        write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
    }
}

impl FromStr for Quantity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validation::parse_quantity(s)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Quantity::from_units(2).to_string(), "2.0");
        assert_eq!(Quantity::from_thousandths(3_500).to_string(), "3.5");
        assert_eq!(Quantity::from_thousandths(1_250).to_string(), "1.25");
        assert_eq!(Quantity::from_thousandths(125).to_string(), "0.125");
        assert_eq!(Quantity::from_thousandths(10_005).to_string(), "10.005");
        assert_eq!(Quantity::zero().to_string(), "0.0");
    }

    #[test]
    fn test_negative_input_clamps_to_zero() {
        assert!(Quantity::from_thousandths(-1).is_zero());
        assert!(Quantity::from_units(-3).is_zero());
    }

    #[test]
    fn test_checked_add_and_saturating_sub() {
        let a = Quantity::from_units(2);
        let b = Quantity::from_thousandths(1_500);
        assert_eq!(a.checked_add(b), Some(Quantity::from_thousandths(3_500)));
        assert_eq!(Quantity::from_thousandths(i64::MAX).checked_add(b), None);

        assert_eq!(a.saturating_sub(b), Quantity::from_thousandths(500));
        assert_eq!(b.saturating_sub(a), Quantity::zero());
    }

    #[test]
    fn test_from_str_delegates_to_parser() {
        let q: Quantity = " 1.5 ".parse().unwrap();
        assert_eq!(q.thousandths(), 1_500);
        assert!("abc".parse::<Quantity>().is_err());
    }
}
