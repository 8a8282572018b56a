//! # Invoice
//!
//! The single invoice renderer shared by the live display and the
//! printable receipt.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Invoice Rendering                                    │
//! │                                                                         │
//! │   Cart (name → qty)        Catalog (name → price, unit)                 │
//! │          │                          │                                   │
//! │          └──────────┬───────────────┘                                   │
//! │                     ▼                                                   │
//! │        Invoice::render(cart, catalog, now) ← pure                       │
//! │                     │                                                   │
//! │        lines[] in cart order, grand_total = Σ line_total                │
//! │                     │                                                   │
//! │          ┌──────────┴───────────┐                                       │
//! │          ▼                      ▼                                       │
//! │   to_display_text()      counter-receipt (A6 PDF)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An invoice is never stored or patched: every cart mutation produces a
//! brand new one.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt::Write as _;
use tracing::warn;
use ts_rs::TS;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::money::Money;
use crate::types::LineItem;
use crate::TIMESTAMP_FORMAT;

/// A priced snapshot of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// When this invoice was rendered (local wall-clock time).
    #[ts(as = "String")]
    pub generated_at: NaiveDateTime,

    /// One line per resolvable cart entry, in cart order.
    pub lines: Vec<LineItem>,

    /// Sum of every line total.
    pub grand_total: Money,

    /// Cart names that had no catalog entry and were left out.
    pub skipped: Vec<String>,
}

impl Invoice {
    /// Prices every cart entry against the catalog.
    ///
    /// ## Unknown Names
    /// The cart only accepts catalog names, so this should never trigger.
    /// If it does, the entry is skipped (and logged) instead of failing
    /// the whole invoice.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use counter_core::{Cart, Catalog, Invoice};
    ///
    /// let catalog = Catalog::departmental_store();
    /// let mut cart = Cart::new();
    /// cart.add_text(&catalog, "Eggs", "12").unwrap();
    /// cart.add_text(&catalog, "Milk", "1.5").unwrap();
    ///
    /// let now = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(9, 30, 0).unwrap();
    /// let invoice = Invoice::render(&cart, &catalog, now);
    ///
    /// assert_eq!(invoice.lines.len(), 2);
    /// assert_eq!(invoice.grand_total.to_string(), "Rs.135");
    /// ```
    pub fn render(cart: &Cart, catalog: &Catalog, generated_at: NaiveDateTime) -> Self {
        let mut lines = Vec::with_capacity(cart.len());
        let mut skipped = Vec::new();

        for entry in cart.entries() {
            match catalog.lookup(&entry.name) {
                Some(item) => lines.push(LineItem::new(item, entry.quantity)),
                None => {
                    warn!(item = %entry.name, "Cart entry has no catalog item, leaving it off the invoice");
                    skipped.push(entry.name.clone());
                }
            }
        }

        let grand_total = lines.iter().map(|line| line.line_total).sum();

        Invoice {
            generated_at,
            lines,
            grand_total,
            skipped,
        }
    }

    /// The generation time as `YYYY-MM-DD HH:MM:SS`.
    pub fn timestamp(&self) -> String {
        self.generated_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Whether the invoice has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text shown in the invoice panel next to the catalog.
    ///
    /// ## Layout
    /// ```text
    /// ---- Departmental Store Invoice ----
    /// Generated on: 2024-05-01 09:30:00
    ///
    /// Eggs: 12.0 per item x Rs.5 = Rs.60
    /// Milk: 1.5 per liter x Rs.50 = Rs.75
    ///
    /// Grand Total: Rs.135
    /// ```
    pub fn to_display_text(&self, title: &str) -> String {
        let mut text = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(text, "---- {} ----", title);
        let _ = writeln!(text, "Generated on: {}", self.timestamp());
        text.push('\n');
        for line in &self.lines {
            let _ = writeln!(text, "{}", line);
        }
        let _ = write!(text, "\nGrand Total: {}", self.grand_total);
        text
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::Quantity;
    use crate::types::Category;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_wheat_flour_walkthrough() {
        let catalog = Catalog::departmental_store();
        let mut cart = Cart::new();

        cart.add_text(&catalog, "Wheat Flour", "2").unwrap();
        let invoice = Invoice::render(&cart, &catalog, now());
        assert_eq!(invoice.lines[0].to_string(), "Wheat Flour: 2.0 per kg x Rs.40 = Rs.80");
        assert_eq!(invoice.grand_total, Money::from_rupees(80));

        cart.add_text(&catalog, "Wheat Flour", "1.5").unwrap();
        let invoice = Invoice::render(&cart, &catalog, now());
        assert_eq!(invoice.lines[0].quantity, Quantity::from_thousandths(3_500));
        assert_eq!(invoice.lines[0].line_total, Money::from_rupees(140));

        cart.remove_text("Wheat Flour", "10");
        let invoice = Invoice::render(&cart, &catalog, now());
        assert!(invoice.is_empty());
        assert!(invoice.grand_total.is_zero());
    }

    #[test]
    fn test_huge_prices_saturate_grand_total() {
        let price = Money::from_paisa(i64::MAX / 2 + 1);
        let catalog = Catalog::new(vec![Category::new("Jewellery")
            .item("Gold Bar", price, "per item")
            .item("Silver Bar", price, "per item")])
        .unwrap();
        let mut cart = Cart::new();
        cart.add(&catalog, "Gold Bar", Quantity::from_units(1)).unwrap();
        cart.add(&catalog, "Silver Bar", Quantity::from_units(1)).unwrap();

        let invoice = Invoice::render(&cart, &catalog, now());
        assert_eq!(invoice.lines[0].line_total, price);
        assert_eq!(invoice.grand_total, Money::from_paisa(i64::MAX));
    }

    #[test]
    fn test_display_text() {
        let catalog = Catalog::departmental_store();
        let mut cart = Cart::new();
        cart.add_text(&catalog, "Eggs", "12").unwrap();
        cart.add_text(&catalog, "Milk", "1.5").unwrap();

        let text = Invoice::render(&cart, &catalog, now()).to_display_text("Departmental Store Invoice");
        assert_eq!(
            text,
            "---- Departmental Store Invoice ----\n\
             Generated on: 2024-05-01 09:30:00\n\
             \n\
             Eggs: 12.0 per item x Rs.5 = Rs.60\n\
             Milk: 1.5 per liter x Rs.50 = Rs.75\n\
             \n\
             Grand Total: Rs.135"
        );
    }

    #[test]
    fn test_empty_cart_display() {
        let catalog = Catalog::departmental_store();
        let text = Invoice::render(&Cart::new(), &catalog, now()).to_display_text("Invoice");
        assert!(text.ends_with("\n\nGrand Total: Rs.0"));
    }

    #[test]
    fn test_unknown_cart_entry_is_skipped() {
        let full = Catalog::departmental_store();
        let mut cart = Cart::new();
        cart.add_text(&full, "Eggs", "2").unwrap();
        cart.add_text(&full, "Cumin", "1").unwrap();

        // Price the same cart against a smaller catalog.
        let small = Catalog::new(vec![
            Category::new("Misc").item("Eggs", Money::from_rupees(5), "per item"),
        ])
        .unwrap();
        let invoice = Invoice::render(&cart, &small, now());

        assert_eq!(invoice.lines.len(), 1);
        assert_eq!(invoice.skipped, ["Cumin"]);
        assert_eq!(invoice.grand_total, Money::from_rupees(10));
    }

    #[test]
    fn test_render_is_repeatable() {
        let catalog = Catalog::departmental_store();
        let mut cart = Cart::new();
        cart.add_text(&catalog, "Turmeric", "0.25").unwrap();

        let first = Invoice::render(&cart, &catalog, now());
        let later = now() + chrono::Duration::seconds(5);
        let second = Invoice::render(&cart, &catalog, later);

        assert_eq!(first.lines, second.lines);
        assert_eq!(first.grand_total, second.grand_total);
        assert_ne!(first.timestamp(), second.timestamp());
    }

    #[test]
    fn test_serializes_camel_case() {
        let catalog = Catalog::departmental_store();
        let mut cart = Cart::new();
        cart.add_text(&catalog, "Eggs", "1").unwrap();

        let json = serde_json::to_value(Invoice::render(&cart, &catalog, now())).unwrap();
        assert_eq!(json["grandTotal"], 500);
        assert_eq!(json["generatedAt"], "2024-05-01T09:30:00");
        assert_eq!(json["lines"][0]["name"], "Eggs");
    }

    proptest! {
        /// Property: the grand total matches an independent Σ qty × price.
        #[test]
        fn grand_total_matches_independent_sum(
            quantities in prop::collection::vec(0i64..100_000, 8)
        ) {
            let catalog = Catalog::departmental_store();
            let mut cart = Cart::new();
            for (item, q) in catalog.items().iter().zip(&quantities) {
                cart.add(&catalog, &item.name, Quantity::from_thousandths(*q)).unwrap();
            }

            let invoice = Invoice::render(&cart, &catalog, now());

            let expected: i64 = cart
                .entries()
                .iter()
                .map(|entry| {
                    let price = catalog.lookup(&entry.name).unwrap().unit_price.paisa() as i128;
                    let exact = price * entry.quantity.thousandths() as i128;
                    ((exact + 500) / 1000) as i64
                })
                .sum();
            prop_assert_eq!(invoice.grand_total.paisa(), expected);
        }
    }
}
