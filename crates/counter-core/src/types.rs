//! # Domain Types
//!
//! Core domain types used throughout Counter POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │   CatalogItem   │   │    LineItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │──►│  name (unique)  │──►│  name           │       │
//! │  │  items[]        │   │  unit_price     │   │  quantity       │       │
//! │  │                 │   │  unit           │   │  unit, price    │       │
//! │  │                 │   │  category       │   │  line_total     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │     (input only)          (immutable)          (derived, transient)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::quantity::Quantity;

// =============================================================================
// Catalog Item
// =============================================================================

/// A purchasable item.
///
/// Immutable for the lifetime of the process. The name is unique across
/// the whole catalog, not just within its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Display name, also the cart key.
    pub name: String,

    /// Price of one unit.
    pub unit_price: Money,

    /// Display unit, e.g. `per kg`, `per liter`, `per item`.
    pub unit: String,

    /// Category the item was declared in.
    pub category: String,
}

// =============================================================================
// Category
// =============================================================================

/// A named group of items, used to declare a catalog.
///
/// ## Example
/// ```rust
/// use counter_core::{Category, Money};
///
/// let flours = Category::new("Flours")
///     .item("Wheat Flour", Money::from_rupees(40), "per kg")
///     .item("Rice Flour", Money::from_rupees(35), "per kg");
/// assert_eq!(flours.items.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub items: Vec<CatalogItem>,
}

impl Category {
    /// Creates an empty category.
    pub fn new(name: impl Into<String>) -> Self {
        Category {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Appends an item, stamping it with this category's name.
    pub fn item(mut self, name: impl Into<String>, unit_price: Money, unit: impl Into<String>) -> Self {
        self.items.push(CatalogItem {
            name: name.into(),
            unit_price,
            unit: unit.into(),
            category: self.name.clone(),
        });
        self
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One cart entry expanded with its resolved price and subtotal.
///
/// Derived, never stored: produced fresh on every invoice render.
///
/// ## Display
/// ```text
/// <name>: <quantity> <unit> x Rs.<unit price> = Rs.<line total>
/// Wheat Flour: 2.0 per kg x Rs.40 = Rs.80
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    pub quantity: Quantity,
    pub unit: String,
    pub unit_price: Money,
    /// `quantity × unit_price`, rounded to the paisa.
    pub line_total: Money,
}

impl LineItem {
    /// Expands a catalog item at the given quantity.
    pub fn new(item: &CatalogItem, quantity: Quantity) -> Self {
        LineItem {
            name: item.name.clone(),
            quantity,
            unit: item.unit.clone(),
            unit_price: item.unit_price,
            line_total: item.unit_price.multiply_quantity(quantity),
        }
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} x {} = {}",
            self.name, self.quantity, self.unit, self.unit_price, self.line_total
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn wheat_flour() -> CatalogItem {
        Category::new("Flours")
            .item("Wheat Flour", Money::from_rupees(40), "per kg")
            .items
            .remove(0)
    }

    #[test]
    fn test_category_stamps_items() {
        let item = wheat_flour();
        assert_eq!(item.category, "Flours");
        assert_eq!(item.unit, "per kg");
    }

    #[test]
    fn test_line_item_display() {
        let line = LineItem::new(&wheat_flour(), Quantity::from_units(2));
        assert_eq!(line.to_string(), "Wheat Flour: 2.0 per kg x Rs.40 = Rs.80");

        let line = LineItem::new(&wheat_flour(), Quantity::from_thousandths(1_125));
        assert_eq!(line.to_string(), "Wheat Flour: 1.125 per kg x Rs.40 = Rs.45");
    }

    #[test]
    fn test_line_item_serializes_camel_case() {
        let line = LineItem::new(&wheat_flour(), Quantity::from_units(1));
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["lineTotal"], 4000);
        assert_eq!(json["unitPrice"], 4000);
        assert_eq!(json["quantity"], 1000);
    }
}
