//! # Catalog
//!
//! The read-only list of everything the store sells.
//!
//! ## Lookup Structure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Declared (nested)                   Stored (flat)                      │
//! │                                                                         │
//! │  Flours ─┬─ Wheat Flour              items: [Wheat Flour, Rice Flour,  │
//! │          └─ Rice Flour                        Chickpeas, ...]          │
//! │  Pulses ─┬─ Chickpeas       ──►                                        │
//! │          └─ Lentils                  index: "Wheat Flour" → 0          │
//! │  ...                                        "Rice Flour"  → 1          │
//! │                                             ...                        │
//! │                                                                         │
//! │  lookup(name) is one hash probe, never a scan over categories           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Built once at startup and passed explicitly to whoever needs it; there
//! is no global catalog.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CatalogItem, Category};
use crate::validation;

/// Immutable, name-indexed catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    /// Items in declaration order (grouped by category).
    items: Vec<CatalogItem>,

    /// Category names in declaration order.
    categories: Vec<String>,

    /// Item name → position in `items`.
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from declared categories.
    ///
    /// ## Checks
    /// - Every category name, item name and unit is a valid label
    /// - Every price is non-negative
    /// - Item names are unique across ALL categories
    ///
    /// ## Errors
    /// - `CoreError::Validation` for a bad label or price
    /// - `CoreError::DuplicateItem` naming both categories involved
    pub fn new(categories: Vec<Category>) -> CoreResult<Self> {
        let mut items = Vec::new();
        let mut names = Vec::with_capacity(categories.len());
        let mut index: HashMap<String, usize> = HashMap::new();

        for category in categories {
            validation::validate_category_name(&category.name)?;

            for mut item in category.items {
                validation::validate_item_name(&item.name)?;
                validation::validate_unit(&item.unit)?;
                validation::validate_price(item.unit_price)?;

                if let Some(&existing) = index.get(&item.name) {
                    let first: &CatalogItem = &items[existing];
                    return Err(CoreError::DuplicateItem {
                        name: item.name,
                        first_category: first.category.clone(),
                        second_category: category.name,
                    });
                }

                item.category = category.name.clone();
                index.insert(item.name.clone(), items.len());
                items.push(item);
            }

            names.push(category.name);
        }

        Ok(Catalog {
            items,
            categories: names,
            index,
        })
    }

    /// The departmental store's built-in price list.
    pub fn departmental_store() -> Self {
        // Fixed data is unique and valid (see tests); index it without re-checking.
        let mut catalog = Catalog {
            items: Vec::new(),
            categories: Vec::new(),
            index: HashMap::new(),
        };
        for category in departmental_store_categories() {
            for item in category.items {
                catalog.index.insert(item.name.clone(), catalog.items.len());
                catalog.items.push(item);
            }
            catalog.categories.push(category.name);
        }
        catalog
    }

    /// Finds an item by exact name.
    ///
    /// Returns `None` for an empty or unknown name.
    pub fn lookup(&self, name: &str) -> Option<&CatalogItem> {
        if name.is_empty() {
            return None;
        }
        self.index.get(name).map(|&i| &self.items[i])
    }

    /// Checks whether an item with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// All items in declaration order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Category names in declaration order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Items of one category, in declaration order.
    pub fn items_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a CatalogItem> + 'a {
        self.items.iter().filter(move |item| item.category == category)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn departmental_store_categories() -> Vec<Category> {
    vec![
        Category::new("Flours")
            .item("Wheat Flour", Money::from_rupees(40), "per kg")
            .item("Rice Flour", Money::from_rupees(35), "per kg"),
        Category::new("Pulses")
            .item("Chickpeas", Money::from_rupees(60), "per kg")
            .item("Lentils", Money::from_rupees(70), "per kg"),
        Category::new("Spices")
            .item("Turmeric", Money::from_rupees(100), "per kg")
            .item("Cumin", Money::from_rupees(90), "per kg"),
        Category::new("Misc")
            .item("Eggs", Money::from_rupees(5), "per item")
            .item("Milk", Money::from_rupees(50), "per liter"),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
