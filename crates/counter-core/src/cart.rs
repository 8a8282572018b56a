//! # Cart
//!
//! The operator's working set of item → quantity selections.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Counter Action          Cart Method            Cart Change             │
//! │  ──────────────          ───────────            ───────────             │
//! │                                                                         │
//! │  [Add] "2"      ───────► add_text()    ───────► Inserted / Incremented │
//! │                                                                         │
//! │  [Remove] "1"   ───────► remove_text() ───────► Decremented            │
//! │                                                                         │
//! │  [Remove] "10"  ───────► remove_text() ───────► Removed (key deleted)  │
//! │                                                                         │
//! │  [Add] "abc"    ───────► add_text()    ───────► Unchanged(Invalid...)  │
//! │                                                                         │
//! │  INVARIANT: every entry present has a quantity > 0                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries keep insertion order, which is also invoice line order. There is
//! no clear operation: a cart lives as long as the session that owns it.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::quantity::Quantity;
use crate::validation;
use crate::MAX_QUANTITY;

/// One cart line before pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    /// Catalog item name.
    pub name: String,
    /// Accumulated quantity, always > 0.
    pub quantity: Quantity,
}

/// Why a cart action left the cart as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoredReason {
    /// Quantity text did not parse.
    InvalidQuantity(ValidationError),
    /// Quantity was zero.
    ZeroQuantity,
    /// Remove for an item that is not in the cart.
    NotInCart,
}

/// What a cart action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    /// New entry appended.
    Inserted { quantity: Quantity },
    /// Existing entry grew.
    Incremented { from: Quantity, to: Quantity },
    /// Existing entry shrank but stays positive.
    Decremented { from: Quantity, to: Quantity },
    /// Entry deleted because its quantity reached zero or below.
    Removed { previous: Quantity },
    /// Nothing happened.
    Unchanged(IgnoredReason),
}

impl CartChange {
    /// Whether the cart was mutated.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, CartChange::Unchanged(_))
    }
}

/// The cart: insertion-ordered, unique by item name.
///
/// ## Invariants
/// - Every name is a catalog item (enforced by `add`)
/// - Every quantity is strictly positive
/// - Names are unique
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart {
            entries: Vec::new(),
        }
    }

    /// Adds a quantity of a catalog item.
    ///
    /// ## Behavior
    /// - Unknown item: `CoreError::ItemNotFound`, cart untouched
    /// - Zero quantity: `Unchanged(ZeroQuantity)`; a zero entry is never stored
    /// - Item already in cart: quantity increases in place
    /// - Otherwise: appended at the end
    ///
    /// ## Errors
    /// `CoreError::QuantityOverflow` if the new or accumulated quantity
    /// would pass [`MAX_QUANTITY`] units.
    pub fn add(&mut self, catalog: &Catalog, name: &str, quantity: Quantity) -> CoreResult<CartChange> {
        if !catalog.contains(name) {
            return Err(CoreError::ItemNotFound(name.to_string()));
        }

        if quantity.is_zero() {
            return Ok(CartChange::Unchanged(IgnoredReason::ZeroQuantity));
        }

        let overflow = || CoreError::QuantityOverflow {
            name: name.to_string(),
            max: MAX_QUANTITY,
        };

        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            let from = entry.quantity;
            let to = from
                .checked_add(quantity)
                .filter(within_cap)
                .ok_or_else(overflow)?;
            entry.quantity = to;
            return Ok(CartChange::Incremented { from, to });
        }

        if !within_cap(&quantity) {
            return Err(overflow());
        }
        self.entries.push(CartEntry {
            name: name.to_string(),
            quantity,
        });
        Ok(CartChange::Inserted { quantity })
    }

    /// Removes a quantity of an item.
    ///
    /// ## Behavior
    /// - Item not in cart: `Unchanged(NotInCart)`
    /// - Zero quantity: `Unchanged(ZeroQuantity)`
    /// - Quantity ≥ current: entry deleted entirely
    /// - Otherwise: quantity decreases in place
    pub fn remove(&mut self, name: &str, quantity: Quantity) -> CartChange {
        let Some(position) = self.entries.iter().position(|e| e.name == name) else {
            return CartChange::Unchanged(IgnoredReason::NotInCart);
        };

        if quantity.is_zero() {
            return CartChange::Unchanged(IgnoredReason::ZeroQuantity);
        }

        let from = self.entries[position].quantity;
        if quantity >= from {
            self.entries.remove(position);
            return CartChange::Removed { previous: from };
        }

        let to = from.saturating_sub(quantity);
        self.entries[position].quantity = to;
        CartChange::Decremented { from, to }
    }

    /// [`Cart::add`] with operator-typed quantity text.
    ///
    /// Text that does not parse is ignored: the result is
    /// `Ok(Unchanged(InvalidQuantity(..)))` and the cart is untouched.
    pub fn add_text(&mut self, catalog: &Catalog, name: &str, quantity_text: &str) -> CoreResult<CartChange> {
        if !catalog.contains(name) {
            return Err(CoreError::ItemNotFound(name.to_string()));
        }

        match validation::parse_quantity(quantity_text) {
            Ok(quantity) => self.add(catalog, name, quantity),
            Err(err) => Ok(CartChange::Unchanged(IgnoredReason::InvalidQuantity(err))),
        }
    }

    /// [`Cart::remove`] with operator-typed quantity text.
    pub fn remove_text(&mut self, name: &str, quantity_text: &str) -> CartChange {
        match validation::parse_quantity(quantity_text) {
            Ok(quantity) => self.remove(name, quantity),
            Err(err) => CartChange::Unchanged(IgnoredReason::InvalidQuantity(err)),
        }
    }

    /// Current quantity of an item, if present.
    pub fn quantity_of(&self, name: &str) -> Option<Quantity> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.quantity)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn within_cap(quantity: &Quantity) -> bool {
    quantity.whole_units() <= MAX_QUANTITY
}

// =============================================================================
// Unit Tests
// =============================================================================
