//! # Cart State
//!
//! Holds the session's cart.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>`: several commands touch it and
//! only one may change it at a time. A mutation and the invoice rendered
//! from its result happen under the same lock, so a response never shows
//! another command's half-applied change.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Operator Action          Command                 Cart State Change     │
//! │  ───────────────          ───────                 ─────────────────     │
//! │                                                                         │
//! │  add Eggs 12 ────────────► add_to_cart() ───────► insert / increment   │
//! │                                                                         │
//! │  remove Eggs 2 ──────────► remove_from_cart() ──► decrement / delete   │
//! │                                                                         │
//! │  invoice ────────────────► get_invoice() ───────► (read only)          │
//! │                                                                         │
//! │  NOTE: All operations acquire the Mutex lock exclusively.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use counter_core::Cart;

/// Shared cart state.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState::default()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let lines = cart_state.with_cart(|cart| cart.len());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.lock();
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let change = cart_state.with_cart_mut(|cart| cart.add_text(&catalog, "Eggs", "12"))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.lock();
        f(&mut cart)
    }

    // Cart methods never leave it half-updated, so a poisoned lock still
    // guards a consistent cart.
    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use counter_core::{Catalog, Quantity};
    use std::thread;

    #[test]
    fn test_mutation_visible_to_readers() {
        let catalog = Catalog::departmental_store();
        let state = CartState::new();

        state.with_cart_mut(|cart| cart.add_text(&catalog, "Eggs", "12")).unwrap();

        let qty = state.with_cart(|cart| cart.quantity_of("Eggs"));
        assert_eq!(qty, Some(Quantity::from_units(12)));
    }

    #[test]
    fn test_concurrent_adds_all_land() {
        let catalog = Arc::new(Catalog::departmental_store());
        let state = CartState::new();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = state.clone();
                let catalog = Arc::clone(&catalog);
                thread::spawn(move || {
                    for _ in 0..25 {
                        state.with_cart_mut(|cart| cart.add_text(&catalog, "Milk", "0.5")).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let qty = state.with_cart(|cart| cart.quantity_of("Milk"));
        assert_eq!(qty, Some(Quantity::from_units(100)));
    }

    #[test]
    fn test_survives_poisoned_lock() {
        let catalog = Catalog::departmental_store();
        let state = CartState::new();
        state.with_cart_mut(|cart| cart.add_text(&catalog, "Cumin", "1")).unwrap();

        let poisoner = state.clone();
        let _ = thread::spawn(move || {
            poisoner.with_cart(|_| panic!("reader panicked"));
        })
        .join();

        assert_eq!(state.with_cart(|cart| cart.len()), 1);
    }
}
