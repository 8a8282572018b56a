//! # Cart Commands
//!
//! Commands that change or read the cart. Each one answers with a fresh
//! invoice so the panel never shows stale totals.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│ In Cart  │────►│ Exported │                        │
//! │  │  Cart    │     │          │     │ Receipt  │                        │
//! │  └──────────┘     └──────────┘     └──────────┘                        │
//! │       ▲                │                 │                              │
//! │       │           add_to_cart      export_invoice                      │
//! │       │           remove_from_cart (receipt.rs)                        │
//! │       │                │                 │                              │
//! │       └── remove all ──┘                 └── cart is kept as-is        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use counter_core::{CartChange, IgnoredReason};

use super::{now, InvoiceResponse};
use crate::error::ApiError;
use crate::state::{CartState, CatalogState, ConfigState};

/// Renders the invoice for the current cart.
pub fn get_invoice(catalog: &CatalogState, cart: &CartState, config: &ConfigState) -> InvoiceResponse {
    debug!("get_invoice command");
    let at = now();
    cart.with_cart(|c| InvoiceResponse::render(c, catalog.catalog(), &config.invoice_title, at))
}

/// Adds a quantity of an item to the cart.
///
/// ## Behavior
/// - Item already in cart: quantity grows
/// - Item not in cart: appended as a new line
/// - Quantity text that doesn't parse, or zero: cart unchanged, still `Ok`
/// - Item not in catalog: `NOT_FOUND`
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Operator picks "Wheat Flour", types 2, presses Add                    │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  add_to_cart(item: "Wheat Flour", quantity_text: "2")                  │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  1. Lock cart                                                  │    │
/// │  │  2. Check name against catalog, parse quantity                 │    │
/// │  │  3. Insert or increment                                        │    │
/// │  │  4. Render invoice (same lock)                                 │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  Wheat Flour: 2.0 per kg x Rs.40 = Rs.80                               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    config: &ConfigState,
    item: &str,
    quantity_text: &str,
) -> Result<InvoiceResponse, ApiError> {
    debug!(item = %item, quantity = %quantity_text, "add_to_cart command");
    let at = now();

    let (change, response) = cart.with_cart_mut(|c| {
        let change = c.add_text(catalog.catalog(), item, quantity_text)?;
        let response = InvoiceResponse::render(c, catalog.catalog(), &config.invoice_title, at);
        Ok::<_, ApiError>((change, response))
    })?;

    log_change(item, &change);
    Ok(response)
}

/// Removes a quantity of an item from the cart.
///
/// ## Behavior
/// - Quantity below current: line shrinks
/// - Quantity at or above current: line disappears
/// - Item not in cart, bad text, zero: cart unchanged
///
/// Never fails; the result type matches the other cart commands.
pub fn remove_from_cart(
    catalog: &CatalogState,
    cart: &CartState,
    config: &ConfigState,
    item: &str,
    quantity_text: &str,
) -> Result<InvoiceResponse, ApiError> {
    debug!(item = %item, quantity = %quantity_text, "remove_from_cart command");
    let at = now();

    let (change, response) = cart.with_cart_mut(|c| {
        let change = c.remove_text(item, quantity_text);
        let response = InvoiceResponse::render(c, catalog.catalog(), &config.invoice_title, at);
        (change, response)
    });

    log_change(item, &change);
    Ok(response)
}

fn log_change(item: &str, change: &CartChange) {
    match change {
        CartChange::Unchanged(IgnoredReason::InvalidQuantity(err)) => {
            debug!(item = %item, error = %err, "Ignored invalid quantity");
        }
        CartChange::Unchanged(reason) => {
            debug!(item = %item, reason = ?reason, "Cart unchanged");
        }
        change => {
            debug!(item = %item, change = ?change, "Cart updated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use counter_core::{Money, Quantity};

    fn states() -> (CatalogState, CartState, ConfigState) {
        (
            CatalogState::default(),
            CartState::new(),
            ConfigState::default().open_after_export(false),
        )
    }

    #[test]
    fn test_add_then_remove_walkthrough() {
        let (catalog, cart, config) = states();

        let response = add_to_cart(&catalog, &cart, &config, "Wheat Flour", "2").unwrap();
        assert_eq!(response.grand_total, "Rs.80");
        assert!(response.text.contains("Wheat Flour: 2.0 per kg x Rs.40 = Rs.80"));

        let response = add_to_cart(&catalog, &cart, &config, "Wheat Flour", "1.5").unwrap();
        assert_eq!(response.invoice.lines[0].quantity, Quantity::from_thousandths(3_500));
        assert_eq!(response.grand_total, "Rs.140");

        let response = remove_from_cart(&catalog, &cart, &config, "Wheat Flour", "10").unwrap();
        assert!(response.invoice.is_empty());
        assert_eq!(response.grand_total, "Rs.0");
    }

    #[test]
    fn test_invalid_quantity_returns_unchanged_invoice() {
        let (catalog, cart, config) = states();
        add_to_cart(&catalog, &cart, &config, "Eggs", "12").unwrap();

        for text in ["abc", "", "-3", "NaN"] {
            let response = add_to_cart(&catalog, &cart, &config, "Eggs", text).unwrap();
            assert_eq!(response.invoice.grand_total, Money::from_rupees(60));
        }
        let response = remove_from_cart(&catalog, &cart, &config, "Eggs", "lots").unwrap();
        assert_eq!(response.invoice.grand_total, Money::from_rupees(60));
    }

    #[test]
    fn test_unknown_item_is_not_found() {
        let (catalog, cart, config) = states();
        let err = add_to_cart(&catalog, &cart, &config, "Saffron", "1").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(cart.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_remove_absent_item_is_ok() {
        let (catalog, cart, config) = states();
        let response = remove_from_cart(&catalog, &cart, &config, "Milk", "1").unwrap();
        assert!(response.invoice.is_empty());
    }

    #[test]
    fn test_get_invoice_uses_configured_title() {
        let (catalog, cart, _) = states();
        let config = ConfigState::default().invoice_title("Corner Shop Invoice");
        add_to_cart(&catalog, &cart, &config, "Milk", "1.5").unwrap();

        let response = get_invoice(&catalog, &cart, &config);
        assert!(response.text.starts_with("---- Corner Shop Invoice ----\n"));
        assert!(response.text.ends_with("Grand Total: Rs.75"));
    }
}
