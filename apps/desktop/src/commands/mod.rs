//! # Commands Module
//!
//! Every operation the counter front end can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (shared response types, clock)
//! ├── catalog.rs  ◄─── Catalog listing
//! ├── cart.rs     ◄─── Cart manipulation, invoice refresh
//! └── receipt.rs  ◄─── PDF export and hand-off to the opener
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Shell line                                                             │
//! │  ──────────                                                             │
//! │  > add Wheat Flour 2                                                    │
//! │         │                                                               │
//! │         │ (shell::parse_line)                                           │
//! │         ▼                                                               │
//! │  Rust command                                                           │
//! │  ────────────                                                           │
//! │  fn add_to_cart(                                                        │
//! │      catalog: &CatalogState,  ◄── Only the state it needs               │
//! │      cart: &CartState,                                                  │
//! │      config: &ConfigState,                                              │
//! │      item: &str,              ◄── From the line                         │
//! │      quantity_text: &str,                                               │
//! │  ) -> Result<InvoiceResponse, ApiError>                                 │
//! │         │                                                               │
//! │         │ (text or JSON)                                                │
//! │         ▼                                                               │
//! │  Shell prints the fresh invoice                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands are plain functions over state references, so a web or GUI
//! front end can call the same ones the terminal shell does.

pub mod cart;
pub mod catalog;
pub mod receipt;

use chrono::{Local, NaiveDateTime, Timelike};
use serde::Serialize;

use counter_core::{Cart, Catalog, Invoice};

/// Local wall-clock time, second resolution. The only clock read in the app.
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// A freshly rendered invoice plus its display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResponse {
    pub invoice: Invoice,
    /// Text for the invoice panel.
    pub text: String,
    /// Grand total as displayed, e.g. `Rs.140`.
    pub grand_total: String,
}

impl InvoiceResponse {
    pub fn render(cart: &Cart, catalog: &Catalog, title: &str, at: NaiveDateTime) -> Self {
        let invoice = Invoice::render(cart, catalog, at);
        InvoiceResponse {
            text: invoice.to_display_text(title),
            grand_total: invoice.grand_total.to_string(),
            invoice,
        }
    }
}
