//! # Counter Desktop Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Counter POS                                      │
//! │                                                                         │
//! │  stdin ──► shell ──► commands ──► counter-core (cart, invoice)          │
//! │                          │                                              │
//! │                          └──────► counter-receipt (PDF, opener)         │
//! │  stdout ◄── invoice text, export results                                │
//! │  stderr ◄── tracing logs                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

fn main() {
    // Setup lives in lib.rs for testability
    counter_desktop_lib::run();
}
