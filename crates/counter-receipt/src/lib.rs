//! # counter-receipt: Printable Receipts for Counter POS
//!
//! This crate turns an [`counter_core::Invoice`] into a small-format PDF
//! receipt, writes it to disk and hands it to the platform's document
//! opener for printing.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   counter-core ──► Invoice (lines, total, timestamp)                    │
//! │                         │                                               │
//! │   ┌─────────────────────▼──────────────────────────────────────────┐   │
//! │   │              ★ counter-receipt (THIS CRATE) ★                  │   │
//! │   │                                                                │   │
//! │   │  layout   ReceiptContent → pages of positioned text (pure)     │   │
//! │   │  pdf      pages → lopdf Document                               │   │
//! │   │  exporter Document → invoice_YYYYMMDD_HHMMSS.pdf               │   │
//! │   │  opener   path → xdg-open / open / start (fire-and-forget)     │   │
//! │   └─────────────────────┬──────────────────────────────────────────┘   │
//! │                         ▼                                               │
//! │                 local file system, print pipeline                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Channels
//! - Writing the file: [`ExportError`], always reported to the caller
//! - Opening the file: [`OpenError`], logged and folded into an
//!   [`OpenOutcome`]; never turns a written receipt into a failed export
//!
//! ## Usage
//!
//! ```rust,ignore
//! use counter_receipt::{hand_off, ExportConfig, ReceiptExporter, SystemOpener};
//!
//! let exporter = ReceiptExporter::new(ExportConfig::new("./invoices"));
//! let receipt = exporter.export(&invoice)?;
//! let outcome = hand_off(&SystemOpener, &receipt);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod exporter;
pub mod layout;
pub mod opener;
pub mod pdf;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ExportError, ExportResult, OpenError};
pub use exporter::{ExportConfig, ExportedReceipt, ReceiptExporter, DEFAULT_TITLE};
pub use layout::{PageGeometry, ReceiptContent, ReceiptLayout};
pub use opener::{hand_off, DocumentOpener, OpenOutcome, SystemOpener};

/// Prefix of every exported receipt file name.
pub const FILE_PREFIX: &str = "invoice_";

/// Timestamp pattern embedded in receipt file names (one-second resolution).
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
