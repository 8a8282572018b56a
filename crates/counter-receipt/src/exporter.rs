//! # Receipt Exporter
//!
//! Writes an invoice to `<output_dir>/invoice_YYYYMMDD_HHMMSS.pdf`.
//!
//! ## Export Steps
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. ReceiptContent::from_invoice   (title, timestamp, rows, total)     │
//! │  2. ReceiptLayout::paginate        (A6 pages)                          │
//! │  3. pdf::build_document            (lopdf Document)                    │
//! │  4. Document::save_to              (bytes in memory)                   │
//! │  5. create_dir_all + write + sync  (file on disk)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## File Names
//! The name comes from the invoice's own timestamp, so two exports inside
//! the same second write the same path and the later one replaces the
//! earlier.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use counter_core::Invoice;

use crate::error::{ExportError, ExportResult};
use crate::layout::{ReceiptContent, ReceiptLayout};
use crate::pdf::build_document;
use crate::{FILE_PREFIX, FILE_TIMESTAMP_FORMAT};

/// Title printed on receipts unless configured otherwise.
pub const DEFAULT_TITLE: &str = "Departmental Store Invoice";

// =============================================================================
// Configuration
// =============================================================================

/// Receipt export configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = ExportConfig::new("./invoices")
///     .title("Corner Shop Invoice");
/// ```
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Directory receipts are written to. Created on first export.
    pub output_dir: PathBuf,

    /// Heading printed at the top of every page.
    /// Default: "Departmental Store Invoice"
    pub title: String,

    /// Page geometry, font sizes and spacing.
    /// Default: A6
    pub layout: ReceiptLayout,
}

impl ExportConfig {
    /// Creates a configuration writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        ExportConfig {
            output_dir: output_dir.into(),
            title: DEFAULT_TITLE.to_string(),
            layout: ReceiptLayout::default(),
        }
    }

    /// Sets the receipt heading.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the page layout.
    pub fn layout(mut self, layout: ReceiptLayout) -> Self {
        self.layout = layout;
        self
    }
}

// =============================================================================
// Exporter
// =============================================================================

/// A receipt that has been written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedReceipt {
    pub path: PathBuf,
    pub pages: usize,
    pub bytes: u64,
    pub generated_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct ReceiptExporter {
    config: ExportConfig,
}

impl ReceiptExporter {
    pub fn new(config: ExportConfig) -> Self {
        ReceiptExporter { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// `invoice_YYYYMMDD_HHMMSS.pdf` for the invoice's generation time.
    pub fn file_name_for(invoice: &Invoice) -> String {
        format!(
            "{}{}.pdf",
            FILE_PREFIX,
            invoice.generated_at.format(FILE_TIMESTAMP_FORMAT)
        )
    }

    /// Full path the invoice will be written to.
    pub fn path_for(&self, invoice: &Invoice) -> PathBuf {
        self.config.output_dir.join(Self::file_name_for(invoice))
    }

    /// Renders the invoice as a PDF and writes it to disk.
    ///
    /// An empty invoice still produces a one-page receipt with a zero total.
    ///
    /// ## Errors
    /// - [`ExportError::CreateDir`] if the output directory can't be created
    /// - [`ExportError::Write`] if the file can't be written
    /// - [`ExportError::Encode`] / [`ExportError::Serialize`] if lopdf fails
    pub fn export(&self, invoice: &Invoice) -> ExportResult<ExportedReceipt> {
        let content = ReceiptContent::from_invoice(invoice, &self.config.title);
        let pages = self.config.layout.paginate(&content);
        debug!(lines = invoice.lines.len(), pages = pages.len(), "Laid out receipt");

        let mut doc = build_document(&pages, self.config.layout.geometry, &self.config.title)?;
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|err| ExportError::Serialize(err.to_string()))?;

        fs::create_dir_all(&self.config.output_dir).map_err(|source| ExportError::CreateDir {
            path: self.config.output_dir.clone(),
            source,
        })?;

        let path = self.path_for(invoice);
        write_synced(&path, &bytes).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

        info!(
            path = %path.display(),
            pages = pages.len(),
            total = %invoice.grand_total,
            "Exported receipt"
        );

        Ok(ExportedReceipt {
            path,
            pages: pages.len(),
            bytes: bytes.len() as u64,
            generated_at: invoice.generated_at,
        })
    }
}

/// A write that fails after the file was created removes it again, so no
/// truncated receipt is left behind.
fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let file = File::create(path)?;
    let result = flush_and_sync(file, bytes);

    if result.is_err() {
        if let Err(err) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %err, "Could not remove partial receipt");
        }
    }
    result
}

fn flush_and_sync(file: File, bytes: &[u8]) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes)?;
    writer.into_inner().map_err(io::IntoInnerError::into_error)?.sync_all()
}

// =============================================================================
// Unit Tests
// =============================================================================
