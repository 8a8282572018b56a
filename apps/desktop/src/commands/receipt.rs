//! # Receipt Commands
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operator presses Export                                                │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  export_invoice()                                                       │
//! │                    │                                                    │
//! │  ┌─────────────────▼──────────────────────────────────────────────┐    │
//! │  │  1. Render invoice under the cart lock                         │    │
//! │  │  2. Release lock, write invoice_YYYYMMDD_HHMMSS.pdf            │    │
//! │  │  3. Open it (or skip, per config)                              │    │
//! │  └─────────────────┬──────────────────────────────────────────────┘    │
//! │                    ▼                                                    │
//! │  Saved /home/op/.local/share/pos/invoices/invoice_20240501_093000.pdf  │
//! │                                                                         │
//! │  Write failure ──► EXPORT_ERROR                                         │
//! │  Open failure  ──► still saved, opened = failed (logged)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

use counter_core::Invoice;
use counter_receipt::{hand_off, DocumentOpener, OpenOutcome, ReceiptExporter};

use super::now;
use crate::error::ApiError;
use crate::state::{CartState, CatalogState, ConfigState};

/// Where the receipt went and whether it was opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub path: PathBuf,
    pub pages: usize,
    pub opened: OpenOutcome,
}

/// Exports the current invoice as a PDF receipt.
///
/// The cart is not cleared.
pub fn export_invoice(
    catalog: &CatalogState,
    cart: &CartState,
    config: &ConfigState,
    opener: &dyn DocumentOpener,
) -> Result<ExportResponse, ApiError> {
    debug!("export_invoice command");
    let at = now();
    let invoice = cart.with_cart(|c| Invoice::render(c, catalog.catalog(), at));

    let exporter = ReceiptExporter::new(config.export_config());
    let receipt = exporter.export(&invoice)?;

    let opened = if config.open_after_export {
        hand_off(opener, &receipt)
    } else {
        debug!(path = %receipt.path.display(), "Opening after export is turned off");
        OpenOutcome::Skipped
    };

    Ok(ExportResponse {
        path: receipt.path,
        pages: receipt.pages,
        opened,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::error::ErrorCode;
    use counter_receipt::OpenError;
    use std::cell::Cell;
    use std::fs;
    use std::io;
    use std::path::Path;
    use uuid::Uuid;

    #[derive(Default)]
    struct CountingOpener {
        calls: Cell<usize>,
    }

    impl DocumentOpener for CountingOpener {
        fn open(&self, _path: &Path) -> Result<(), OpenError> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }
    }

    struct BrokenOpener;

    impl DocumentOpener for BrokenOpener {
        fn open(&self, path: &Path) -> Result<(), OpenError> {
            Err(OpenError::Launch {
                program: "xdg-open".to_string(),
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "missing"),
            })
        }
    }

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("counter-desktop-{}", Uuid::new_v4()))
    }

    #[test]
    fn test_export_writes_file_and_opens() {
        let dir = scratch_dir();
        let catalog = CatalogState::default();
        let cart = CartState::new();
        let config = ConfigState::default().export_dir(&dir);
        add_to_cart(&catalog, &cart, &config, "Lentils", "2").unwrap();

        let opener = CountingOpener::default();
        let response = export_invoice(&catalog, &cart, &config, &opener).unwrap();

        assert!(response.path.starts_with(&dir));
        assert!(response.path.is_file());
        assert_eq!(response.pages, 1);
        assert_eq!(response.opened, OpenOutcome::Opened);
        assert_eq!(opener.calls.get(), 1);

        let doc = lopdf::Document::load(&response.path).unwrap();
        assert_eq!(doc.get_pages().len(), 1);

        // Cart survives the export.
        assert_eq!(cart.with_cart(|c| c.len()), 1);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_open_disabled_is_skipped() {
        let dir = scratch_dir();
        let config = ConfigState::default().export_dir(&dir).open_after_export(false);
        let opener = CountingOpener::default();

        let response =
            export_invoice(&CatalogState::default(), &CartState::new(), &config, &opener).unwrap();

        assert_eq!(response.opened, OpenOutcome::Skipped);
        assert_eq!(opener.calls.get(), 0);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_open_failure_keeps_export() {
        let dir = scratch_dir();
        let config = ConfigState::default().export_dir(&dir);

        let response =
            export_invoice(&CatalogState::default(), &CartState::new(), &config, &BrokenOpener).unwrap();

        assert!(response.path.is_file());
        assert!(matches!(response.opened, OpenOutcome::Failed { .. }));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unwritable_dir_is_export_error() {
        let blocker = scratch_dir();
        fs::write(&blocker, b"file, not folder").unwrap();
        let config = ConfigState::default().export_dir(&blocker);

        let err = export_invoice(&CatalogState::default(), &CartState::new(), &config, &BrokenOpener)
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ExportError);
        fs::remove_file(&blocker).unwrap();
    }
}
