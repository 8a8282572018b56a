//! # Configuration State
//!
//! Settings fixed at startup.
//!
//! ## Configuration Sources
//! Defaults only (this file). The one environment variable the app reads
//! is `RUST_LOG`, and that is for log filtering.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use counter_receipt::{ExportConfig, DEFAULT_TITLE};

/// Sub-folder of the data directory receipts are written to.
const INVOICE_DIR: &str = "invoices";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shell banner)
    pub store_name: String,

    /// Heading of the invoice panel and of every receipt page
    pub invoice_title: String,

    /// Where exported receipts go
    pub export_dir: PathBuf,

    /// Hand each exported receipt to the system document opener
    pub open_after_export: bool,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Departmental Store"
    /// - Title: "Departmental Store Invoice"
    /// - Export dir: platform data dir + `/invoices`
    /// - Open after export: yes
    fn default() -> Self {
        ConfigState {
            store_name: "Departmental Store".to_string(),
            invoice_title: DEFAULT_TITLE.to_string(),
            export_dir: default_export_dir(),
            open_after_export: true,
        }
    }
}

impl ConfigState {
    /// Sets the receipt export directory.
    pub fn export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    /// Sets the invoice heading.
    pub fn invoice_title(mut self, title: impl Into<String>) -> Self {
        self.invoice_title = title.into();
        self
    }

    /// Sets whether exported receipts are opened.
    pub fn open_after_export(mut self, open: bool) -> Self {
        self.open_after_export = open;
        self
    }

    /// Receipt exporter settings derived from this configuration.
    pub fn export_config(&self) -> ExportConfig {
        ExportConfig::new(&self.export_dir).title(&self.invoice_title)
    }
}

/// Platform data directory for receipts.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.counter.pos/invoices`
/// - **Windows**: `%APPDATA%\counter\pos\data\invoices`
/// - **Linux**: `~/.local/share/pos/invoices`
///
/// Falls back to `./invoices` when no home directory can be found.
fn default_export_dir() -> PathBuf {
    match ProjectDirs::from("com", "counter", "pos") {
        Some(dirs) => dirs.data_dir().join(INVOICE_DIR),
        None => PathBuf::from(INVOICE_DIR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.store_name, "Departmental Store");
        assert_eq!(config.invoice_title, "Departmental Store Invoice");
        assert!(config.open_after_export);
        assert!(config.export_dir.ends_with(INVOICE_DIR));
    }

    #[test]
    fn test_builder_feeds_export_config() {
        let config = ConfigState::default()
            .export_dir("/srv/receipts")
            .invoice_title("Corner Shop Invoice")
            .open_after_export(false);

        let export = config.export_config();
        assert_eq!(export.output_dir, PathBuf::from("/srv/receipts"));
        assert_eq!(export.title, "Corner Shop Invoice");
        assert!(!config.open_after_export);
    }
}
