//! # Receipt Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / lopdf error                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ExportError (this module) ← Adds the path involved                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (desktop app) ← "EXPORT_ERROR", shown to the operator        │
//! │                                                                         │
//! │  OpenError never travels this far: hand_off() logs it and reports      │
//! │  OpenOutcome::Failed alongside a successful export.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Receipt export failures. The operator asked for a receipt, so every
/// one of these is surfaced.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Output directory could not be created.
    ///
    /// ## When This Occurs
    /// - Parent directory is read-only
    /// - Path points at an existing file
    #[error("Could not create receipt directory {}: {}", .path.display(), .source)]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The receipt file could not be written.
    ///
    /// ## When This Occurs
    /// - Disk full
    /// - Permissions
    /// - The file is locked by a viewer (Windows)
    #[error("Could not write receipt {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A page content stream could not be encoded.
    #[error("Could not encode receipt page {page}: {message}")]
    Encode { page: usize, message: String },

    /// The finished document could not be serialized.
    #[error("Could not serialize receipt: {0}")]
    Serialize(String),
}

/// Failure to launch the platform document opener.
#[derive(Debug, Error)]
pub enum OpenError {
    #[error("Could not launch {} for {}: {}", .program, .path.display(), .source)]
    Launch {
        program: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Convenience type alias for Results with ExportError.
pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_path() {
        let err = ExportError::Write {
            path: PathBuf::from("/tmp/invoice_20240501_093000.pdf"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "Could not write receipt /tmp/invoice_20240501_093000.pdf: denied"
        );
    }
}
