//! # Document Opener
//!
//! Hands an exported receipt to whatever the desktop uses for PDFs, so the
//! operator can print it from there.
//!
//! ## Platform Launchers
//! ```text
//! ┌──────────────┬──────────────────────────────┐
//! │ Linux / BSD  │ xdg-open <path>              │
//! │ macOS        │ open <path>                  │
//! │ Windows      │ cmd /C start "" <path>       │
//! └──────────────┴──────────────────────────────┘
//! ```
//!
//! The launcher is spawned and never waited on by the caller. A launch
//! failure is logged and reported as [`OpenOutcome::Failed`]; the receipt
//! on disk is still a successful export.

use serde::Serialize;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

use crate::error::OpenError;
use crate::exporter::ExportedReceipt;

/// Something that can show a file to the operator.
pub trait DocumentOpener {
    fn open(&self, path: &Path) -> Result<(), OpenError>;
}

/// What happened after the receipt was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum OpenOutcome {
    /// The launcher process started.
    Opened,
    /// Opening was turned off in configuration.
    Skipped,
    /// The launcher could not be started.
    Failed { reason: String },
}

// =============================================================================
// System Opener
// =============================================================================

/// Spawns the platform's default document handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemOpener {
    program: String,
    args: Vec<String>,
}

impl SystemOpener {
    /// Launcher for the platform this binary was built for.
    pub fn platform() -> Self {
        #[cfg(target_os = "windows")]
        {
            SystemOpener::with_program("cmd", ["/C", "start", ""])
        }
        #[cfg(target_os = "macos")]
        {
            SystemOpener::with_program("open", [] as [&str; 0])
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            SystemOpener::with_program("xdg-open", [] as [&str; 0])
        }
    }

    /// Runs `program args... <path>` instead of the platform default.
    pub fn with_program<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SystemOpener {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for SystemOpener {
    fn default() -> Self {
        SystemOpener::platform()
    }
}

impl DocumentOpener for SystemOpener {
    fn open(&self, path: &Path) -> Result<(), OpenError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| OpenError::Launch {
                program: self.program.clone(),
                path: path.to_path_buf(),
                source,
            })?;

        debug!(program = %self.program, path = %path.display(), "Launched document opener");

        // Reap the launcher in the background.
        std::thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}

/// Opens the receipt and folds any failure into an [`OpenOutcome`].
pub fn hand_off(opener: &dyn DocumentOpener, receipt: &ExportedReceipt) -> OpenOutcome {
    match opener.open(&receipt.path) {
        Ok(()) => OpenOutcome::Opened,
        Err(err) => {
            warn!(error = %err, "Receipt saved but could not be opened");
            OpenOutcome::Failed {
                reason: err.to_string(),
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
