// SPDX-License-Identifier: MPL-2.0
//! Diagnostics export adapter.
//!
//! The host decides where a report goes; the collector only knows how to
//! serialize itself. [`DiagnosticsExporter`] is the seam between the two.
//!
//! # Example
//!
//! ```no_run
//! use preview_player::diagnostics::DiagnosticsCollector;
//! use preview_player::infrastructure::diagnostics::DiagnosticsExporter;
//!
//! let collector = DiagnosticsCollector::default();
//! let path = collector.export_to_directory(std::path::Path::new("/tmp"))?;
//! # Ok::<(), preview_player::error::Error>(())
//! ```

use std::path::{Path, PathBuf};

use crate::diagnostics::{generate_default_filename, DiagnosticsCollector};
use crate::error::Result;

/// Trait for diagnostic report export operations.
pub trait DiagnosticsExporter {
    /// Exports the report to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn export_to_file(&self, path: &Path) -> Result<PathBuf>;

    /// Exports the report under a timestamped name inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn export_to_directory(&self, dir: &Path) -> Result<PathBuf> {
        self.export_to_file(&dir.join(generate_default_filename()))
    }
}

impl DiagnosticsExporter for DiagnosticsCollector {
    fn export_to_file(&self, path: &Path) -> Result<PathBuf> {
        DiagnosticsCollector::export_to_file(self, path)
    }
}

/// Exports to `target`: a directory gets a timestamped file, anything else
/// is used as the file path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn export_report(exporter: &dyn DiagnosticsExporter, target: &Path) -> Result<PathBuf> {
    if target.is_dir() {
        exporter.export_to_directory(target)
    } else {
        exporter.export_to_file(target)
    }
}
