// SPDX-License-Identifier: MPL-2.0
//! File helpers for diagnostic report export.

use std::fs;
use std::io;
use std::path::Path;

use chrono::Local;

/// Default file name for a report, stamped with the local time.
#[must_use]
pub fn generate_default_filename() -> String {
    format!(
        "preview_player_diagnostics_{}.json",
        Local::now().format("%Y%m%d_%H%M%S")
    )
}

/// Writes `content` to `path` through a temporary file and a rename.
///
/// # Errors
///
/// Returns the underlying I/O error; the temporary file is removed on failure.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_filename_is_json() {
        let name = generate_default_filename();
        assert!(name.starts_with("preview_player_diagnostics_"));
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn write_atomic_leaves_no_temp_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("report.json");

        write_atomic(&path, "{}").expect("write should succeed");

        assert_eq!(fs::read_to_string(&path).expect("read"), "{}");
        assert!(!dir.path().join("report.json.tmp").exists());
    }

    #[test]
    fn write_atomic_fails_in_missing_directory() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("missing").join("report.json");
        assert!(write_atomic(&path, "{}").is_err());
    }
}
