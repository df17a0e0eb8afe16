// SPDX-License-Identifier: MPL-2.0
//! Message sanitization and warning/error type definitions.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// =============================================================================
// Warning and Error Type Enums
// =============================================================================

/// Categories of warnings a session can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// A signal arrived in a state where it means nothing.
    IgnoredSignal,
    /// Configuration could not be read.
    ConfigurationIssue,
    /// A failure happened while the screen was not visible.
    DetachedFailure,
    Other,
}

/// Categories of errors a session can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// No request was supplied.
    NothingToPlay,
    /// No local copy and no usable account.
    SourceUnavailable,
    /// The surface reported a decode or stream error.
    PlaybackError,
    Other,
}

// =============================================================================
// Message Sanitization
// =============================================================================

/// URLs (may carry account names and server hosts).
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[a-zA-Z][a-zA-Z0-9+.-]*://[^\s"'()\[\]]+"#).expect("url regex should compile")
});

/// Absolute and home-relative file paths.
static PATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"("#,
        r#"(?:^|\s)/[^\s"'()\[\]]+"#, // Unix absolute paths
        r#"|~/[^\s"'()\[\]]+"#,       // Home shortcut
        r#"|[A-Za-z]:\\[^\s"'()\[\]]+"#, // Windows drive paths
        r#")"#,
    ))
    .expect("path regex should compile")
});

/// Sanitizes a message by removing URLs and file paths.
///
/// # Examples
///
/// ```
/// use preview_player::diagnostics::sanitize_message;
///
/// let msg = "Failed to open /sdcard/Movies/holiday.mp4";
/// assert_eq!(sanitize_message(msg), "Failed to open <path>");
///
/// let msg = "Stream https://bob@cloud.example.org/remote.php/webdav/a.mp4 timed out";
/// assert_eq!(sanitize_message(msg), "Stream <url> timed out");
/// ```
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    let without_urls = URL_PATTERN.replace_all(message, "<url>");
    PATH_PATTERN
        .replace_all(&without_urls, |caps: &regex::Captures<'_>| {
            let matched = &caps[0];
            if matched.starts_with(char::is_whitespace) {
                " <path>".to_string()
            } else {
                "<path>".to_string()
            }
        })
        .into_owned()
}
