// SPDX-License-Identifier: MPL-2.0
//! Playback request types supplied by the host screen.

use std::path::{Path, PathBuf};

/// Default WebDAV root exposed by the server for an account.
pub const DEFAULT_WEBDAV_PATH: &str = "/remote.php/webdav";

/// A file known to the account, possibly already downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    /// Path of the file on the server; doubles as its identifier.
    pub remote_path: String,
    /// Where the file lives on local storage, once downloaded.
    pub storage_path: Option<PathBuf>,
    /// MIME type as reported by the server, if known.
    pub mime_type: Option<String>,
}

impl MediaFile {
    /// Creates a file that only exists on the server.
    #[must_use]
    pub fn remote(remote_path: impl Into<String>) -> Self {
        Self {
            remote_path: remote_path.into(),
            storage_path: None,
            mime_type: None,
        }
    }

    /// Creates a file that has a local copy.
    #[must_use]
    pub fn downloaded(remote_path: impl Into<String>, storage_path: impl Into<PathBuf>) -> Self {
        Self {
            remote_path: remote_path.into(),
            storage_path: Some(storage_path.into()),
            mime_type: None,
        }
    }

    /// Sets the MIME type.
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// A file counts as downloaded only if it has a non-empty storage path.
    #[must_use]
    pub fn is_down(&self) -> bool {
        self.storage_path
            .as_deref()
            .is_some_and(|path| !path.as_os_str().is_empty())
    }
}

/// Account through which remote files can be streamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountContext {
    /// Account display name (`user@host`).
    pub name: String,
    /// Server base URL, e.g. `https://cloud.example.org`.
    pub base_url: String,
    /// WebDAV root below the base URL.
    pub webdav_path: String,
}

impl AccountContext {
    /// Creates an account using the default WebDAV root.
    #[must_use]
    pub fn new(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            webdav_path: DEFAULT_WEBDAV_PATH.to_string(),
        }
    }

    /// Overrides the WebDAV root.
    #[must_use]
    pub fn with_webdav_path(mut self, webdav_path: impl Into<String>) -> Self {
        self.webdav_path = webdav_path.into();
        self
    }

    /// Full endpoint remote paths are appended to.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.webdav_path)
    }
}

/// Immutable input to a playback session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackRequest {
    pub file: MediaFile,
    pub account: Option<AccountContext>,
}

impl PlaybackRequest {
    #[must_use]
    pub fn new(file: MediaFile, account: Option<AccountContext>) -> Self {
        Self { file, account }
    }

    /// Opaque identifier of the file to play.
    #[must_use]
    pub fn resource_id(&self) -> &str {
        &self.file.remote_path
    }

    #[must_use]
    pub fn is_locally_available(&self) -> bool {
        self.file.is_down()
    }

    /// Local path, present iff the file is locally available.
    #[must_use]
    pub fn local_path(&self) -> Option<&Path> {
        if self.is_locally_available() {
            self.file.storage_path.as_deref()
        } else {
            None
        }
    }

    #[must_use]
    pub fn remote_context(&self) -> Option<&AccountContext> {
        self.account.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_storage_path_is_not_downloaded() {
        let file = MediaFile::downloaded("/Videos/a.mp4", "");
        assert!(!file.is_down());

        let request = PlaybackRequest::new(file, None);
        assert!(!request.is_locally_available());
        assert!(request.local_path().is_none());
    }

    #[test]
    fn downloaded_file_exposes_local_path() {
        let request =
            PlaybackRequest::new(MediaFile::downloaded("/Videos/a.mp4", "/sdcard/a.mp4"), None);
        assert!(request.is_locally_available());
        assert_eq!(request.local_path(), Some(Path::new("/sdcard/a.mp4")));
        assert_eq!(request.resource_id(), "/Videos/a.mp4");
    }

    #[test]
    fn endpoint_joins_base_and_webdav_root() {
        let account = AccountContext::new("bob@cloud", "https://cloud.example.org/");
        assert_eq!(
            account.endpoint(),
            "https://cloud.example.org/remote.php/webdav"
        );

        let custom = account.with_webdav_path("/dav/files/bob");
        assert_eq!(custom.endpoint(), "https://cloud.example.org/dav/files/bob");
    }

    #[test]
    fn mime_type_is_optional_metadata() {
        let file = MediaFile::remote("/Videos/b.webm").with_mime_type("video/webm");
        assert_eq!(file.mime_type.as_deref(), Some("video/webm"));
        assert!(!file.is_down());
    }
}
