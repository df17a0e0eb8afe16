// SPDX-License-Identifier: MPL-2.0
//! Media errors reported by the render surface as a `(what, extra)` pair.

use std::fmt;

/// Error codes used by platform media players.
pub mod codes {
    /// Unspecified media player error.
    pub const MEDIA_ERROR_UNKNOWN: i32 = 1;
    /// The media server process died.
    pub const MEDIA_ERROR_SERVER_DIED: i32 = 100;
    /// Container is not laid out for progressive playback.
    pub const MEDIA_ERROR_NOT_VALID_FOR_PROGRESSIVE_PLAYBACK: i32 = 200;

    /// File or network related operation failed.
    pub const MEDIA_ERROR_IO: i32 = -1004;
    /// Bitstream does not conform to its coding standard.
    pub const MEDIA_ERROR_MALFORMED: i32 = -1007;
    /// Bitstream conforms but uses an unsupported feature.
    pub const MEDIA_ERROR_UNSUPPORTED: i32 = -1010;
    /// Some operation took too long.
    pub const MEDIA_ERROR_TIMED_OUT: i32 = -110;
}

/// Raw error pair from the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaError {
    /// Error category.
    pub what: i32,
    /// Implementation specific detail code.
    pub extra: i32,
}

/// User-facing classification of a [`MediaError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaErrorKind {
    NotValidForProgressivePlayback,
    Io,
    Malformed,
    Unsupported,
    TimedOut,
    Unknown,
}

impl MediaError {
    #[must_use]
    pub fn new(what: i32, extra: i32) -> Self {
        Self { what, extra }
    }

    /// Classifies the pair. The category wins for progressive-playback
    /// errors; otherwise the detail code decides.
    #[must_use]
    pub fn kind(&self) -> MediaErrorKind {
        if self.what == codes::MEDIA_ERROR_NOT_VALID_FOR_PROGRESSIVE_PLAYBACK {
            return MediaErrorKind::NotValidForProgressivePlayback;
        }
        match self.extra {
            codes::MEDIA_ERROR_IO => MediaErrorKind::Io,
            codes::MEDIA_ERROR_MALFORMED => MediaErrorKind::Malformed,
            codes::MEDIA_ERROR_UNSUPPORTED => MediaErrorKind::Unsupported,
            codes::MEDIA_ERROR_TIMED_OUT => MediaErrorKind::TimedOut,
            _ => MediaErrorKind::Unknown,
        }
    }
}

impl MediaErrorKind {
    /// Returns the i18n message key for this error kind.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Self::NotValidForProgressivePlayback => "media-error-not-progressive",
            Self::Io => "media-error-io",
            Self::Malformed => "media-error-malformed",
            Self::Unsupported => "media-error-unsupported",
            Self::TimedOut => "media-error-timeout",
            Self::Unknown => "media-error-unknown",
        }
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind() {
            MediaErrorKind::NotValidForProgressivePlayback => "Not valid for progressive playback",
            MediaErrorKind::Io => "I/O error",
            MediaErrorKind::Malformed => "Malformed media",
            MediaErrorKind::Unsupported => "Unsupported media",
            MediaErrorKind::TimedOut => "Timed out",
            MediaErrorKind::Unknown => "Unknown media error",
        };
        write!(f, "{label} (what = {}, extra = {})", self.what, self.extra)
    }
}
