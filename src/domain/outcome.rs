// SPDX-License-Identifier: MPL-2.0
//! Terminal results of a preview session.

use super::error::MediaError;
use std::fmt;

/// Why a session entered the failed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// The host handed over no request at all.
    NothingToPlay,
    /// Not downloaded and no usable account to stream from.
    SourceUnavailable,
    /// The render surface reported a decode or stream error.
    Playback(MediaError),
}

impl Failure {
    /// i18n key of the message shown to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::NothingToPlay => "media-error-nothing-to-play",
            Self::SourceUnavailable => "media-error-no-account",
            Self::Playback(error) => error.kind().i18n_key(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingToPlay => write!(f, "Nothing to play"),
            Self::SourceUnavailable => write!(f, "No local copy and no account to stream from"),
            Self::Playback(error) => write!(f, "{error}"),
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackOutcome {
    /// Played to the end.
    #[default]
    Normal,
    NothingToPlay,
    SourceUnavailable,
    PlaybackError { what: i32, extra: i32 },
}

impl PlaybackOutcome {
    #[must_use]
    pub fn is_failure(self) -> bool {
        !matches!(self, Self::Normal)
    }

    /// Stable snake_case name for diagnostics.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::NothingToPlay => "nothing_to_play",
            Self::SourceUnavailable => "source_unavailable",
            Self::PlaybackError { .. } => "playback_error",
        }
    }
}

impl From<Failure> for PlaybackOutcome {
    fn from(failure: Failure) -> Self {
        match failure {
            Failure::NothingToPlay => Self::NothingToPlay,
            Failure::SourceUnavailable => Self::SourceUnavailable,
            Failure::Playback(error) => Self::PlaybackError {
                what: error.what,
                extra: error.extra,
            },
        }
    }
}
