// SPDX-License-Identifier: MPL-2.0
//! Resolved source handed to the render surface.

use std::fmt;
use std::path::PathBuf;

/// A source the render surface can load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayableLocation {
    /// File already present on local storage.
    Local(PathBuf),
    /// Streamed from the account's server.
    Remote(String),
}

impl PlayableLocation {
    /// Returns true if the surface will stream over the network.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

impl fmt::Display for PlayableLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) => write!(f, "{}", path.display()),
            Self::Remote(uri) => write!(f, "{uri}"),
        }
    }
}
