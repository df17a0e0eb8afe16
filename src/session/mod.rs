// SPDX-License-Identifier: MPL-2.0
//! Preview session: resolve a source, play it, recover from failures.
//!
//! - [`resolver`]: local copy or remote URI
//! - [`machine`]: pure state transitions
//! - [`presenter`]: what a failure shows to the user
//! - [`overlay`]: controls visibility tracking
//! - [`controller`]: owns the state and runs effects against the capabilities

pub mod controller;
pub mod machine;
pub mod overlay;
pub mod presenter;
pub mod resolver;

pub use controller::{Capabilities, PlaybackController};
pub use machine::{transition, Context, ControllerState, Effect, Transition};
pub use resolver::{resolve, resolve_request, SourceUnavailable};

use crate::config::defaults::DEFAULT_KEEP_DISPLAY_AWAKE;

/// Per-session knobs taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Hold a display wake lock between load and termination.
    pub keep_display_awake: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            keep_display_awake: DEFAULT_KEEP_DISPLAY_AWAKE,
        }
    }
}
