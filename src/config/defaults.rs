// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Controls**: visibility windows of the transient controls overlay
//! - **Playback**: display wake lock
//! - **Account**: remote streaming endpoint
//! - **Diagnostics**: event buffer bounds

use std::time::Duration;

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// How long the controls stay up once playback starts.
pub const READY_CONTROLS_WINDOW: Duration = Duration::from_millis(5000);

/// How long the controls stay up after a tap on the video.
pub const TAP_CONTROLS_WINDOW: Duration = Duration::from_millis(4000);

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Keep the display awake while a session is playing.
pub const DEFAULT_KEEP_DISPLAY_AWAKE: bool = true;

// ==========================================================================
// Account Defaults
// ==========================================================================

/// WebDAV root appended to an account's base URL.
pub const DEFAULT_WEBDAV_PATH: &str = crate::domain::request::DEFAULT_WEBDAV_PATH;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 1000;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_CAPACITY: usize = 100;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_CAPACITY: usize = 10_000;
