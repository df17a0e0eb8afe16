// SPDX-License-Identifier: MPL-2.0
//! Visibility tracking for the transient controls overlay.
//!
//! The overlay hides itself on its own timer, so the session never hears
//! about it. This mirrors that timer to answer "is it up right now?".

use std::time::{Duration, Instant};

/// Mirror of the overlay's show/hide timing.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// When the overlay was last shown, and for how long.
    shown: Option<(Instant, Duration)>,
}

/// Messages for the overlay tracker.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// The overlay was asked to show for a window.
    Shown(Duration),
    /// The overlay was asked to hide.
    Hidden,
}

impl State {
    /// Handle an overlay message.
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::Shown(window) => self.shown = Some((Instant::now(), window)),
            Message::Hidden => self.shown = None,
        }
    }

    /// Whether the overlay is still within its visibility window.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.shown
            .is_some_and(|(at, window)| at.elapsed() < window)
    }
}
