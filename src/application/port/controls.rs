// SPDX-License-Identifier: MPL-2.0
//! Transient controls port definition.

use super::surface::RenderSurface;
use std::time::Duration;

/// Port for the scrubber/control panel shown over the video.
///
/// The overlay hides itself once the window passed to [`show`](Self::show)
/// elapses; calling `show` again re-arms that timer.
pub trait TransientControls {
    /// Anchors the controls to the surface they operate.
    fn bind_to(&mut self, surface: &dyn RenderSurface);

    /// Reveals the controls for `window`.
    fn show(&mut self, window: Duration);

    /// Hides the controls immediately.
    fn hide(&mut self);
}
