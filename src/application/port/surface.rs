// SPDX-License-Identifier: MPL-2.0
//! Render surface port definition.
//!
//! The surface both decodes and displays the video. The session only ever
//! asks it to load, to start and to keep the display awake; everything else
//! is reported back through the [`SignalSink`] given to
//! [`RenderSurface::set_listener`].

use crate::application::signal::SignalSink;
use crate::domain::PlayableLocation;

/// Port for the video render surface.
///
/// # Signals
///
/// After [`load_source`](Self::load_source) the surface must push, on the
/// listener it was given:
/// - [`Signal::Ready`](crate::application::Signal::Ready) once the source is prepared
/// - [`Signal::Finished`](crate::application::Signal::Finished) at natural end
/// - [`Signal::Error`](crate::application::Signal::Error) on failure, which
///   preempts the other two
pub trait RenderSurface {
    /// Registers where ready/finished/error signals go. Replaces any
    /// previous listener.
    fn set_listener(&mut self, listener: SignalSink);

    /// Starts preparing a source. Preparation is asynchronous.
    fn load_source(&mut self, location: &PlayableLocation);

    /// Starts playback of a prepared source.
    fn start(&mut self);

    /// Whether the surface is currently attached to a visible window.
    fn is_screen_attached(&self) -> bool;

    /// Keeps the display from sleeping while playing.
    fn set_keep_display_awake(&mut self, keep_awake: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe
    fn _assert_object_safe(_: &dyn RenderSurface) {}
}
