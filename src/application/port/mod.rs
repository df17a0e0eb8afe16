// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The session drives these capabilities; the host supplies implementations.
//!
//! # Available Ports
//!
//! - [`surface`]: the video render surface
//! - [`controls`]: the transient playback controls overlay
//! - [`dialog`]: the modal used for error acknowledgment
//! - [`remote`]: remote URI construction for an account
//! - [`messages`]: user-facing message formatting
//!
//! # Design Notes
//!
//! - Traits use domain types only, no toolkit handles
//! - All capabilities are used from the session's event thread, so none of
//!   them need to be `Send` or `Sync`
//! - Asynchronous callbacks are replaced by a [`SignalSink`](super::SignalSink)
//!   the capability pushes into
//!
//! # Example
//!
//! ```ignore
//! use preview_player::application::port::RenderSurface;
//!
//! struct MySurface { /* platform player */ }
//! impl RenderSurface for MySurface { /* ... */ }
//! ```

pub mod controls;
pub mod dialog;
pub mod messages;
pub mod remote;
pub mod surface;

pub use controls::TransientControls;
pub use dialog::ModalDialog;
pub use messages::MessageFormatter;
pub use remote::RemoteContextResolver;
pub use surface::RenderSurface;
