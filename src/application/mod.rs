// SPDX-License-Identifier: MPL-2.0
//! Application layer: the seams between a session and its host.
//!
//! - [`port`]: capability traits the host implements (surface, overlay,
//!   dialog, remote URIs, messages)
//! - [`signal`]: the single event queue every asynchronous signal travels
//!   through
//!
//! # Dependency Rule
//!
//! - Application layer depends on the domain layer only
//! - Infrastructure implements the ports
//! - The session orchestrates through the ports and never sees a concrete
//!   surface or widget

pub mod port;
pub mod signal;

pub use signal::{Signal, SignalQueue, SignalSink, TouchPhase};
