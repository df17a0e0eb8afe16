// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, plus the diagnostics export seam.
//!
//! # Available Adapters
//!
//! - [`account`]: WebDAV stream URIs (implements [`RemoteContextResolver`])
//! - [`console`]: terminal surface, overlay and dialog used by the binary
//! - [`diagnostics`]: diagnostics report export
//!
//! [`RemoteContextResolver`]: crate::application::port::RemoteContextResolver

pub mod account;
pub mod console;
pub mod diagnostics;

pub use account::WebDavUriBuilder;
pub use console::{ConsoleControls, ConsoleDialog, ConsoleSurface, Script};
pub use diagnostics::{export_report, DiagnosticsExporter};
