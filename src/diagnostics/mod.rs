// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting session activity.
//!
//! Sessions report what happens to them (signals, state changes, errors)
//! as [`DiagnosticEvent`]s. Events travel through a bounded channel into a
//! memory-bounded [`CircularBuffer`] and can be exported as a JSON report.
//!
//! # Architecture
//!
//! - [`DiagnosticsHandle`]: cheap, cloneable, non-blocking sender
//! - [`DiagnosticsCollector`]: owns the buffer and drains the channel
//! - [`BufferCapacity`]: validated buffer size
//!
//! # Privacy
//!
//! Free-form messages are sanitized before they are stored: file paths and
//! URLs are replaced by placeholders.

mod buffer;
mod collector;
mod events;
mod export;
mod report;
mod sanitizer;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, SessionEvent, SourceKind, UserAction,
    WarningEvent,
};
pub use export::{generate_default_filename, write_atomic};
pub use report::{DiagnosticReport, ReportMetadata, SerializableEvent, SystemInfo};
pub use sanitizer::{sanitize_message, ErrorType, WarningType};
