// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::export::write_atomic;
use super::{
    sanitize_message, BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind,
    DiagnosticReport, ErrorEvent, ReportMetadata, SerializableEvent, SessionEvent, SystemInfo,
    UserAction, WarningEvent,
};
use crate::error::Result;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sends never block: when the channel is full the event is
/// dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        self.send(DiagnosticEventKind::UserAction {
            action,
            details: None,
        });
    }

    pub fn log_session(&self, event: SessionEvent) {
        self.send(DiagnosticEventKind::Session { event });
    }

    /// Logs a warning; the message is sanitized.
    pub fn log_warning(&self, warning: WarningEvent) {
        let event = WarningEvent {
            message: sanitize_message(&warning.message),
            ..warning
        };
        self.send(DiagnosticEventKind::Warning { event });
    }

    /// Logs an error; the message is sanitized.
    pub fn log_error(&self, error: ErrorEvent) {
        let event = ErrorEvent {
            message: sanitize_message(&error.message),
            ..error
        };
        self.send(DiagnosticEventKind::Error { event });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Central collector for diagnostic events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    /// Sender stored to create handles.
    event_tx: Sender<DiagnosticEvent>,
    collection_started_at: Instant,
    collection_started_at_utc: DateTime<Utc>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsCollector {
    /// The channel holds as many events as the buffer, so a session drained
    /// only once at the end loses nothing the buffer would have kept.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(capacity.value());

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves all pending events from the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Exports all collected events as a pretty JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    /// Writes the JSON report to `path` atomically.
    ///
    /// # Errors
    ///
    /// Returns `Error::Serialization` if the report cannot be encoded, or
    /// `Error::Io` if writing the file fails.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let json = self.export_json()?;
        write_atomic(path, &json)?;
        Ok(path.to_path_buf())
    }

    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    fn build_report(&self) -> DiagnosticReport {
        let collection_duration_ms = self.collection_started_at.elapsed().as_millis() as u64;

        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();

        let metadata = ReportMetadata::new(
            self.collection_started_at_utc,
            collection_duration_ms,
            events.len(),
        );

        DiagnosticReport::new(metadata, SystemInfo::collect(), events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{ErrorType, WarningType};
    use tempfile::tempdir;

    #[test]
    fn handle_events_reach_buffer_after_processing() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let handle = collector.handle();

        handle.log_action(UserAction::TapVideo);
        handle.log_session(SessionEvent::StateChanged {
            from: "loading".into(),
            to: "playing".into(),
        });
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn messages_are_sanitized() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let handle = collector.handle();

        handle.log_error(ErrorEvent::new(
            ErrorType::PlaybackError,
            "cannot stream https://cloud.example.org/remote.php/webdav/a.mp4",
        ));
        handle.log_warning(WarningEvent::new(
            WarningType::Other,
            "missing /sdcard/a.mp4",
        ));
        collector.process_pending();

        let messages: Vec<String> = collector
            .iter()
            .filter_map(|event| match &event.kind {
                DiagnosticEventKind::Error { event } => Some(event.message.clone()),
                DiagnosticEventKind::Warning { event } => Some(event.message.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(messages, vec!["cannot stream <url>", "missing <path>"]);
    }

    #[test]
    fn full_channel_drops_without_blocking() {
        let capacity = BufferCapacity::new(100);
        let collector = DiagnosticsCollector::new(capacity);
        let handle = collector.handle();
        for _ in 0..(capacity.value() + 10) {
            handle.log_action(UserAction::TapVideo);
        }
        assert_eq!(collector.event_rx.len(), capacity.value());
    }

    #[test]
    fn single_late_drain_keeps_a_full_buffer_worth() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let handle = collector.handle();
        for _ in 0..500 {
            handle.log_action(UserAction::TapVideo);
        }

        collector.process_pending();
        assert_eq!(collector.len(), 500);
    }

    #[test]
    fn export_to_file_writes_report() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        collector.handle().log_action(UserAction::AcknowledgeError);
        collector.process_pending();

        let dir = tempdir().expect("failed to create temp dir");
        let path = collector
            .export_to_file(dir.path().join("report.json"))
            .expect("export should succeed");

        let content = std::fs::read_to_string(path).expect("read");
        let report: DiagnosticReport = serde_json::from_str(&content).expect("valid json");
        assert_eq!(report.metadata.event_count, 1);
        assert_eq!(report.events.len(), 1);
    }
}
