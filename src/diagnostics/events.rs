// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for session activity.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::sanitizer::{ErrorType, WarningType};

/// User-initiated actions that can be captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Touched the video to bring the controls back.
    TapVideo,
    /// Pressed the button of the error modal.
    AcknowledgeError,
}

/// Where a session's source came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Local,
    Remote,
    /// Resolution failed; nothing was loaded.
    Unresolved,
}

/// Session lifecycle events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A request was opened.
    Opened {
        source: SourceKind,
        #[serde(skip_serializing_if = "Option::is_none")]
        mime_type: Option<String>,
    },
    /// The state machine moved.
    StateChanged { from: String, to: String },
    /// The host was told the session is over.
    Completed { outcome: String },
}

/// A warning with its category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// An error with its category and, for surface errors, the raw codes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub what: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<i32>,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
            what: None,
            extra: None,
        }
    }

    /// Attaches the surface's `(what, extra)` pair.
    #[must_use]
    pub fn with_codes(mut self, what: i32, extra: i32) -> Self {
        self.what = Some(what);
        self.extra = Some(extra);
        self
    }
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    Session {
        event: SessionEvent,
    },
    Warning {
        event: WarningEvent,
    },
    Error {
        event: ErrorEvent,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_event_new_creates_with_current_timestamp() {
        let before = Instant::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction {
            action: UserAction::TapVideo,
            details: None,
        });
        let after = Instant::now();

        assert!(event.timestamp >= before);
        assert!(event.timestamp <= after);
    }

    #[test]
    fn session_event_serializes_tagged() {
        let kind = DiagnosticEventKind::Session {
            event: SessionEvent::StateChanged {
                from: "loading".into(),
                to: "playing".into(),
            },
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        assert!(json.contains("\"type\":\"session\""));
        assert!(json.contains("\"event\":\"state_changed\""));
        assert!(json.contains("\"to\":\"playing\""));
    }

    #[test]
    fn error_event_omits_missing_codes() {
        let kind = DiagnosticEventKind::Error {
            event: ErrorEvent::new(ErrorType::NothingToPlay, "Nothing to play"),
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        assert!(!json.contains("\"what\""));

        let with_codes = ErrorEvent::new(ErrorType::PlaybackError, "boom").with_codes(1, -1004);
        let json = serde_json::to_string(&with_codes).expect("serialization should succeed");
        assert!(json.contains("\"extra\":-1004"));
    }

    #[test]
    fn event_kind_deserializes_from_json() {
        let json = r#"{"type":"user_action","action":{"action":"acknowledge_error"}}"#;
        let kind: DiagnosticEventKind =
            serde_json::from_str(json).expect("deserialization should succeed");
        assert_eq!(
            kind,
            DiagnosticEventKind::UserAction {
                action: UserAction::AcknowledgeError,
                details: None
            }
        );
    }
}
