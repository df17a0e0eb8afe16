// SPDX-License-Identifier: MPL-2.0
//! Diagnostic report generation.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DiagnosticEventKind;

/// Metadata about a diagnostic report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// When the report was generated (ISO 8601)
    pub generated_at: String,
    pub player_version: String,
    /// When diagnostic collection started (ISO 8601)
    pub collection_started_at: String,
    pub collection_duration_ms: u64,
    pub event_count: usize,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            player_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: collection_started_at.to_rfc3339(),
            collection_duration_ms,
            event_count,
        }
    }
}

/// Minimal platform description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemInfo {
    pub os: String,
    pub cpu_arch: String,
}

impl SystemInfo {
    #[must_use]
    pub fn collect() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            cpu_arch: std::env::consts::ARCH.to_string(),
        }
    }
}

/// An event with its offset from the start of collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    pub offset_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(timestamp: Instant, started_at: Instant, kind: DiagnosticEventKind) -> Self {
        Self {
            offset_ms: timestamp.saturating_duration_since(started_at).as_millis() as u64,
            kind,
        }
    }
}

/// Complete exported report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub system_info: SystemInfo,
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticReport {
    #[must_use]
    pub fn new(
        metadata: ReportMetadata,
        system_info: SystemInfo,
        events: Vec<SerializableEvent>,
    ) -> Self {
        Self {
            metadata,
            system_info,
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::UserAction;
    use std::time::Duration;

    #[test]
    fn event_offset_is_relative_to_start() {
        let start = Instant::now();
        let event = SerializableEvent::new(
            start + Duration::from_millis(250),
            start,
            DiagnosticEventKind::UserAction {
                action: UserAction::TapVideo,
                details: None,
            },
        );
        assert_eq!(event.offset_ms, 250);
    }

    #[test]
    fn event_before_start_saturates_to_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let event = SerializableEvent::new(
            Instant::now(),
            start,
            DiagnosticEventKind::UserAction {
                action: UserAction::TapVideo,
                details: None,
            },
        );
        assert_eq!(event.offset_ms, 0);
    }

    #[test]
    fn report_serializes_flattened_events() {
        let report = DiagnosticReport::new(
            ReportMetadata::new(Utc::now(), 10, 1),
            SystemInfo::collect(),
            vec![SerializableEvent {
                offset_ms: 5,
                kind: DiagnosticEventKind::UserAction {
                    action: UserAction::AcknowledgeError,
                    details: None,
                },
            }],
        );
        let json = serde_json::to_string(&report).expect("serialize");
        assert!(json.contains("\"offset_ms\":5"));
        assert!(json.contains("\"type\":\"user_action\""));
        assert!(json.contains(env!("CARGO_PKG_VERSION")));
    }
}
