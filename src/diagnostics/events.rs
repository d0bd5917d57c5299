// SPDX-License-Identifier: MPL-2.0
//! Lifecycle event types.

use std::time::Instant;

use serde::Serialize;

use crate::notifications::Severity;

/// A recorded transition.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// Wall-clock instant the event was recorded.
    pub timestamp: Instant,
    /// Manager time in seconds: the sum of every `dt` ticked so far.
    pub sim_time: f32,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind, sim_time: f32) -> Self {
        Self {
            timestamp: Instant::now(),
            sim_time,
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A notification was appended to the queue.
    Enqueued {
        severity: Severity,
        /// Queue length after the append.
        queue_len: usize,
    },
    /// The slot started growing for a notification.
    Shown { severity: Severity, message: String },
    /// Show animation finished; hold delay running.
    HoldStarted,
    /// Hold elapsed; slot shrinking.
    HideStarted,
    /// Slot invisible again.
    Hidden,
    /// A dequeued notification could not be displayed and was skipped.
    ShowFailed { message: String, reason: String },
    PollingStarted,
    PollingFinished,
    FollowStarted,
    FollowStopped,
}

impl DiagnosticEventKind {
    /// Short snake_case label, used for summaries and log lines.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Enqueued { .. } => "enqueued",
            Self::Shown { .. } => "shown",
            Self::HoldStarted => "hold_started",
            Self::HideStarted => "hide_started",
            Self::Hidden => "hidden",
            Self::ShowFailed { .. } => "show_failed",
            Self::PollingStarted => "polling_started",
            Self::PollingFinished => "polling_finished",
            Self::FollowStarted => "follow_started",
            Self::FollowStopped => "follow_stopped",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_serialize_with_type_tag() {
        let kind = DiagnosticEventKind::Enqueued {
            severity: Severity::Warning,
            queue_len: 2,
        };
        let value = toml::Value::try_from(&kind).expect("serializable");
        let table = value.as_table().expect("table");
        assert_eq!(table["type"].as_str(), Some("enqueued"));
        assert_eq!(table["severity"].as_str(), Some("warning"));
        assert_eq!(table["queue_len"].as_integer(), Some(2));
    }

    #[test]
    fn label_matches_serialized_tag() {
        let value = toml::Value::try_from(DiagnosticEventKind::HoldStarted).expect("serializable");
        assert_eq!(
            value.as_table().and_then(|t| t["type"].as_str()),
            Some(DiagnosticEventKind::HoldStarted.label())
        );
    }
}
