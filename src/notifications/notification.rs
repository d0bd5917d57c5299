// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::config::SUB_MESSAGE_EMPHASIS_TAG;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity level determines the visual style of a notification.
///
/// Severity never affects queue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational message.
    #[default]
    Info,
    /// Something the user should notice.
    Warning,
    /// Something went wrong.
    Error,
}

impl Severity {
    /// All severities, in declaration order.
    pub const ALL: [Severity; 3] = [Severity::Info, Severity::Warning, Severity::Error];

    /// Stable lowercase name, used as the settings key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Position of this severity in [`Severity::ALL`].
    #[must_use]
    pub(crate) fn index(self) -> usize {
        match self {
            Severity::Info => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(Error::UnknownSeverity(s.to_string())),
        }
    }
}

/// A notification waiting for, or going through, its display cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    message: String,
    severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    /// Two-line notification; the second line is rendered at reduced emphasis.
    pub fn with_sub_message(message: &str, sub_message: &str, severity: Severity) -> Self {
        Self::new(
            format!("{message} \n{SUB_MESSAGE_EMPHASIS_TAG}{sub_message}"),
            severity,
        )
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_constructors_set_correct_severity() {
        assert_eq!(Notification::info("").severity(), Severity::Info);
        assert_eq!(Notification::warning("").severity(), Severity::Warning);
        assert_eq!(Notification::error("").severity(), Severity::Error);
    }

    #[test]
    fn sub_message_is_appended_on_a_dimmed_second_line() {
        let n = Notification::with_sub_message("Saved", "3 files", Severity::Info);
        assert_eq!(n.message(), "Saved \n<alpha=#33>3 files");
    }

    #[test]
    fn severity_parses_case_insensitively() {
        assert_eq!("Warning".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!(" error ".parse::<Severity>(), Ok(Severity::Error));
        assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warning));
    }

    #[test]
    fn unknown_severity_is_rejected() {
        assert_eq!(
            "fatal".parse::<Severity>(),
            Err(Error::UnknownSeverity("fatal".to_string()))
        );
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, severity) in Severity::ALL.iter().enumerate() {
            assert_eq!(severity.index(), i);
        }
    }

    #[test]
    fn default_severity_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }
}
