// SPDX-License-Identifier: MPL-2.0
//! Severity to presentation style lookup.

use super::notification::Severity;
use crate::domain::Color;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Colors applied to the slot for one severity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NotificationStyle {
    pub background_color: Color,
    pub message_color: Color,
}

impl NotificationStyle {
    #[must_use]
    pub const fn new(background_color: Color, message_color: Color) -> Self {
        Self {
            background_color,
            message_color,
        }
    }
}

/// Exhaustive severity → style table.
///
/// Construction fails unless every severity has a style and every key names a
/// severity, so resolving a style afterwards cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable {
    styles: [NotificationStyle; 3],
}

impl StyleTable {
    /// Builds the table from settings keyed by severity name.
    pub fn from_named(named: &BTreeMap<String, NotificationStyle>) -> Result<Self> {
        let mut slots: [Option<NotificationStyle>; 3] = [None; 3];
        for (name, style) in named {
            let severity: Severity = name.parse()?;
            slots[severity.index()] = Some(*style);
        }
        Self::from_slots(slots)
    }

    /// Builds the table from `(severity, style)` pairs; later pairs win.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Severity, NotificationStyle)>,
    {
        let mut slots: [Option<NotificationStyle>; 3] = [None; 3];
        for (severity, style) in pairs {
            slots[severity.index()] = Some(style);
        }
        Self::from_slots(slots)
    }

    fn from_slots(slots: [Option<NotificationStyle>; 3]) -> Result<Self> {
        let [info, warning, error] = slots;
        Ok(Self {
            styles: [
                info.ok_or(Error::MissingStyle(Severity::Info))?,
                warning.ok_or(Error::MissingStyle(Severity::Warning))?,
                error.ok_or(Error::MissingStyle(Severity::Error))?,
            ],
        })
    }

    #[must_use]
    pub fn resolve(&self, severity: Severity) -> &NotificationStyle {
        &self.styles[severity.index()]
    }
}
