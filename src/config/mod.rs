// SPDX-License-Identifier: MPL-2.0
//! Notification settings, loaded from and saved to a `settings.toml` file.
//!
//! The core never mutates settings; a [`NotificationSettings`] value is
//! handed to the manager at construction.
//!
//! # Examples
//!
//! ```no_run
//! use vr_notifications::config;
//!
//! let mut settings = config::load().unwrap_or_default();
//! settings.default_duration = 4.0;
//! config::save(&settings).expect("Failed to save settings");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::Color;
use crate::error::Result;
use crate::notifications::{Curve, NotificationStyle, PlacementSettings};
use crate::ui::design_tokens::{opacity, palette};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "VRNotifications";

/// Every tunable of the notification slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// Enqueue [`WELCOME_MESSAGE`] once the viewpoint is available.
    pub show_welcome_message_at_start: bool,
    /// Log every sent message at info level.
    pub print_debug_messages: bool,

    /// Keep the slot in front of the moving viewpoint while active.
    pub follow_head: bool,
    /// Use the full 3D forward for the offset instead of the horizontal one.
    pub is_offset_relative: bool,
    pub distance_from_head: f32,
    pub down_offset: f32,
    /// Smoothing time for the follow position.
    pub follow_head_smooth: f32,
    /// Smoothing time for the follow facing direction.
    pub look_at_head_smooth: f32,

    pub to_show_duration: f32,
    pub to_hide_duration: f32,
    /// Hold time between the end of the show and the start of the hide.
    pub default_duration: f32,
    pub show_curve: Curve,
    pub hide_curve: Curve,

    /// Polling interval of the queue scheduler.
    pub checking_frequency: f32,

    /// Ticks between a content change and the layout refresh request.
    pub layout_settle_ticks: u32,
    /// Seconds to wait before resolving the viewpoint the first time.
    pub startup_delay: f32,
    /// Number of lifecycle events kept for inspection.
    pub diagnostics_capacity: usize,

    /// Style per severity, keyed by severity name (`info`, `warning`, `error`).
    pub styles: BTreeMap<String, NotificationStyle>,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            show_welcome_message_at_start: true,
            print_debug_messages: false,
            follow_head: true,
            is_offset_relative: false,
            distance_from_head: DEFAULT_DISTANCE_FROM_HEAD,
            down_offset: DEFAULT_DOWN_OFFSET,
            follow_head_smooth: DEFAULT_FOLLOW_HEAD_SMOOTH_SECS,
            look_at_head_smooth: DEFAULT_LOOK_AT_HEAD_SMOOTH_SECS,
            to_show_duration: DEFAULT_TO_SHOW_DURATION_SECS,
            to_hide_duration: DEFAULT_TO_HIDE_DURATION_SECS,
            default_duration: DEFAULT_HOLD_DURATION_SECS,
            show_curve: Curve::EaseOutBack,
            hide_curve: Curve::EaseIn,
            checking_frequency: DEFAULT_CHECKING_FREQUENCY_SECS,
            layout_settle_ticks: DEFAULT_LAYOUT_SETTLE_TICKS,
            startup_delay: DEFAULT_STARTUP_DELAY_SECS,
            diagnostics_capacity: crate::domain::diagnostics::buffer_capacity_bounds::DEFAULT,
            styles: default_styles(),
        }
    }
}

/// Styles shipped with the crate: neutral info, amber warning, red error.
#[must_use]
pub fn default_styles() -> BTreeMap<String, NotificationStyle> {
    let mut styles = BTreeMap::new();
    styles.insert(
        "info".to_string(),
        NotificationStyle::new(palette::GRAY_900.with_alpha(opacity::PANEL), palette::WHITE),
    );
    styles.insert(
        "warning".to_string(),
        NotificationStyle::new(palette::WARNING_500, palette::GRAY_900),
    );
    styles.insert(
        "error".to_string(),
        NotificationStyle::new(palette::ERROR_500, palette::WHITE),
    );
    styles
}

impl NotificationSettings {
    /// Returns a copy with every numeric value clamped into its valid range
    /// and keyframe curves sorted by time.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let transition = |v: f32| clamp_finite(v, MIN_TRANSITION_SECS, MAX_TRANSITION_SECS);
        let smooth = |v: f32| clamp_finite(v, MIN_SMOOTH_SECS, MAX_SMOOTH_SECS);
        Self {
            distance_from_head: clamp_finite(
                self.distance_from_head,
                MIN_DISTANCE_FROM_HEAD,
                MAX_DISTANCE_FROM_HEAD,
            ),
            down_offset: clamp_finite(self.down_offset, -MAX_DOWN_OFFSET, MAX_DOWN_OFFSET),
            follow_head_smooth: smooth(self.follow_head_smooth),
            look_at_head_smooth: smooth(self.look_at_head_smooth),
            to_show_duration: transition(self.to_show_duration),
            to_hide_duration: transition(self.to_hide_duration),
            default_duration: clamp_finite(
                self.default_duration,
                MIN_HOLD_DURATION_SECS,
                MAX_HOLD_DURATION_SECS,
            ),
            checking_frequency: clamp_finite(
                self.checking_frequency,
                MIN_CHECKING_FREQUENCY_SECS,
                MAX_CHECKING_FREQUENCY_SECS,
            ),
            layout_settle_ticks: self.layout_settle_ticks.min(MAX_LAYOUT_SETTLE_TICKS),
            startup_delay: clamp_finite(self.startup_delay, 0.0, MAX_STARTUP_DELAY_SECS),
            show_curve: self.show_curve.sanitized(),
            hide_curve: self.hide_curve.sanitized(),
            ..self.clone()
        }
    }

    /// Offset parameters for the position calculator.
    #[must_use]
    pub fn placement(&self) -> PlacementSettings {
        PlacementSettings {
            distance_from_head: self.distance_from_head,
            down_offset: self.down_offset,
            is_offset_relative: self.is_offset_relative,
        }
    }

    /// Replaces the style of one severity, keyed by its name.
    pub fn set_style(
        &mut self,
        severity: crate::notifications::Severity,
        style: NotificationStyle,
    ) {
        self.styles.insert(severity.as_str().to_string(), style);
    }

    /// Convenience for tests and hosts: style colors for a severity, if configured.
    #[must_use]
    pub fn style_colors(&self, name: &str) -> Option<(Color, Color)> {
        self.styles
            .get(name)
            .map(|s| (s.background_color, s.message_color))
    }
}

/// Clamps `value`, mapping NaN to `min`.
fn clamp_finite(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<NotificationSettings> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(NotificationSettings::default())
}

pub fn save(settings: &NotificationSettings) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(settings, &path);
    }
    Ok(())
}

/// Reads settings from `path`. A file that is not valid TOML yields the
/// defaults with a warning; an unreadable file is an error.
pub fn load_from_path(path: &Path) -> Result<NotificationSettings> {
    let content = fs::read_to_string(path)?;
    match toml::from_str::<NotificationSettings>(&content) {
        Ok(settings) => Ok(settings.sanitized()),
        Err(err) => {
            log::warn!(
                "Invalid notification settings in {}: {}; using defaults",
                path.display(),
                err
            );
            Ok(NotificationSettings::default())
        }
    }
}

pub fn save_to_path(settings: &NotificationSettings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content)?;
    Ok(())
}
