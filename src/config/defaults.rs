// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all notification settings.
//!
//! Single source of truth for defaults and the bounds `sanitized()` clamps to.
//! All durations are in seconds.

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Time for the slot to grow from zero to full scale.
pub const DEFAULT_TO_SHOW_DURATION_SECS: f32 = 0.3;

/// Time for the slot to shrink from full scale back to zero.
pub const DEFAULT_TO_HIDE_DURATION_SECS: f32 = 0.3;

/// Shortest allowed show/hide animation.
pub const MIN_TRANSITION_SECS: f32 = 0.0;

/// Longest allowed show/hide animation.
pub const MAX_TRANSITION_SECS: f32 = 10.0;

// ==========================================================================
// Hold Defaults
// ==========================================================================

/// How long a fully shown notification stays on screen.
pub const DEFAULT_HOLD_DURATION_SECS: f32 = 2.0;

/// Minimum hold duration.
pub const MIN_HOLD_DURATION_SECS: f32 = 0.0;

/// Maximum hold duration.
pub const MAX_HOLD_DURATION_SECS: f32 = 600.0;

// ==========================================================================
// Scheduler Defaults
// ==========================================================================

/// Interval between queue checks of the polling loop.
pub const DEFAULT_CHECKING_FREQUENCY_SECS: f32 = 0.1;

/// Minimum polling interval.
pub const MIN_CHECKING_FREQUENCY_SECS: f32 = 0.01;

/// Maximum polling interval.
pub const MAX_CHECKING_FREQUENCY_SECS: f32 = 5.0;

// ==========================================================================
// Placement Defaults
// ==========================================================================

/// Distance in front of the viewpoint, in world units.
pub const DEFAULT_DISTANCE_FROM_HEAD: f32 = 0.8;

/// Minimum distance from the viewpoint.
pub const MIN_DISTANCE_FROM_HEAD: f32 = 0.1;

/// Maximum distance from the viewpoint.
pub const MAX_DISTANCE_FROM_HEAD: f32 = 10.0;

/// Offset below the viewpoint along its up axis.
pub const DEFAULT_DOWN_OFFSET: f32 = 0.3;

/// Largest magnitude accepted for the down offset (either direction).
pub const MAX_DOWN_OFFSET: f32 = 5.0;

// ==========================================================================
// Follow Defaults
// ==========================================================================

/// Smoothing time for the slot position while following the viewpoint.
pub const DEFAULT_FOLLOW_HEAD_SMOOTH_SECS: f32 = 0.3;

/// Smoothing time for the slot facing direction.
pub const DEFAULT_LOOK_AT_HEAD_SMOOTH_SECS: f32 = 0.2;

/// Minimum smoothing time.
pub const MIN_SMOOTH_SECS: f32 = 0.0;

/// Maximum smoothing time.
pub const MAX_SMOOTH_SECS: f32 = 5.0;

// ==========================================================================
// Startup / Layout Defaults
// ==========================================================================

/// Ticks to wait after a content change before asking the host to
/// recompute element sizes.
pub const DEFAULT_LAYOUT_SETTLE_TICKS: u32 = 2;

/// Maximum layout settle ticks.
pub const MAX_LAYOUT_SETTLE_TICKS: u32 = 30;

/// Delay before the viewpoint is first resolved.
pub const DEFAULT_STARTUP_DELAY_SECS: f32 = 0.0;

/// Maximum startup delay.
pub const MAX_STARTUP_DELAY_SECS: f32 = 60.0;

// ==========================================================================
// Message Defaults
// ==========================================================================

/// Text of the notification enqueued at startup when enabled.
pub const WELCOME_MESSAGE: &str = "Welcome to VR Notification System!";

/// Prefix of the auto-numbered debug messages.
pub const DEBUG_MESSAGE_PREFIX: &str = "Message #";

/// Rich-text tag rendering the sub-message at reduced emphasis.
pub const SUB_MESSAGE_EMPHASIS_TAG: &str = "<alpha=#33>";
