// SPDX-License-Identifier: MPL-2.0
//! Single-slot notification scheduler for head-tracked displays.
//!
//! Messages are queued first in, first out and shown one at a time on a
//! single display slot that grows in, holds, and shrinks out. While anything
//! is queued or showing, the slot can smoothly follow the viewpoint.
//!
//! # Components
//!
//! - [`notification`] - `Notification` and `Severity`
//! - [`style`] - Severity to color lookup, validated at construction
//! - [`placement`] - Target position and facing from a viewpoint pose
//! - [`curve`] - Easing curves, overshoot allowed
//! - [`animation`] - Delayed, tick-driven scale animation
//! - [`lifecycle`] - Show → hold → hide state machine
//! - [`scheduler`] - FIFO queue and its polling loop
//! - [`follow`] - Smoothed follow of the viewpoint
//! - [`host`] - Traits the host implements, plus stock adapters
//! - [`manager`] - `NotificationManager` wiring everything to one `tick`
//!
//! # Design Considerations
//!
//! - No threads and no timers: every loop is a state machine advanced by
//!   [`NotificationManager::tick`]
//! - Severity only changes colors, never queue order
//! - No cancellation; a shown notification always runs its full cycle

pub mod animation;
pub mod curve;
pub mod follow;
pub mod host;
pub mod lifecycle;
pub mod manager;
pub mod notification;
pub mod placement;
pub mod scheduler;
pub mod style;

pub use animation::{AnimationStep, ScaleAnimation};
pub use curve::{Curve, Keyframe};
pub use follow::{FollowLoop, FollowStep};
pub use host::{
    FallbackViewpoint, FixedViewpoint, LabelSurface, LayoutRefresh, NoLayoutRefresh,
    SharedViewpoint, SlotBindings, SlotSurface, ViewpointSource,
};
pub use lifecycle::{DisplayLifecycle, LifecycleEvent, LifecyclePhase, LifecycleTiming, SlotState};
pub use manager::NotificationManager;
pub use notification::{Notification, Severity};
pub use placement::{
    facing_viewer, target_position, target_transform, PlacementSettings, SlotTransform,
};
pub use scheduler::{NotificationScheduler, PollOutcome};
pub use style::{NotificationStyle, StyleTable};
