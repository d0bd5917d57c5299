// SPDX-License-Identifier: MPL-2.0
//! Show → hold → hide state machine for the single display slot.

use super::animation::{AnimationStep, ScaleAnimation};
use super::curve::Curve;
use super::host::SlotBindings;
use super::notification::Notification;
use super::placement::SlotTransform;
use super::style::NotificationStyle;
use crate::config::NotificationSettings;
use crate::domain::Vec3;

/// Where the slot is in its display cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecyclePhase {
    #[default]
    Idle,
    /// Growing toward full scale.
    Showing,
    /// Fully shown; the hide animation's delay is running.
    Holding,
    /// Shrinking back to zero.
    Hiding,
}

/// Transition produced by [`DisplayLifecycle::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    HoldStarted,
    HideStarted,
    Hidden,
}

/// Slot state mirrored to the host surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotState {
    pub visible: bool,
    pub scale: Vec3,
    pub transform: SlotTransform,
}

impl Default for SlotState {
    fn default() -> Self {
        Self {
            visible: false,
            scale: Vec3::ZERO,
            transform: SlotTransform::default(),
        }
    }
}

/// Timing parameters of one display cycle.
#[derive(Debug, Clone)]
pub struct LifecycleTiming {
    pub to_show_duration: f32,
    pub to_hide_duration: f32,
    /// Delay of the hide animation, i.e. how long the slot stays fully shown.
    pub hold_duration: f32,
    pub show_curve: Curve,
    pub hide_curve: Curve,
    pub layout_settle_ticks: u32,
}

impl From<&NotificationSettings> for LifecycleTiming {
    fn from(settings: &NotificationSettings) -> Self {
        Self {
            to_show_duration: settings.to_show_duration,
            to_hide_duration: settings.to_hide_duration,
            hold_duration: settings.default_duration,
            show_curve: settings.show_curve.clone(),
            hide_curve: settings.hide_curve.clone(),
            layout_settle_ticks: settings.layout_settle_ticks,
        }
    }
}

/// Drives one notification at a time through its display cycle.
///
/// The slot counts as showing from [`show`](Self::show) until the tick that
/// reports [`LifecycleEvent::Hidden`].
#[derive(Debug)]
pub struct DisplayLifecycle {
    timing: LifecycleTiming,
    phase: LifecyclePhase,
    animation: Option<ScaleAnimation>,
    active: Option<Notification>,
    layout_refresh_in: Option<u32>,
    /// Set by `show`; the tick in the same frame does not count toward the settle delay.
    shown_this_frame: bool,
}

impl DisplayLifecycle {
    #[must_use]
    pub fn new(timing: LifecycleTiming) -> Self {
        Self {
            timing,
            phase: LifecyclePhase::Idle,
            animation: None,
            active: None,
            layout_refresh_in: None,
            shown_this_frame: false,
        }
    }

    #[must_use]
    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == LifecyclePhase::Idle
    }

    #[must_use]
    pub fn is_message_showing(&self) -> bool {
        !self.is_idle()
    }

    #[must_use]
    pub fn active(&self) -> Option<&Notification> {
        self.active.as_ref()
    }

    /// Puts `notification` on the slot and starts growing it.
    ///
    /// The slot is moved to `transform`, made visible at zero scale and the
    /// label gets the text and the style's colors. Must only be called while
    /// idle.
    pub fn show(
        &mut self,
        notification: Notification,
        style: &NotificationStyle,
        transform: SlotTransform,
        slot: &mut SlotState,
        surfaces: &mut SlotBindings,
    ) {
        debug_assert!(self.is_idle(), "show called while {:?}", self.phase);

        surfaces.label.set_background_color(style.background_color);
        surfaces.label.set_message_color(style.message_color);

        slot.transform = transform;
        surfaces.slot.set_transform(&slot.transform);

        slot.visible = true;
        surfaces.slot.set_visible(true);
        slot.scale = Vec3::ZERO;
        surfaces.slot.set_scale(slot.scale);

        surfaces.label.set_text(notification.message());

        if self.timing.layout_settle_ticks == 0 {
            surfaces.layout.refresh_layout();
            self.layout_refresh_in = None;
        } else {
            self.layout_refresh_in = Some(self.timing.layout_settle_ticks);
        }
        self.shown_this_frame = true;

        self.animation = Some(ScaleAnimation::new(
            Vec3::ONE,
            self.timing.to_show_duration,
            0.0,
            self.timing.show_curve.clone(),
        ));
        self.active = Some(notification);
        self.phase = LifecyclePhase::Showing;
    }

    /// Advances the running animation and any pending layout refresh.
    ///
    /// The first call after [`show`](Self::show) is taken to be the frame
    /// that showed; the layout refresh fires `layout_settle_ticks` calls later.
    pub fn tick(
        &mut self,
        dt: f32,
        slot: &mut SlotState,
        surfaces: &mut SlotBindings,
    ) -> Option<LifecycleEvent> {
        let settling = !std::mem::take(&mut self.shown_this_frame);
        if let Some(remaining) = self.layout_refresh_in.filter(|_| settling) {
            if remaining <= 1 {
                self.layout_refresh_in = None;
                surfaces.layout.refresh_layout();
            } else {
                self.layout_refresh_in = Some(remaining - 1);
            }
        }

        let animation = self.animation.as_mut()?;
        let step = animation.tick(dt, &mut slot.scale);
        if matches!(step, AnimationStep::Running | AnimationStep::Finished) {
            surfaces.slot.set_scale(slot.scale);
        }

        match (self.phase, step) {
            (LifecyclePhase::Showing, AnimationStep::Finished) => {
                self.animation = Some(ScaleAnimation::new(
                    Vec3::ZERO,
                    self.timing.to_hide_duration,
                    self.timing.hold_duration,
                    self.timing.hide_curve.clone(),
                ));
                self.phase = LifecyclePhase::Holding;
                Some(LifecycleEvent::HoldStarted)
            }
            (LifecyclePhase::Holding, AnimationStep::Running) => {
                self.phase = LifecyclePhase::Hiding;
                Some(LifecycleEvent::HideStarted)
            }
            // Zero hide duration finishes on the tick the hold ends.
            (LifecyclePhase::Holding | LifecyclePhase::Hiding, AnimationStep::Finished) => {
                self.animation = None;
                self.active = None;
                self.phase = LifecyclePhase::Idle;
                slot.visible = false;
                surfaces.slot.set_visible(false);
                Some(LifecycleEvent::Hidden)
            }
            _ => None,
        }
    }
}
