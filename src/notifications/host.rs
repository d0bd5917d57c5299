// SPDX-License-Identifier: MPL-2.0
//! Seams to the host engine.
//!
//! The manager never renders anything itself. It reads the viewpoint through
//! [`ViewpointSource`] and pushes every visual change through the surface
//! traits, so a game engine, a test recorder or a headless simulator can sit
//! on the other side.

use std::cell::Cell;
use std::rc::Rc;

use super::placement::SlotTransform;
use crate::domain::{Color, Pose, Vec3};

/// Supplies the tracked viewpoint pose, if one is currently available.
pub trait ViewpointSource {
    fn pose(&self) -> Option<Pose>;
}

/// The slot's container: visibility, scale and placement.
pub trait SlotSurface {
    fn set_visible(&mut self, visible: bool);
    fn set_scale(&mut self, scale: Vec3);
    fn set_transform(&mut self, transform: &SlotTransform);
}

/// The text element inside the slot and its backdrop.
pub trait LabelSurface {
    fn set_text(&mut self, text: &str);
    fn set_message_color(&mut self, color: Color);
    fn set_background_color(&mut self, color: Color);
}

/// Asks the host to recompute element sizes after the label content changed.
pub trait LayoutRefresh {
    fn refresh_layout(&mut self);
}

/// Every output surface the manager writes to.
pub struct SlotBindings {
    pub slot: Box<dyn SlotSurface>,
    pub label: Box<dyn LabelSurface>,
    pub layout: Box<dyn LayoutRefresh>,
}

impl SlotBindings {
    pub fn new(
        slot: impl SlotSurface + 'static,
        label: impl LabelSurface + 'static,
        layout: impl LayoutRefresh + 'static,
    ) -> Self {
        Self {
            slot: Box::new(slot),
            label: Box::new(label),
            layout: Box::new(layout),
        }
    }
}

impl std::fmt::Debug for SlotBindings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotBindings").finish_non_exhaustive()
    }
}

/// For hosts whose layout never needs an explicit refresh.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLayoutRefresh;

impl LayoutRefresh for NoLayoutRefresh {
    fn refresh_layout(&mut self) {}
}

/// A viewpoint that never moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedViewpoint(pub Pose);

impl ViewpointSource for FixedViewpoint {
    fn pose(&self) -> Option<Pose> {
        Some(self.0)
    }
}

/// Viewpoint updated from outside, e.g. by the host's tracking code each frame.
///
/// Clones share the same pose.
#[derive(Debug, Clone, Default)]
pub struct SharedViewpoint(Rc<Cell<Option<Pose>>>);

impl SharedViewpoint {
    #[must_use]
    pub fn new(pose: Option<Pose>) -> Self {
        Self(Rc::new(Cell::new(pose)))
    }

    pub fn set(&self, pose: Pose) {
        self.0.set(Some(pose));
    }

    /// Makes the viewpoint unavailable until the next [`set`](Self::set).
    pub fn clear(&self) {
        self.0.set(None);
    }
}

impl ViewpointSource for SharedViewpoint {
    fn pose(&self) -> Option<Pose> {
        self.0.get()
    }
}

/// Uses `primary` when it has a pose, otherwise `secondary`.
#[derive(Debug, Clone)]
pub struct FallbackViewpoint<P, S> {
    primary: P,
    secondary: S,
}

impl<P: ViewpointSource, S: ViewpointSource> FallbackViewpoint<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: ViewpointSource, S: ViewpointSource> ViewpointSource for FallbackViewpoint<P, S> {
    fn pose(&self) -> Option<Pose> {
        self.primary.pose().or_else(|| self.secondary.pose())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_prefers_primary() {
        let primary = SharedViewpoint::new(Some(Pose::looking_forward(Vec3::ONE)));
        let secondary = FixedViewpoint(Pose::default());
        let source = FallbackViewpoint::new(primary.clone(), secondary);
        assert_eq!(source.pose().map(|p| p.position), Some(Vec3::ONE));

        primary.clear();
        assert_eq!(source.pose().map(|p| p.position), Some(Vec3::ZERO));
    }

    #[test]
    fn fallback_is_empty_when_both_are() {
        let source = FallbackViewpoint::new(SharedViewpoint::default(), SharedViewpoint::default());
        assert!(source.pose().is_none());
    }

    #[test]
    fn shared_viewpoint_clones_observe_updates() {
        let a = SharedViewpoint::default();
        let b = a.clone();
        a.set(Pose::looking_forward(Vec3::UP));
        assert_eq!(b.pose().map(|p| p.position), Some(Vec3::UP));
    }
}
