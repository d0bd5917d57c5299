// SPDX-License-Identifier: MPL-2.0
//! Keeps the slot in front of a moving viewpoint.

use super::placement::{facing_viewer, target_position, PlacementSettings, SlotTransform};
use crate::domain::geometry::smooth_damp;
use crate::domain::{Pose, Vec3};

/// Outcome of one [`FollowLoop::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowStep {
    /// Loop not running.
    Inactive,
    /// The slot transform was moved.
    Moved,
    /// No pose this frame; transform left as is.
    NoViewpoint,
    /// Nothing is active any more; the loop has exited.
    Stopped,
}

/// Smoothed follow of position and facing.
///
/// Velocities persist across ticks and are reset whenever the loop restarts,
/// so a new run never inherits motion from the previous one.
#[derive(Debug, Clone)]
pub struct FollowLoop {
    position_smooth: f32,
    facing_smooth: f32,
    position_velocity: Vec3,
    facing_velocity: Vec3,
    running: bool,
}

impl FollowLoop {
    #[must_use]
    pub fn new(position_smooth: f32, facing_smooth: f32) -> Self {
        Self {
            position_smooth,
            facing_smooth,
            position_velocity: Vec3::ZERO,
            facing_velocity: Vec3::ZERO,
            running: false,
        }
    }

    /// Returns `false` if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.position_velocity = Vec3::ZERO;
        self.facing_velocity = Vec3::ZERO;
        true
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Moves `transform` one step toward the target for `pose`.
    ///
    /// `active` is whether the polling loop runs or a message is showing;
    /// once it is false the loop exits without touching the transform.
    pub fn tick(
        &mut self,
        dt: f32,
        active: bool,
        pose: Option<&Pose>,
        placement: &PlacementSettings,
        transform: &mut SlotTransform,
    ) -> FollowStep {
        if !self.running {
            return FollowStep::Inactive;
        }
        if !active {
            self.running = false;
            return FollowStep::Stopped;
        }
        let Some(pose) = pose else {
            return FollowStep::NoViewpoint;
        };

        let target = target_position(pose, placement);
        transform.position = smooth_damp(
            transform.position,
            target,
            &mut self.position_velocity,
            self.position_smooth,
            dt,
        );

        let wanted = facing_viewer(transform.position, pose);
        let smoothed = smooth_damp(
            transform.forward,
            wanted,
            &mut self.facing_velocity,
            self.facing_smooth,
            dt,
        )
        .normalized();
        if smoothed != Vec3::ZERO {
            transform.forward = smoothed;
        } else if wanted != Vec3::ZERO {
            transform.forward = wanted;
        }
        FollowStep::Moved
    }
}
