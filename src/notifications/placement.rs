// SPDX-License-Identifier: MPL-2.0
//! Where the slot goes relative to the viewpoint.

use crate::domain::{Pose, Vec3};

/// Offset parameters, extracted from the settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementSettings {
    pub distance_from_head: f32,
    pub down_offset: f32,
    /// Use the full look direction, including pitch, for the forward offset.
    pub is_offset_relative: bool,
}

/// World position and facing direction of the slot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlotTransform {
    pub position: Vec3,
    /// Unit direction the slot's front points toward.
    pub forward: Vec3,
}

impl SlotTransform {
    #[must_use]
    pub fn new(position: Vec3, forward: Vec3) -> Self {
        Self { position, forward }
    }
}

/// Target slot position for the given viewpoint pose.
///
/// Without `is_offset_relative` the look direction is projected onto the
/// horizontal plane, so looking up or down does not move the slot vertically.
/// Looking straight up or down in that mode leaves no horizontal component
/// and the slot sits directly below the viewpoint.
#[must_use]
pub fn target_position(pose: &Pose, placement: &PlacementSettings) -> Vec3 {
    let forward = if placement.is_offset_relative {
        pose.forward
    } else {
        pose.forward.flattened().normalized()
    };
    pose.position + forward * placement.distance_from_head - pose.up * placement.down_offset
}

/// Unit direction from `slot_position` toward the viewpoint.
#[must_use]
pub fn facing_viewer(slot_position: Vec3, pose: &Pose) -> Vec3 {
    (pose.position - slot_position).normalized()
}

/// Target position plus the facing the slot has once placed there.
#[must_use]
pub fn target_transform(pose: &Pose, placement: &PlacementSettings) -> SlotTransform {
    let position = target_position(pose, placement);
    SlotTransform::new(position, facing_viewer(position, pose))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn placement(relative: bool) -> PlacementSettings {
        PlacementSettings {
            distance_from_head: 2.0,
            down_offset: 0.5,
            is_offset_relative: relative,
        }
    }

    #[test]
    fn level_viewpoint_places_slot_ahead_and_below() {
        let pose = Pose::looking_forward(Vec3::new(0.0, 1.6, 0.0));
        let pos = target_position(&pose, &placement(false));
        assert_abs_diff_eq!(pos.x, 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(pos.y, 1.1, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(pos.z, 2.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn pitched_viewpoint_is_flattened_unless_relative() {
        let down = Vec3::new(0.0, -1.0, 1.0).normalized();
        let pose = Pose::new(Vec3::ZERO, down, Vec3::UP);

        let world = target_position(&pose, &placement(false));
        assert_abs_diff_eq!(world.y, -0.5, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(world.z, 2.0, epsilon = F32_EPSILON);

        let relative = target_position(&pose, &placement(true));
        assert_abs_diff_eq!(relative.y, -0.5 - 2.0 * down.y.abs(), epsilon = F32_EPSILON);
        assert_abs_diff_eq!(relative.z, 2.0 * down.z, epsilon = F32_EPSILON);
    }

    #[test]
    fn vertical_look_collapses_forward_offset() {
        let pose = Pose::new(Vec3::ZERO, Vec3::UP, Vec3::FORWARD);
        let pos = target_position(&pose, &placement(false));
        assert_abs_diff_eq!(pos.x, 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(pos.y, 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(pos.z, -0.5, epsilon = F32_EPSILON);
    }

    #[test]
    fn target_transform_faces_the_viewpoint() {
        let pose = Pose::looking_forward(Vec3::ZERO);
        let transform = target_transform(&pose, &placement(false));
        let to_viewer = (pose.position - transform.position).normalized();
        assert_abs_diff_eq!(transform.forward.dot(to_viewer), 1.0, epsilon = F32_EPSILON);
        assert!(transform.forward.z < 0.0);
    }
}
