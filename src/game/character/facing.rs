//! Yaw helpers.
//!
//! Models face -X at zero yaw; yaw is a rotation about +Y in degrees.

use glam::{Quat, Vec3};

/// Forward axis of an unrotated model.
pub const MODEL_FORWARD: Vec3 = Vec3::NEG_X;

const CROSS_TOLERANCE: f32 = 0.01;

/// Unit facing direction for a yaw in degrees.
pub fn facing_direction(yaw_degrees: f32) -> Vec3 {
    Quat::from_rotation_y(yaw_degrees.to_radians()) * MODEL_FORWARD
}

/// Yaw in degrees that turns the model at `from` to face `to` on the
/// horizontal plane.
///
/// Returns `None` when the two points coincide horizontally.
pub fn yaw_towards(from: Vec3, to: Vec3) -> Option<f32> {
    let mut dir = to - from;
    dir.y = 0.0;
    let dir = dir.normalize_or_zero();
    if dir == Vec3::ZERO {
        return None;
    }

    let mut angle = dir.dot(MODEL_FORWARD).clamp(-1.0, 1.0).acos();
    let axis = dir.cross(MODEL_FORWARD).normalize_or_zero();
    if (axis.y - 1.0).abs() <= CROSS_TOLERANCE {
        angle = -angle;
    }
    Some(angle.to_degrees())
}
