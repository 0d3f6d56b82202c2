//! Collision detection module
//!
//! Axis-aligned bounding boxes with strict overlap tests and
//! minimum-translation resolution.
//!
//! # Example
//!
//! ```ignore
//! use voxel_strike_engine::physics::Aabb;
//! use glam::Vec3;
//!
//! let ground = Aabb::new(Vec3::new(-10.0, -1.0, -10.0), Vec3::new(10.0, 0.0, 10.0));
//! let actor = Aabb::from_corner_size(Vec3::new(0.0, -0.2, 0.0), Vec3::ONE);
//!
//! // Push the actor back on top of the ground
//! let correction = actor.penetration(&ground);
//! assert_eq!(correction, Vec3::new(0.0, 0.2, 0.0));
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned box given by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Creates a box from two corners, in any order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box whose minimum corner is `corner`, extending by `size`.
    ///
    /// Voxel models are anchored at their minimum corner, so an actor at
    /// `pos` with model size `s` occupies `from_corner_size(pos, s)`.
    pub fn from_corner_size(corner: Vec3, size: Vec3) -> Self {
        Self::new(corner, corner + size)
    }

    /// Box of extent `size` centered on `center`.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self::new(center - half, center + half)
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Same box moved by `offset`.
    #[inline]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Strict overlap test; boxes that only touch do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Offset that moves `self` out of `other` along the axis of least penetration.
    ///
    /// Returns `Vec3::ZERO` when the boxes do not overlap. The sign points
    /// away from `other`'s center, so a box sunk into the ground gets a
    /// positive Y correction and a box pushed into a ceiling a negative one.
    pub fn penetration(&self, other: &Aabb) -> Vec3 {
        if !self.overlaps(other) {
            return Vec3::ZERO;
        }

        let overlap = self.max.min(other.max) - self.min.max(other.min);
        let delta = self.center() - other.center();

        if overlap.x <= overlap.y && overlap.x <= overlap.z {
            Vec3::new(overlap.x * sign_away(delta.x), 0.0, 0.0)
        } else if overlap.y <= overlap.z {
            Vec3::new(0.0, overlap.y * sign_away(delta.y), 0.0)
        } else {
            Vec3::new(0.0, 0.0, overlap.z * sign_away(delta.z))
        }
    }
}

/// Direction to push along an axis; ties push toward positive.
#[inline]
fn sign_away(delta: f32) -> f32 {
    if delta < 0.0 { -1.0 } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ground() -> Aabb {
        Aabb::new(Vec3::new(-10.0, -1.0, -10.0), Vec3::new(10.0, 0.0, 10.0))
    }

    #[test]
    fn test_new_orders_corners() {
        let aabb = Aabb::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_touching_boxes_do_not_overlap() {
        let actor = Aabb::from_corner_size(Vec3::ZERO, Vec3::ONE);
        assert!(!actor.overlaps(&ground()));
        assert_eq!(actor.penetration(&ground()), Vec3::ZERO);
    }

    #[test]
    fn test_sunk_actor_pushed_up() {
        let actor = Aabb::from_corner_size(Vec3::new(0.0, -0.25, 0.0), Vec3::ONE);
        let correction = actor.penetration(&ground());
        assert_eq!(correction, Vec3::new(0.0, 0.25, 0.0));
    }

    #[test]
    fn test_ceiling_pushes_down() {
        let ceiling = Aabb::new(Vec3::new(-10.0, 3.0, -10.0), Vec3::new(10.0, 4.0, 10.0));
        let actor = Aabb::from_corner_size(Vec3::new(0.0, 2.5, 0.0), Vec3::ONE);
        let correction = actor.penetration(&ceiling);
        assert_eq!(correction, Vec3::new(0.0, -0.5, 0.0));
    }

    #[test]
    fn test_wall_pushes_along_x() {
        let wall = Aabb::new(Vec3::new(2.0, -5.0, -5.0), Vec3::new(3.0, 5.0, 5.0));
        let actor = Aabb::from_corner_size(Vec3::new(1.5, 0.0, 0.0), Vec3::ONE);
        let correction = actor.penetration(&wall);
        assert_eq!(correction, Vec3::new(-0.5, 0.0, 0.0));
    }

    #[test]
    fn test_center_size_and_contains() {
        let aabb = Aabb::from_center_size(Vec3::ZERO, Vec3::splat(2.0));
        assert_eq!(aabb.center(), Vec3::ZERO);
        assert_eq!(aabb.size(), Vec3::splat(2.0));
        assert!(aabb.contains_point(Vec3::new(1.0, 0.0, -1.0)));
        assert!(!aabb.contains_point(Vec3::new(1.1, 0.0, 0.0)));
        assert_eq!(aabb.translated(Vec3::X).center(), Vec3::X);
    }
}
