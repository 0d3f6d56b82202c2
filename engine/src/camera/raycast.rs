//! Raycast Module
//!
//! Turns a window-space cursor position into a world-space ray and
//! intersects that ray with planes. Used by the player controller to find
//! the aim point on the horizontal plane through the player's center.

use glam::{Mat4, Vec2, Vec3, Vec4};

use super::Viewport;

const PARALLEL_EPSILON: f32 = 1e-6;

/// A half-line in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction
    pub direction: Vec3,
}

impl Ray {
    #[inline]
    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

/// Map a window-space point back into world space.
///
/// `window` is `(x, y, depth)` with `y` measured from the bottom of the
/// viewport and `depth` in the 0..1 range produced by `Mat4::perspective_rh`.
///
/// # Returns
/// * `Some(Vec3)` - The world-space point
/// * `None` - If the view-projection is singular or the point maps to infinity
pub fn unproject(window: Vec3, view: Mat4, projection: Mat4, viewport: &Viewport) -> Option<Vec3> {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return None;
    }

    let view_proj = projection * view;
    if view_proj.determinant().abs() < f32::EPSILON {
        return None;
    }
    let inverse = view_proj.inverse();

    let ndc = Vec4::new(
        (window.x - viewport.x) / viewport.width * 2.0 - 1.0,
        (window.y - viewport.y) / viewport.height * 2.0 - 1.0,
        window.z,
        1.0,
    );

    let world = inverse * ndc;
    if world.w.abs() < f32::EPSILON {
        return None;
    }
    let point = world.truncate() / world.w;
    point.is_finite().then_some(point)
}

/// Build the world-space ray under a cursor.
///
/// `cursor` is in window coordinates with `y` growing downward (as reported
/// by windowing systems); it is flipped before unprojecting.
pub fn screen_ray(cursor: Vec2, viewport: &Viewport, view: Mat4, projection: Mat4) -> Option<Ray> {
    let window_y = viewport.height - cursor.y;
    let near = unproject(Vec3::new(cursor.x, window_y, 0.0), view, projection, viewport)?;
    let far = unproject(Vec3::new(cursor.x, window_y, 1.0), view, projection, viewport)?;

    let direction = (far - near).normalize_or_zero();
    if direction == Vec3::ZERO {
        return None;
    }
    Some(Ray {
        origin: near,
        direction,
    })
}

/// Distance along `ray` to the plane through `plane_origin` with `plane_normal`.
///
/// # Returns
/// * `Some(t)` - Positive distance to the intersection
/// * `None` - If the ray is parallel to the plane or the plane is behind it
pub fn intersect_ray_plane(ray: &Ray, plane_origin: Vec3, plane_normal: Vec3) -> Option<f32> {
    let denom = ray.direction.dot(plane_normal);
    if denom.abs() <= PARALLEL_EPSILON {
        return None;
    }

    let distance = (plane_origin - ray.origin).dot(plane_normal) / denom;
    (distance > 0.0 && distance.is_finite()).then_some(distance)
}
