//! Cursor aiming.

use glam::Vec3;

use super::Player;
use crate::camera::{intersect_ray_plane, screen_ray};
use crate::game::character::yaw_towards;
use crate::game::frame::FrameContext;

/// Yaw (degrees) that points a model centered at `mid_point` at the spot
/// under the cursor on the horizontal plane through `mid_point`.
///
/// Returns `None` for degenerate input: a singular camera, a cursor ray
/// parallel to (or pointing away from) the plane, or a cursor directly
/// over the mid-point.
pub fn aim_yaw(mid_point: Vec3, frame: &FrameContext<'_>) -> Option<f32> {
    let view = frame.camera.view_matrix();
    let projection = frame.camera.projection_matrix();
    let ray = screen_ray(frame.input.cursor, &frame.viewport, view, projection)?;
    let distance = intersect_ray_plane(&ray, mid_point, Vec3::Y)?;
    yaw_towards(mid_point, ray.at(distance))
}

impl Player {
    /// Face the cursor; keeps the previous yaw when the aim is degenerate.
    pub(super) fn rotate_towards_cursor(&mut self, frame: &FrameContext<'_>) {
        match aim_yaw(self.character.mid_point(), frame) {
            Some(yaw) => self.character.rotate.y = yaw,
            None => log::trace!("aim ray degenerate, keeping yaw {}", self.character.yaw()),
        }
    }
}
