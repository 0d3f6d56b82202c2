//! Camera Module
//!
//! Provides the camera contract the player controller aims through, plus a
//! simple look-at camera that trails the player.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod raycast;

use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

pub use raycast::{Ray, intersect_ray_plane, screen_ray, unproject};

/// Window-space rectangle the projection maps onto, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Viewport covering a whole window of the given size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Width / height, or 1.0 for a collapsed window.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// Anything that can supply view/projection matrices for unprojecting the cursor.
///
/// Matrices follow glam's right-handed conventions with a 0..1 depth range
/// (`Mat4::look_at_rh` / `Mat4::perspective_rh`).
pub trait CameraProvider {
    fn view_matrix(&self) -> Mat4;
    fn projection_matrix(&self) -> Mat4;
    fn position(&self) -> Vec3;
}

/// Tunables for the follow camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Offset from the followed point to the eye
    pub offset: Vec3,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 22.0, 16.0),
            fov_degrees: 45.0,
            near: 0.1,
            far: 500.0,
        }
    }
}

/// Look-at camera that keeps a fixed offset from a target point.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    offset: Vec3,
}

impl Camera {
    /// Create a camera looking at `target` from `target + config.offset`.
    pub fn new(config: &CameraConfig, target: Vec3, aspect: f32) -> Self {
        Self {
            position: target + config.offset,
            target,
            fov: config.fov_degrees.to_radians(),
            aspect,
            near: config.near,
            far: config.far,
            offset: config.offset,
        }
    }

    /// Re-center on a new target, keeping the configured offset.
    pub fn follow(&mut self, target: Vec3) {
        self.target = target;
        self.position = target + self.offset;
    }

    pub fn offset(&self) -> Vec3 {
        self.offset
    }
}

impl CameraProvider for Camera {
    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}
