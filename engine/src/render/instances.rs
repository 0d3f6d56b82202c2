//! GPU-layout instance data for actors, bullets and trails.
//!
//! Layouts are `#[repr(C)]` and `bytemuck::Pod` so a renderer can upload
//! them with `bytemuck::cast_slice` without any per-field copying.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use static_assertions::const_assert_eq;

/// Per-instance transform and tint for one voxel model draw.
///
/// Layout (32 bytes total):
/// - position: vec3<f32> (12 bytes) - World position of the model's minimum corner
/// - yaw_degrees: f32 (4 bytes) - Rotation about +Y
/// - tint: vec3<f32> (12 bytes) - RGB multiplier
/// - scale: f32 (4 bytes) - Uniform scale
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ModelInstance {
    pub position: [f32; 3],
    pub yaw_degrees: f32,
    pub tint: [f32; 3],
    pub scale: f32,
}

const_assert_eq!(std::mem::size_of::<ModelInstance>(), 32);

impl ModelInstance {
    pub fn new(position: Vec3, yaw_degrees: f32, tint: Vec3, scale: f32) -> Self {
        Self {
            position: position.to_array(),
            yaw_degrees,
            tint: tint.to_array(),
            scale,
        }
    }
}

/// One point of a bullet trail ribbon.
///
/// Layout (32 bytes total):
/// - position: vec3<f32> (12 bytes)
/// - alpha: f32 (4 bytes) - 1.0 at the bullet, fading to 0.0 at the tail
/// - color: vec3<f32> (12 bytes)
/// - width: f32 (4 bytes)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct TrailVertex {
    pub position: [f32; 3],
    pub alpha: f32,
    pub color: [f32; 3],
    pub width: f32,
}

const_assert_eq!(std::mem::size_of::<TrailVertex>(), 32);

impl TrailVertex {
    pub fn new(position: Vec3, alpha: f32, color: Vec3, width: f32) -> Self {
        Self {
            position: position.to_array(),
            alpha,
            color: color.to_array(),
            width,
        }
    }
}

/// A model to draw, identified by its registry name.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelDraw {
    pub model: String,
    pub instance: ModelInstance,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    /// Player, enemies and pickups
    pub models: Vec<ModelDraw>,
    /// Bullets of every actor, drawn with the shared bullet cube
    pub bullets: Vec<ModelInstance>,
    /// Trail ribbons, one strip per bullet, separated by `trail_strips`
    pub trail_vertices: Vec<TrailVertex>,
    /// Vertex count of each trail strip in `trail_vertices`
    pub trail_strips: Vec<u32>,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.models.clear();
        self.bullets.clear();
        self.trail_vertices.clear();
        self.trail_strips.clear();
    }

    /// Append one trail strip.
    pub fn push_trail(&mut self, vertices: impl IntoIterator<Item = TrailVertex>) {
        let start = self.trail_vertices.len();
        self.trail_vertices.extend(vertices);
        let count = self.trail_vertices.len() - start;
        if count > 0 {
            self.trail_strips.push(count as u32);
        }
    }

    /// Bullet instances as raw bytes for a vertex buffer upload.
    pub fn bullet_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.bullets)
    }

    /// Trail vertices as raw bytes for a vertex buffer upload.
    pub fn trail_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.trail_vertices)
    }
}
