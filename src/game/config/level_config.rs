//! Level Configuration
//!
//! Layout of the scrolling island: terrain boxes, enemy and pickup
//! placements, scroll speed and the kill volume.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::physics::Aabb;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Units per second the island drifts toward -Z
    pub island_speed: f32,
    /// Actors whose position drops below this height are out of bounds
    pub kill_y: f32,
    /// Actors further than this from the X origin are out of bounds
    pub half_width: f32,
    /// Solid terrain boxes
    pub terrain: Vec<Aabb>,
    /// Enemy positions (model minimum corner)
    pub enemy_spawns: Vec<Vec3>,
    /// Power-up pickup centers
    pub pickups: Vec<Vec3>,
    pub pickup_size: Vec3,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            island_speed: 2.0,
            kill_y: -10.0,
            half_width: 12.0,
            terrain: vec![
                // Main island slab
                Aabb::new(Vec3::new(-8.0, -1.0, -300.0), Vec3::new(8.0, 0.0, 20.0)),
                // Crates
                Aabb::new(Vec3::new(3.0, 0.0, -10.0), Vec3::new(5.0, 2.0, -8.0)),
                Aabb::new(Vec3::new(-6.0, 0.0, -38.0), Vec3::new(-4.0, 1.5, -36.0)),
                // Raised ledge
                Aabb::new(Vec3::new(-6.0, 2.0, -30.0), Vec3::new(-2.0, 2.5, -26.0)),
            ],
            enemy_spawns: vec![
                Vec3::new(4.0, 0.0, -25.0),
                Vec3::new(-4.0, 0.0, -45.0),
                Vec3::new(0.0, 0.0, -70.0),
            ],
            pickups: vec![Vec3::new(-3.0, 0.5, -15.0), Vec3::new(2.0, 0.5, -60.0)],
            pickup_size: Vec3::splat(0.6),
        }
    }
}

impl LevelConfig {
    /// A flat, static, empty island; handy for tests and sandboxes.
    pub fn flat(half_extent: f32) -> Self {
        Self {
            island_speed: 0.0,
            terrain: vec![Aabb::new(
                Vec3::new(-half_extent, -1.0, -half_extent),
                Vec3::new(half_extent, 0.0, half_extent),
            )],
            enemy_spawns: Vec::new(),
            pickups: Vec::new(),
            half_width: half_extent + 4.0,
            ..Self::default()
        }
    }
}
