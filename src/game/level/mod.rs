//! Level Module
//!
//! The level is the player controller's view of the world. It answers
//! synchronous collision queries ([`CollisionOracle`]) while the player
//! moves, and resolves bullet and pickup contacts with side effects on
//! the player and enemies ([`LevelContacts`]).
//!
//! [`VoxelLevel`] is the stock implementation: solid terrain boxes on a
//! drifting island, enemy turrets in an [`ActorArena`] and power-up
//! pickups.

pub mod arena;
pub mod pickup;
pub mod voxel_level;

use glam::Vec3;

use super::audio::AudioSink;
use super::character::Character;
use super::player::Player;

pub use arena::{ActorArena, ActorId};
pub use pickup::{Pickup, PickupKind};
pub use voxel_level::VoxelLevel;

/// Read-only collision queries made during movement.
pub trait CollisionOracle {
    /// Offset that moves `actor` out of any solid geometry it overlaps,
    /// or `Vec3::ZERO` when it is clear.
    fn actor_displacement(&self, actor: &Character) -> Vec3;

    /// True if `actor` has left the playable volume.
    fn out_of_bounds(&self, actor: &Character) -> bool;

    /// Speed at which the ground carries grounded actors toward -Z.
    fn island_speed(&self) -> f32;
}

/// Contact checks run once per frame from the player's state update.
pub trait LevelContacts: CollisionOracle {
    /// Enemy bullets touching the player are consumed and damage it.
    fn check_player_bullet_collision(&mut self, player: &mut Player, now: f32, audio: &mut dyn AudioSink);

    /// Player bullets touching an enemy damage it; bullets that touch an
    /// enemy or terrain are consumed.
    fn check_bullet_enemy_collisions(&mut self, player: &mut Player, now: f32, audio: &mut dyn AudioSink);

    /// Pickups touching the player are consumed and applied.
    fn check_player_pickup_collision(&mut self, player: &mut Player, now: f32);
}
