//! Physics module
//!
//! Collision primitives for the voxel arena. Actors, bullets, pickups and
//! terrain blocks are all treated as axis-aligned boxes; overlap is
//! resolved by pushing the moving box out along the axis of least
//! penetration.
//!
//! # Unit System
//!
//! One unit is one voxel-model unit scaled by the actor's `scale`. Speeds
//! are units per second.

pub mod collision;

pub use collision::Aabb;
