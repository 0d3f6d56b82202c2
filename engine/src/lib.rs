//! Voxel Strike Engine Library
//!
//! Simulation core for a scrolling voxel arena shooter. The engine side
//! holds the window-system-agnostic building blocks (camera math, input
//! snapshots, AABB collision, render hand-off structs); the game side
//! (located in `src/game/`) holds the actors, bullets, level and the
//! player controller state machine.
//!
//! # Modules
//!
//! - [`camera`] - Camera provider contract, look-at camera and cursor unprojection
//! - [`input`] - Per-frame input snapshot and key bindings
//! - [`physics`] - Axis-aligned boxes and overlap resolution
//! - [`render`] - Plain instance data handed to an external renderer
//! - [`game`] - Actors, bullets, level, player controller and session
//!
//! # Example
//!
//! ```ignore
//! use voxel_strike_engine::game::{GameConfig, GameSession, ModelRegistry};
//!
//! let config = GameConfig::default();
//! let registry = ModelRegistry::with_default_models();
//! let mut session = GameSession::new(config, &registry)?;
//!
//! session.input_mut().handle_key(KeyCode::W, true);
//! session.frame(1.0 / 60.0);
//! ```

pub mod camera;
pub mod input;
pub mod physics;
pub mod render;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

pub use camera::{Camera, CameraProvider, Viewport};
pub use input::{InputAction, InputSnapshot, KeyBindings, KeyCode, MouseButton};
pub use physics::Aabb;
pub use render::{DrawList, ModelInstance, TrailVertex};
