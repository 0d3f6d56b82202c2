//! Game Module
//!
//! Game-side simulation built on the engine primitives: characters and
//! their bullets, enemy turrets, the level, the player controller and the
//! session that ties one frame together.

pub mod audio;
pub mod bullet;
pub mod character;
pub mod config;
pub mod enemy;
pub mod error;
pub mod frame;
pub mod level;
pub mod model;
pub mod player;
pub mod session;

pub use audio::{AudioLog, AudioSink, SilentAudio, SoundClip};
pub use bullet::{Bullet, BulletPool, TrailConfig, TrailGenerator};
pub use character::{ActorState, Character, CharacterParams, Cooldown, DamageOutcome};
pub use config::{BulletConfig, EnemyConfig, GameConfig, LevelConfig, PlayerConfig};
pub use enemy::Enemy;
pub use error::GameError;
pub use frame::FrameContext;
pub use level::{ActorArena, ActorId, CollisionOracle, LevelContacts, Pickup, PickupKind, VoxelLevel};
pub use model::{ModelHandle, ModelRegistry, VoxelModel};
pub use player::Player;
pub use session::{GameSession, SessionStatus};
