//! Config Module
//!
//! Centralized tunables for the player, enemies, level layout and camera.
//! Every field has a default, so a JSON file only needs the values it
//! overrides.
//!
//! # Example
//!
//! ```ignore
//! let config = GameConfig::from_json_str(r#"{ "player": { "hp": 5 } }"#)?;
//! assert_eq!(config.player.hp, 5);
//! assert_eq!(config.player.speed, 10.0);
//! ```

pub mod actor_config;
pub mod level_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::camera::CameraConfig;
use crate::input::KeyBindings;

pub use actor_config::{BulletConfig, EnemyConfig, PlayerConfig};
pub use level_config::LevelConfig;

/// Root configuration for a game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub level: LevelConfig,
    pub camera: CameraConfig,
    pub bindings: KeyBindings,
    /// Window size in pixels used for cursor unprojection
    pub window_size: [f32; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player: PlayerConfig::default(),
            enemy: EnemyConfig::default(),
            level: LevelConfig::default(),
            camera: CameraConfig::default(),
            bindings: KeyBindings::default(),
            window_size: [900.0, 900.0],
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| GameError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
