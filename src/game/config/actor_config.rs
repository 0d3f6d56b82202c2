//! Actor Configuration
//!
//! Tunables for the player and the enemy turrets. Defaults reproduce the
//! hand-tuned feel of the game; times are seconds, speeds units/second.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::game::bullet::TrailConfig;
use crate::game::character::CharacterParams;

/// Projectile tunables for one kind of shooter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    /// Travel speed
    pub speed: f32,
    /// Render scale of the bullet model
    pub scale: f32,
    /// Seconds a bullet lives before expiring
    pub lifetime: f32,
    /// Edge length of the bullet hit box before scaling
    pub hit_extent: f32,
    pub trail: TrailConfig,
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            speed: 23.0,
            scale: 0.5,
            lifetime: 10.0,
            hit_extent: 0.4,
            trail: TrailConfig::default(),
        }
    }
}

/// Player character tunables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Idle animation frames, in order
    pub alive_models: Vec<String>,
    /// Death animation frames, in order
    pub death_models: Vec<String>,
    /// Spawn position (model minimum corner)
    pub spawn: Vec3,
    pub scale: f32,
    pub hp: u32,
    pub speed: f32,
    pub fire_cooldown: f32,
    pub dash_cooldown: f32,
    pub dash_velocity: f32,
    pub model_update_delay: f32,
    /// Animation delay while dying (faster death animation)
    pub dying_model_update_delay: f32,
    /// Red tint time after a hit; also the post-hit invulnerability window
    pub tint_duration: f32,
    pub power_up_duration: f32,
    /// Vertical velocity set by a jump
    pub jump_impulse: f32,
    /// Vertical velocity right after landing; keeps the ground probe pressing down
    pub landing_velocity: f32,
    /// Vertical velocity lost per second while airborne
    pub gravity: f32,
    pub bullet: BulletConfig,
    /// Seed for the bullet color picker; random when absent
    pub rng_seed: Option<u64>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            alive_models: vec!["player_0".into(), "player_1".into()],
            death_models: (0..5).map(|i| format!("player_death{i}")).collect(),
            spawn: Vec3::new(-0.45, 1.0, 0.0),
            scale: 0.1,
            hp: 3,
            speed: 10.0,
            fire_cooldown: 0.6,
            dash_cooldown: 1.0,
            dash_velocity: 25.0,
            model_update_delay: 0.5,
            dying_model_update_delay: 0.2,
            tint_duration: 1.0,
            power_up_duration: 8.0,
            jump_impulse: 1.0,
            landing_velocity: -0.1,
            gravity: 1.0,
            bullet: BulletConfig::default(),
            rng_seed: None,
        }
    }
}

impl PlayerConfig {
    pub fn character_params(&self) -> CharacterParams {
        CharacterParams {
            position: self.spawn,
            scale: self.scale,
            hp: self.hp,
            speed: self.speed,
            fire_cooldown: self.fire_cooldown,
            dash_cooldown: self.dash_cooldown,
            dash_velocity: self.dash_velocity,
            model_update_delay: self.model_update_delay,
            dying_model_update_delay: self.dying_model_update_delay,
            tint_duration: self.tint_duration,
            power_up_duration: self.power_up_duration,
            bullet: self.bullet.clone(),
        }
    }
}

/// Enemy turret tunables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub alive_models: Vec<String>,
    pub death_models: Vec<String>,
    pub scale: f32,
    pub hp: u32,
    pub fire_cooldown: f32,
    /// Turrets only shoot at targets closer than this
    pub range: f32,
    pub model_update_delay: f32,
    pub dying_model_update_delay: f32,
    pub tint_duration: f32,
    pub bullet_color: Vec3,
    pub bullet: BulletConfig,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            alive_models: vec!["enemy_0".into(), "enemy_1".into()],
            death_models: (0..3).map(|i| format!("enemy_death{i}")).collect(),
            scale: 0.1,
            hp: 2,
            fire_cooldown: 1.5,
            range: 25.0,
            model_update_delay: 0.6,
            dying_model_update_delay: 0.2,
            tint_duration: 0.3,
            bullet_color: Vec3::new(1.0, 0.3, 0.1),
            bullet: BulletConfig {
                speed: 12.0,
                lifetime: 4.0,
                ..BulletConfig::default()
            },
        }
    }
}

impl EnemyConfig {
    pub fn character_params(&self, position: Vec3) -> CharacterParams {
        CharacterParams {
            position,
            scale: self.scale,
            hp: self.hp,
            speed: 0.0,
            fire_cooldown: self.fire_cooldown,
            dash_cooldown: 0.0,
            dash_velocity: 0.0,
            model_update_delay: self.model_update_delay,
            dying_model_update_delay: self.dying_model_update_delay,
            tint_duration: self.tint_duration,
            power_up_duration: 0.0,
            bullet: self.bullet.clone(),
        }
    }
}
