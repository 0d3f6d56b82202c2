//! Player Module
//!
//! The player controller: a [`Character`] driven by the per-frame input
//! snapshot and by collision feedback from the level.
//!
//! Each frame runs in two phases:
//!
//! 1. [`Player::process_input`] - horizontal movement and dash, vertical
//!    movement (jump, ground probe, gravity, landing), aim rotation, fire
//!    and dash triggers.
//! 2. [`Player::update_state`] - animation, bullet advance, level contact
//!    checks, trails, tint decay and power-up expiry.
//!
//! # Example
//!
//! ```ignore
//! let mut player = Player::new(&config.player, &registry)?;
//! let frame = FrameContext { dt, elapsed, input: &input, bindings: &bindings, camera: &camera, viewport };
//! player.process_input(&frame, &level, &mut audio);
//! player.update_state(&frame, &mut level, &mut audio);
//! ```

mod aim;
mod combat;
mod movement;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::audio::AudioSink;
use super::character::{ActorState, AnimationStep, Character, ModelSet};
use super::config::PlayerConfig;
use super::error::GameError;
use super::frame::FrameContext;
use super::level::{CollisionOracle, LevelContacts};
use super::model::ModelRegistry;

pub use aim::aim_yaw;
pub use combat::BULLET_PALETTE;
pub use movement::decay_dash;

#[derive(Debug, Clone)]
pub struct Player {
    pub character: Character,
    config: PlayerConfig,
    rng: StdRng,
}

impl Player {
    /// Build the player at its configured spawn point.
    ///
    /// Fails if any configured model is missing from `registry`.
    pub fn new(config: &PlayerConfig, registry: &ModelRegistry) -> Result<Self, GameError> {
        let models = ModelSet::resolve(registry, &config.alive_models, &config.death_models)?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            character: Character::new(config.character_params(), models),
            config: config.clone(),
            rng,
        })
    }

    #[inline]
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> ActorState {
        self.character.state()
    }

    /// Movement, vertical physics, aim, fire and dash for one frame.
    pub fn process_input<L>(&mut self, frame: &FrameContext<'_>, level: &L, audio: &mut dyn AudioSink)
    where
        L: CollisionOracle + ?Sized,
    {
        if self.character.state() == ActorState::Dead {
            return;
        }

        self.move_horizontal(frame, level);
        if self.character.state() == ActorState::Dead {
            return;
        }
        self.move_vertical(frame, level, audio);
        self.rotate_towards_cursor(frame);

        if frame.input.fire_held() && self.character.fire_cooldown.ready(frame.elapsed) {
            self.character.fire_cooldown.trigger(frame.elapsed);
            self.fire(audio);
        }
        if frame.input.dash_held() && self.character.dash_cooldown.ready(frame.elapsed) {
            self.character.dash_cooldown.trigger(frame.elapsed);
            self.dash(audio);
        }
    }

    /// Animation, bullets, level contacts and status timers for one frame.
    ///
    /// Power-up expiry is checked after the contact checks, so a hit in
    /// the frame the power-up runs out is still blocked.
    pub fn update_state<L>(&mut self, frame: &FrameContext<'_>, level: &mut L, audio: &mut dyn AudioSink)
    where
        L: LevelContacts + ?Sized,
    {
        if self.character.state() == ActorState::Dead {
            return;
        }
        let now = frame.elapsed;

        if self.character.advance_animation(now) == AnimationStep::DeathFinished {
            log::info!("player death animation finished");
        }

        self.character.bullets.advance(frame.dt);

        level.check_player_bullet_collision(self, now, audio);
        level.check_bullet_enemy_collisions(self, now, audio);
        level.check_player_pickup_collision(self, now);

        self.character.bullets.update_trails(frame.dt);

        if self.character.update_status(now) {
            log::debug!(
                "power-up expired, fire cooldown back to {:.2}s",
                self.character.fire_cooldown.duration()
            );
        }
    }
}
