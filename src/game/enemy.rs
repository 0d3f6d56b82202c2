//! Enemy turrets
//!
//! Stationary actors built on [`Character`]. A turret turns to face its
//! target, fires on a cooldown while the target is within range, takes
//! damage from player bullets and is removed by the level once its death
//! animation has played out.

use glam::Vec3;

use super::audio::{AudioSink, SoundClip};
use super::character::{
    AnimationStep, Character, DamageOutcome, ModelSet, yaw_towards,
};
use super::config::EnemyConfig;
use super::error::GameError;
use super::model::ModelRegistry;

#[derive(Debug, Clone)]
pub struct Enemy {
    pub character: Character,
    range: f32,
    bullet_color: Vec3,
}

impl Enemy {
    pub fn new(config: &EnemyConfig, registry: &ModelRegistry, position: Vec3) -> Result<Self, GameError> {
        let models = ModelSet::resolve(registry, &config.alive_models, &config.death_models)?;
        Ok(Self {
            character: Character::new(config.character_params(position), models),
            range: config.range,
            bullet_color: config.bullet_color,
        })
    }

    #[inline]
    pub fn range(&self) -> f32 {
        self.range
    }

    pub fn take_damage(&mut self, now: f32, audio: &mut dyn AudioSink) -> DamageOutcome {
        let outcome = self.character.apply_damage(now);
        match outcome {
            DamageOutcome::Ignored => {}
            DamageOutcome::Damaged => audio.play(SoundClip::EnemyDamage),
            DamageOutcome::Killed => {
                audio.play(SoundClip::EnemyDeath);
                log::debug!("enemy at {:?} destroyed", self.character.pos);
            }
        }
        outcome
    }

    /// Per-frame update: animation, status, aiming, firing and bullets.
    pub fn update(&mut self, dt: f32, now: f32, target: Vec3, audio: &mut dyn AudioSink) {
        let character = &mut self.character;
        if character.advance_animation(now) == AnimationStep::DeathFinished {
            log::debug!("enemy at {:?} finished dying", character.pos);
        }
        character.update_status(now);

        if character.is_alive() {
            let center = character.mid_point();
            if let Some(yaw) = yaw_towards(center, target) {
                character.rotate.y = yaw;
            }

            let in_range = center.distance(target) < self.range;
            if in_range && character.fire_cooldown.ready(now) {
                character.fire_cooldown.trigger(now);
                character.fire_bullet(self.bullet_color);
                audio.play(SoundClip::EnemyShoot);
            }
        }

        character.bullets.advance(dt);
        character.bullets.update_trails(dt);
    }
}
