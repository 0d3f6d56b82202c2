//! Fire, dash, damage and power-up for the player.

use glam::Vec3;
use rand::Rng;

use super::Player;
use crate::game::audio::{AudioSink, SoundClip};
use crate::game::character::DamageOutcome;

/// Player bullet colors; one is picked at random per shot.
pub const BULLET_PALETTE: [Vec3; 3] = [
    Vec3::new(1.0, 0.2, 0.6),
    Vec3::new(0.4, 0.8, 1.0),
    Vec3::new(1.0, 1.0, 0.4),
];

impl Player {
    pub(super) fn fire(&mut self, audio: &mut dyn AudioSink) {
        let color = BULLET_PALETTE[self.rng.gen_range(0..BULLET_PALETTE.len())];
        self.character.fire_bullet(color);
        audio.play(SoundClip::Shoot);
    }

    pub(super) fn dash(&mut self, audio: &mut dyn AudioSink) {
        audio.play(SoundClip::Dash);
        self.character.dash_direction = self.character.facing();
    }

    /// Take one hit. Plays the damage sound on every accepted hit and the
    /// death sound on the last one.
    pub fn take_damage(&mut self, now: f32, audio: &mut dyn AudioSink) -> DamageOutcome {
        let outcome = self.character.apply_damage(now);
        match outcome {
            DamageOutcome::Ignored => {}
            DamageOutcome::Damaged => {
                audio.play(SoundClip::PlayerDamage);
                log::debug!("player hit, {} hp left", self.character.hp());
            }
            DamageOutcome::Killed => {
                audio.play(SoundClip::PlayerDamage);
                audio.play(SoundClip::PlayerDeath);
                log::info!("player killed at {:?}", self.character.pos);
            }
        }
        outcome
    }

    pub fn power_up(&mut self, now: f32) {
        self.character.power_up(now);
        log::info!(
            "player powered up, fire cooldown {:.2}s",
            self.character.fire_cooldown.duration()
        );
    }
}
