//! Player movement: camera-relative walking, dash, island carry and the
//! jump / ground-probe / gravity cycle.
//!
//! Every positional step is followed by a collision query, and only the
//! component of the correction along the axis just moved is applied.

use glam::Vec3;

use super::Player;
use crate::game::audio::{AudioSink, SoundClip};
use crate::game::character::Character;
use crate::game::frame::FrameContext;
use crate::game::level::CollisionOracle;
use crate::input::InputAction;

/// Shrink each component's magnitude by `2 * dt`, clamping at zero and
/// keeping its sign.
pub fn decay_dash(direction: Vec3, dt: f32) -> Vec3 {
    let step = 2.0 * dt;
    let decay = |c: f32| {
        let magnitude = c.abs() - step;
        if magnitude <= 0.0 { 0.0 } else { magnitude.copysign(c) }
    };
    Vec3::new(decay(direction.x), decay(direction.y), decay(direction.z))
}

/// Collision correction with non-finite results discarded.
fn displacement<L: CollisionOracle + ?Sized>(level: &L, actor: &Character) -> Vec3 {
    let d = level.actor_displacement(actor);
    if d.is_finite() {
        d
    } else {
        log::warn!("ignoring non-finite collision displacement {d:?}");
        Vec3::ZERO
    }
}

impl Player {
    pub(super) fn move_horizontal<L>(&mut self, frame: &FrameContext<'_>, level: &L)
    where
        L: CollisionOracle + ?Sized,
    {
        let dt = frame.dt;
        let c = &mut self.character;

        let mut fb = frame.camera.position() - c.pos;
        fb.y = 0.0;
        let fb = fb.normalize_or_zero();
        let lr = Vec3::Y.cross(fb).normalize_or_zero();

        let step = c.speed * dt;
        let mut movement = Vec3::ZERO;
        if frame.action(InputAction::MoveForward) {
            movement -= step * fb;
        }
        if frame.action(InputAction::MoveLeft) {
            movement -= step * lr;
        }
        if frame.action(InputAction::MoveBack) {
            movement += step * fb;
        }
        if frame.action(InputAction::MoveRight) {
            movement += step * lr;
        }

        c.pos.z += movement.z;
        let d = displacement(level, c);
        c.pos.z += d.z;

        c.pos.x += movement.x;
        let d = displacement(level, c);
        c.pos.x += d.x;

        if c.dash_direction != Vec3::ZERO {
            c.pos += c.dash_velocity * c.dash_direction * dt;
            c.dash_direction = decay_dash(c.dash_direction, dt);
        }

        if c.grounded {
            c.pos.z -= level.island_speed() * dt;
        }

        if level.out_of_bounds(c) {
            log::info!("player left the level at {:?}", c.pos);
            c.mark_dead();
        }
    }

    pub(super) fn move_vertical<L>(&mut self, frame: &FrameContext<'_>, level: &L, audio: &mut dyn AudioSink)
    where
        L: CollisionOracle + ?Sized,
    {
        let dt = frame.dt;
        let jump_impulse = self.config.jump_impulse;
        let landing_velocity = self.config.landing_velocity;
        let gravity = self.config.gravity;
        let c = &mut self.character;

        if c.grounded {
            if frame.action(InputAction::Jump) {
                audio.play(SoundClip::Jump);
                c.grounded = false;
                c.vertical_velocity = jump_impulse;
                return;
            }

            // Probe downward; no upward push back means no ground
            c.pos.y += c.speed * dt * c.vertical_velocity;
            let d = displacement(level, c);
            c.pos.y += d.y;
            if d.y <= 0.0 {
                c.grounded = false;
            }
        }

        if !c.grounded {
            c.pos.y += c.speed * dt * c.vertical_velocity;
            c.vertical_velocity -= gravity * dt;
            let d = displacement(level, c);
            c.pos.y += d.y;

            if d.y > 0.0 {
                audio.play(SoundClip::Land);
                c.grounded = true;
                c.vertical_velocity = landing_velocity;
            } else if d.y < 0.0 {
                c.vertical_velocity = 0.0;
            }
        }
    }
}
