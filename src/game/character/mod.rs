//! Character Module
//!
//! State shared by every damageable, bullet-firing actor: transform, hit
//! points, the ALIVE → DYING → DEAD lifecycle, damage/power-up tinting,
//! model-swap animation and the actor's own bullet pool. The player and
//! the enemy turrets both wrap a [`Character`].
//!
//! All timestamps are seconds on the session's monotonic clock and are
//! passed in explicitly.

pub mod animation;
pub mod cooldown;
pub mod facing;

use glam::Vec3;

use crate::game::bullet::BulletPool;
use crate::game::config::BulletConfig;
use crate::game::model::ModelHandle;
use crate::physics::Aabb;

pub use animation::{Animation, AnimationStep, ModelSet};
pub use cooldown::Cooldown;
pub use facing::{facing_direction, yaw_towards};

// ============================================================================
// TINTS
// ============================================================================

pub const NEUTRAL_TINT: Vec3 = Vec3::ONE;
pub const DAMAGE_TINT: Vec3 = Vec3::new(1.0, 0.0, 0.0);
pub const POWER_UP_TINT: Vec3 = Vec3::new(1.0, 0.8, 0.0);

/// Lifecycle state. Transitions only go forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorState {
    Alive,
    /// Playing the death animation; ignores damage and input
    Dying,
    Dead,
}

/// Result of [`Character::apply_damage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Powered up, inside the post-hit window, or not alive
    Ignored,
    /// Lost one hit point and survived
    Damaged,
    /// Lost the last hit point and started dying
    Killed,
}

/// Construction parameters, produced by the player and enemy configs.
#[derive(Debug, Clone)]
pub struct CharacterParams {
    pub position: Vec3,
    pub scale: f32,
    pub hp: u32,
    pub speed: f32,
    pub fire_cooldown: f32,
    pub dash_cooldown: f32,
    pub dash_velocity: f32,
    pub model_update_delay: f32,
    pub dying_model_update_delay: f32,
    pub tint_duration: f32,
    pub power_up_duration: f32,
    pub bullet: BulletConfig,
}

/// A damageable, moving, bullet-firing actor.
#[derive(Debug, Clone)]
pub struct Character {
    models: ModelSet,
    animation: Animation,

    /// Minimum corner of the scaled model
    pub pos: Vec3,
    /// Euler rotation in degrees; yaw lives in `y`
    pub rotate: Vec3,
    pub scale: f32,

    hp: u32,
    state: ActorState,
    tint: Vec3,
    powered_up: bool,

    pub speed: f32,
    pub vertical_velocity: f32,
    pub grounded: bool,
    /// Zero when not dashing
    pub dash_direction: Vec3,
    pub dash_velocity: f32,

    pub fire_cooldown: Cooldown,
    base_fire_cooldown: f32,
    pub dash_cooldown: Cooldown,
    damage_window: Cooldown,
    power_up_timer: Cooldown,

    pub bullets: BulletPool,
}

impl Character {
    pub fn new(params: CharacterParams, models: ModelSet) -> Self {
        Self {
            models,
            animation: Animation::new(params.model_update_delay, params.dying_model_update_delay),
            pos: params.position,
            rotate: Vec3::ZERO,
            scale: params.scale,
            hp: params.hp,
            state: if params.hp == 0 {
                ActorState::Dead
            } else {
                ActorState::Alive
            },
            tint: NEUTRAL_TINT,
            powered_up: false,
            speed: params.speed,
            vertical_velocity: 0.0,
            grounded: false,
            dash_direction: Vec3::ZERO,
            dash_velocity: params.dash_velocity,
            fire_cooldown: Cooldown::new(params.fire_cooldown),
            base_fire_cooldown: params.fire_cooldown,
            dash_cooldown: Cooldown::new(params.dash_cooldown),
            damage_window: Cooldown::new(params.tint_duration),
            power_up_timer: Cooldown::new(params.power_up_duration),
            bullets: BulletPool::new(params.bullet),
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    #[inline]
    pub fn hp(&self) -> u32 {
        self.hp
    }

    #[inline]
    pub fn state(&self) -> ActorState {
        self.state
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.state == ActorState::Alive
    }

    #[inline]
    pub fn tint(&self) -> Vec3 {
        self.tint
    }

    #[inline]
    pub fn is_powered_up(&self) -> bool {
        self.powered_up
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.rotate.y
    }

    /// Fire cooldown without any power-up applied.
    #[inline]
    pub fn base_fire_cooldown(&self) -> f32 {
        self.base_fire_cooldown
    }

    #[inline]
    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    /// Model list for the current state: alive frames while ALIVE, death
    /// frames while DYING or DEAD.
    pub fn model_list(&self) -> &[ModelHandle] {
        match self.state {
            ActorState::Alive => self.models.alive(),
            ActorState::Dying | ActorState::Dead => self.models.death(),
        }
    }

    /// Model to display this frame.
    pub fn current_model(&self) -> &ModelHandle {
        let list = self.model_list();
        &list[self.animation.index().min(list.len() - 1)]
    }

    /// Center of the scaled model.
    pub fn mid_point(&self) -> Vec3 {
        self.pos + 0.5 * self.scale * self.current_model().size()
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_corner_size(self.pos, self.current_model().size() * self.scale)
    }

    pub fn facing(&self) -> Vec3 {
        facing_direction(self.yaw())
    }

    // ========================================================================
    // STATE MACHINE
    // ========================================================================

    /// Take one hit at time `now`.
    pub fn apply_damage(&mut self, now: f32) -> DamageOutcome {
        if self.powered_up || self.state != ActorState::Alive || !self.damage_window.ready(now) {
            return DamageOutcome::Ignored;
        }

        self.hp = self.hp.saturating_sub(1);
        self.tint = DAMAGE_TINT;
        self.damage_window.trigger(now);

        if self.hp == 0 {
            self.state = ActorState::Dying;
            self.animation.start_dying(now);
            DamageOutcome::Killed
        } else {
            DamageOutcome::Damaged
        }
    }

    /// Start (or refresh) the power-up: gold tint, invulnerability and a
    /// halved fire cooldown. Refreshing does not compound the halving.
    pub fn power_up(&mut self, now: f32) {
        self.powered_up = true;
        self.tint = POWER_UP_TINT;
        self.fire_cooldown.set_duration(self.base_fire_cooldown / 2.0);
        self.power_up_timer.trigger(now);
    }

    /// Tint decay and power-up expiry. Returns true if the power-up ended.
    pub fn update_status(&mut self, now: f32) -> bool {
        if !self.powered_up {
            if self.damage_window.ready(now) {
                self.tint = NEUTRAL_TINT;
            }
            return false;
        }

        if self.power_up_timer.ready(now) {
            self.powered_up = false;
            self.tint = NEUTRAL_TINT;
            self.fire_cooldown.set_duration(self.base_fire_cooldown);
            return true;
        }
        false
    }

    /// Step the model animation. Marks the actor DEAD when its death
    /// animation has played out.
    pub fn advance_animation(&mut self, now: f32) -> AnimationStep {
        if self.state == ActorState::Dead {
            return AnimationStep::Unchanged;
        }
        let frames = self.model_list().len();
        let dying = self.state == ActorState::Dying;
        let step = self.animation.advance(now, frames, dying);
        if step == AnimationStep::DeathFinished {
            self.state = ActorState::Dead;
        }
        step
    }

    /// Skip straight to DEAD (falling off the level).
    pub fn mark_dead(&mut self) {
        self.state = ActorState::Dead;
        self.animation.rewind();
        self.dash_direction = Vec3::ZERO;
    }

    /// Spawn a bullet from the model center along the facing direction.
    pub fn fire_bullet(&mut self, color: Vec3) {
        let origin = self.mid_point();
        let direction = self.facing();
        let yaw = self.yaw();
        self.bullets.fire(origin, direction, color, yaw);
    }
}
