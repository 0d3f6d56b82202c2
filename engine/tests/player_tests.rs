//! Player Tests - Movement, Combat and State Machine
//!
//! Drives the player controller through its public per-frame API against
//! small hand-built levels.

use glam::{Vec2, Vec3};
use voxel_strike_engine::camera::{Camera, CameraConfig, CameraProvider, Viewport};
use voxel_strike_engine::game::character::{DAMAGE_TINT, NEUTRAL_TINT, POWER_UP_TINT};
use voxel_strike_engine::game::player::BULLET_PALETTE;
use voxel_strike_engine::game::{
    ActorState, AudioLog, Character, CollisionOracle, DamageOutcome, FrameContext, LevelConfig,
    ModelRegistry, Player, PlayerConfig, SoundClip, VoxelLevel,
};
use voxel_strike_engine::input::{InputAction, InputSnapshot, KeyBindings, KeyCode, MouseButton};
use voxel_strike_engine::physics::Aabb;

// ============================================================================
// Test rig
// ============================================================================

struct Rig {
    player: Player,
    level: VoxelLevel,
    camera: Camera,
    bindings: KeyBindings,
    input: InputSnapshot,
    audio: AudioLog,
    viewport: Viewport,
    elapsed: f32,
}

impl Rig {
    fn new(level: LevelConfig) -> Self {
        let config = PlayerConfig {
            spawn: Vec3::new(-0.45, 0.0, -0.45),
            rng_seed: Some(42),
            ..PlayerConfig::default()
        };
        let player = Player::new(&config, &ModelRegistry::with_default_models()).unwrap();
        let camera = Camera::new(&CameraConfig::default(), player.character.mid_point(), 1.0);
        Self {
            player,
            level: VoxelLevel::new(&level),
            camera,
            bindings: KeyBindings::new(),
            input: InputSnapshot::new(),
            audio: AudioLog::new(),
            viewport: Viewport::new(900.0, 900.0),
            elapsed: 0.0,
        }
    }

    /// Player standing on a flat, static floor.
    fn on_floor() -> Self {
        let mut rig = Self::new(LevelConfig::flat(50.0));
        rig.ground();
        rig
    }

    fn ground(&mut self) {
        let c = &mut self.player.character;
        c.pos.y = 0.0;
        c.grounded = true;
        c.vertical_velocity = -0.1;
    }

    fn step(&mut self, dt: f32) {
        self.elapsed += dt;
        let frame = FrameContext {
            dt,
            elapsed: self.elapsed,
            input: &self.input,
            bindings: &self.bindings,
            camera: &self.camera,
            viewport: self.viewport,
        };
        self.player.process_input(&frame, &self.level, &mut self.audio);
        self.player.update_state(&frame, &mut self.level, &mut self.audio);
        self.camera.follow(self.player.character.mid_point());
    }

    /// Input processing only, against any oracle.
    fn step_input<L: CollisionOracle>(&mut self, level: &L, dt: f32) {
        self.elapsed += dt;
        let frame = FrameContext {
            dt,
            elapsed: self.elapsed,
            input: &self.input,
            bindings: &self.bindings,
            camera: &self.camera,
            viewport: self.viewport,
        };
        self.player.process_input(&frame, level, &mut self.audio);
    }
}

/// Floor at y = 0 that pushes sunk actors straight up and scrolls.
struct ScrollingFloor {
    speed: f32,
}

impl CollisionOracle for ScrollingFloor {
    fn actor_displacement(&self, actor: &Character) -> Vec3 {
        if actor.pos.y < 0.0 {
            Vec3::new(0.0, -actor.pos.y, 0.0)
        } else {
            Vec3::ZERO
        }
    }

    fn out_of_bounds(&self, _actor: &Character) -> bool {
        false
    }

    fn island_speed(&self) -> f32 {
        self.speed
    }
}

/// Oracle that only ever answers NaN.
struct BrokenOracle;

impl CollisionOracle for BrokenOracle {
    fn actor_displacement(&self, _actor: &Character) -> Vec3 {
        Vec3::NAN
    }

    fn out_of_bounds(&self, _actor: &Character) -> bool {
        false
    }

    fn island_speed(&self) -> f32 {
        0.0
    }
}

// ============================================================================
// Damage and power-up
// ============================================================================

#[test]
fn test_damage_at_most_once_per_tint_window() {
    let mut rig = Rig::on_floor();
    let audio = &mut rig.audio;
    let player = &mut rig.player;

    assert_eq!(player.take_damage(0.0, audio), DamageOutcome::Damaged);
    assert_eq!(player.take_damage(0.4, audio), DamageOutcome::Ignored);
    assert_eq!(player.take_damage(0.9, audio), DamageOutcome::Ignored);
    assert_eq!(player.character.hp(), 2);
    assert_eq!(player.character.tint(), DAMAGE_TINT);

    assert_eq!(player.take_damage(1.0, audio), DamageOutcome::Damaged);
    assert_eq!(player.character.hp(), 1);
}

#[test]
fn test_three_hits_kill_with_sounds() {
    let mut rig = Rig::on_floor();
    for t in [0.0, 2.0, 4.0] {
        rig.player.take_damage(t, &mut rig.audio);
    }

    assert_eq!(rig.player.state(), ActorState::Dying);
    assert_eq!(rig.player.character.hp(), 0);
    assert_eq!(rig.audio.count(SoundClip::PlayerDamage), 3);
    assert_eq!(rig.audio.count(SoundClip::PlayerDeath), 1);

    // Further hits do nothing
    assert_eq!(rig.player.take_damage(10.0, &mut rig.audio), DamageOutcome::Ignored);
    assert_eq!(rig.player.character.hp(), 0);
    assert_eq!(rig.audio.count(SoundClip::PlayerDeath), 1);
}

#[test]
fn test_dying_player_turns_dead_after_death_animation() {
    let mut rig = Rig::on_floor();
    for t in [-2.0, -1.0, 0.0] {
        rig.player.take_damage(t, &mut rig.audio);
    }
    assert_eq!(rig.player.state(), ActorState::Dying);
    let mut frames = 0;
    while rig.player.state() == ActorState::Dying && frames < 200 {
        rig.step(0.05);
        frames += 1;
    }
    assert_eq!(rig.player.state(), ActorState::Dead);
    // Five death frames at 0.2s each
    assert!(rig.elapsed >= 1.0 - 1e-3 && rig.elapsed <= 1.3, "elapsed {}", rig.elapsed);
}

#[test]
fn test_power_up_blocks_damage_then_expires() {
    let mut rig = Rig::on_floor();
    rig.player.power_up(0.0);
    assert_eq!(rig.player.character.tint(), POWER_UP_TINT);
    assert_eq!(rig.player.character.fire_cooldown.duration(), 0.3);
    assert_eq!(rig.player.take_damage(1.0, &mut rig.audio), DamageOutcome::Ignored);

    for _ in 0..15 {
        rig.step(0.5);
    }
    assert!(rig.player.character.is_powered_up());

    rig.step(0.5);
    assert!(!rig.player.character.is_powered_up());
    assert_eq!(rig.player.character.tint(), NEUTRAL_TINT);
    assert_eq!(rig.player.character.fire_cooldown.duration(), 0.6);
    assert_eq!(rig.player.character.hp(), 3);
}

#[test]
fn test_hit_in_power_up_expiry_frame_is_ignored() {
    let mut rig = Rig::on_floor();
    let expiry = rig.player.config().power_up_duration;
    rig.player.power_up(0.0);

    // Contacts run before the status update, so the hit still sees the power-up
    assert_eq!(rig.player.take_damage(expiry, &mut rig.audio), DamageOutcome::Ignored);
    assert_eq!(rig.player.character.hp(), 3);
    assert!(rig.player.character.update_status(expiry));
    assert!(!rig.player.character.is_powered_up());

    let next = expiry + 1.0 / 60.0;
    assert_eq!(rig.player.take_damage(next, &mut rig.audio), DamageOutcome::Damaged);
    assert_eq!(rig.player.character.hp(), 2);
    assert_eq!(rig.audio.count(SoundClip::PlayerDamage), 1);
}

// ============================================================================
// Fire and bullets
// ============================================================================

#[test]
fn test_fire_respects_cooldown() {
    let mut rig = Rig::on_floor();
    rig.input.set_button(MouseButton::Left, true);

    rig.step(0.25);
    rig.step(0.25);
    assert_eq!(rig.player.character.bullets.len(), 1);

    rig.step(0.25);
    assert_eq!(rig.player.character.bullets.len(), 1);
    rig.step(0.25);
    assert_eq!(rig.player.character.bullets.len(), 2);
    assert_eq!(rig.audio.count(SoundClip::Shoot), 2);
}

#[test]
fn test_bullet_expires_after_lifetime() {
    let mut rig = Rig::on_floor();
    rig.input.set_button(MouseButton::Left, true);
    rig.step(0.5);
    rig.input.set_button(MouseButton::Left, false);

    let bullets = &mut rig.player.character.bullets;
    assert_eq!(bullets.len(), 1);
    let lifetime = bullets.config().lifetime;
    let remaining = bullets.iter().next().unwrap().remaining;
    assert!((remaining - (lifetime - 0.5)).abs() < 1e-5);

    bullets.advance(remaining);
    assert!(bullets.is_empty());
}

#[test]
fn test_bullet_spawns_at_mid_point_along_facing() {
    let mut rig = Rig::on_floor();
    rig.input.set_cursor(450.0, 90.0);
    rig.input.set_button(MouseButton::Left, true);
    let mid = rig.player.character.mid_point();
    rig.step(0.001);

    let bullet = rig.player.character.bullets.iter().next().unwrap();
    assert!(bullet.direction.z < -0.99);
    assert!((bullet.position.y - mid.y).abs() < 0.05);
    assert!(BULLET_PALETTE.contains(&bullet.color));
}

// ============================================================================
// Dash
// ============================================================================

#[test]
fn test_dash_decays_to_exact_zero() {
    let mut rig = Rig::on_floor();
    let dt = 0.05;
    rig.input.set_cursor(100.0, 120.0);
    rig.input.set_button(MouseButton::Right, true);
    rig.step(dt);
    rig.input.set_button(MouseButton::Right, false);
    assert_eq!(rig.audio.count(SoundClip::Dash), 1);

    let start = rig.player.character.dash_direction;
    assert!((start.length() - 1.0).abs() < 1e-4);

    let mut previous = start;
    for _ in 0..40 {
        rig.step(dt);
        let current = rig.player.character.dash_direction;
        for axis in 0..3 {
            let expected = (previous[axis].abs() - 2.0 * dt).max(0.0);
            assert!((current[axis].abs() - expected).abs() < 1e-5);
            assert!(current[axis] * start[axis] >= 0.0, "dash flipped sign");
        }
        previous = current;
    }
    assert_eq!(rig.player.character.dash_direction, Vec3::ZERO);
}

#[test]
fn test_dash_moves_player() {
    let mut rig = Rig::on_floor();
    rig.input.set_cursor(450.0, 90.0);
    rig.input.set_button(MouseButton::Right, true);
    rig.step(0.05);
    rig.input.set_button(MouseButton::Right, false);
    let before = rig.player.character.pos;
    rig.step(0.05);
    assert!(rig.player.character.pos.z < before.z - 1.0);
}

// ============================================================================
// Movement
// ============================================================================

#[test]
fn test_forward_moves_away_from_camera() {
    let mut rig = Rig::on_floor();
    rig.input.handle_key(KeyCode::W, true);
    let start = rig.player.character.pos;
    rig.step(0.1);
    let moved = rig.player.character.pos - start;
    // Forward is measured from the model corner, so it leans slightly off -Z
    assert!(moved.z < -0.99, "moved {moved:?}");
    assert!((moved.length() - 1.0).abs() < 1e-3);
}

#[test]
fn test_strafe_right() {
    let mut rig = Rig::on_floor();
    rig.input.handle_key(KeyCode::D, true);
    let start = rig.player.character.pos;
    rig.step(0.1);
    let moved = rig.player.character.pos - start;
    assert!((moved.x - 1.0).abs() < 1e-3, "moved {moved:?}");
}

#[test]
fn test_remapped_forward_key() {
    let mut rig = Rig::on_floor();
    rig.bindings.set(InputAction::MoveForward, KeyCode::ArrowUp);
    rig.input.handle_key(KeyCode::ArrowUp, true);
    let start = rig.player.character.pos.z;
    rig.step(0.1);
    assert!(rig.player.character.pos.z < start - 0.9);
}

#[test]
fn test_wall_blocks_movement() {
    let mut level = LevelConfig::flat(50.0);
    level.terrain.push(Aabb::new(Vec3::new(-2.0, 0.0, -3.0), Vec3::new(2.0, 2.0, -2.0)));
    let mut rig = Rig::new(level);
    rig.ground();
    rig.input.handle_key(KeyCode::W, true);

    for _ in 0..60 {
        rig.step(1.0 / 60.0);
    }
    let pos = rig.player.character.pos;
    assert!(pos.z > -2.01, "walked through the wall: {pos:?}");
    assert!(pos.z < -1.9);
    assert!(rig.player.character.grounded);
}

#[test]
fn test_grounded_player_rides_the_island() {
    let mut rig = Rig::on_floor();
    let floor = ScrollingFloor { speed: 2.0 };
    let start = rig.player.character.pos;
    rig.step_input(&floor, 0.5);

    assert!(rig.player.character.grounded);
    assert!((rig.player.character.pos.z - (start.z - 1.0)).abs() < 1e-5);
}

#[test]
fn test_airborne_player_is_not_carried() {
    let mut rig = Rig::on_floor();
    rig.player.character.pos.y = 5.0;
    rig.player.character.grounded = false;
    rig.player.character.vertical_velocity = 0.0;
    let floor = ScrollingFloor { speed: 2.0 };
    let start_z = rig.player.character.pos.z;
    rig.step_input(&floor, 0.1);
    assert_eq!(rig.player.character.pos.z, start_z);
}

#[test]
fn test_non_finite_displacement_is_ignored() {
    let mut rig = Rig::on_floor();
    rig.input.handle_key(KeyCode::W, true);
    for _ in 0..10 {
        rig.step_input(&BrokenOracle, 1.0 / 60.0);
    }
    assert!(rig.player.character.pos.is_finite());
    assert!(rig.player.character.vertical_velocity.is_finite());
}

#[test]
fn test_out_of_bounds_kills_immediately() {
    let mut rig = Rig::new(LevelConfig::flat(10.0));
    rig.ground();
    rig.player.character.pos.x = 20.0;
    rig.step(0.016);
    assert_eq!(rig.player.state(), ActorState::Dead);

    // Dead players ignore input
    rig.input.handle_key(KeyCode::W, true);
    let pos = rig.player.character.pos;
    rig.step(0.1);
    assert_eq!(rig.player.character.pos, pos);
}

// ============================================================================
// Vertical movement
// ============================================================================

#[test]
fn test_jump_then_gravity() {
    let mut rig = Rig::on_floor();
    let dt = 0.0625;

    rig.input.handle_key(KeyCode::Space, true);
    rig.step(dt);
    rig.input.handle_key(KeyCode::Space, false);
    assert!(!rig.player.character.grounded);
    assert_eq!(rig.player.character.vertical_velocity, 1.0);
    assert_eq!(rig.audio.count(SoundClip::Jump), 1);

    rig.step(dt);
    assert!(!rig.player.character.grounded);
    assert_eq!(rig.player.character.vertical_velocity, 1.0 - dt);
    assert!(rig.player.character.pos.y > 0.5);
}

#[test]
fn test_falling_player_lands() {
    let mut rig = Rig::new(LevelConfig::flat(50.0));
    rig.player.character.pos.y = 1.0;

    let mut frames = 0;
    while !rig.player.character.grounded && frames < 300 {
        rig.step(1.0 / 60.0);
        frames += 1;
    }
    assert!(rig.player.character.grounded);
    assert_eq!(rig.player.character.vertical_velocity, -0.1);
    assert_eq!(rig.audio.count(SoundClip::Land), 1);
    assert!(rig.player.character.pos.y.abs() < 1e-3);

    // Standing still keeps it grounded
    for _ in 0..30 {
        rig.step(1.0 / 60.0);
    }
    assert!(rig.player.character.grounded);
    assert_eq!(rig.audio.count(SoundClip::Land), 1);
}

#[test]
fn test_walking_off_a_ledge_starts_falling() {
    let mut rig = Rig::new(LevelConfig::flat(1.0));
    rig.ground();
    rig.input.handle_key(KeyCode::D, true);
    for _ in 0..20 {
        rig.step(1.0 / 60.0);
    }
    assert!(!rig.player.character.grounded);
    assert!(rig.player.character.vertical_velocity < -0.1);
}

#[test]
fn test_ceiling_stops_ascent() {
    let mut level = LevelConfig::flat(50.0);
    level.terrain.push(Aabb::new(Vec3::new(-5.0, 2.0, -5.0), Vec3::new(5.0, 3.0, 5.0)));
    let mut rig = Rig::new(level);
    rig.ground();

    rig.input.handle_key(KeyCode::Space, true);
    rig.step(0.05);
    rig.input.handle_key(KeyCode::Space, false);

    let mut hit_ceiling = false;
    for _ in 0..10 {
        rig.step(0.05);
        if !rig.player.character.grounded && rig.player.character.vertical_velocity == 0.0 {
            hit_ceiling = true;
            break;
        }
    }
    assert!(hit_ceiling);
    let top = rig.player.character.bounds().max.y;
    assert!(top <= 2.0 + 1e-4, "head inside the ceiling: {top}");
}

// ============================================================================
// Aim
// ============================================================================

#[test]
fn test_aim_follows_cursor() {
    let mut rig = Rig::on_floor();

    rig.input.set_cursor(850.0, 450.0);
    rig.step(0.01);
    assert!(rig.player.character.facing().x > 0.5);

    rig.input.set_cursor(450.0, 60.0);
    rig.step(0.01);
    assert!(rig.player.character.facing().z < -0.9);

    rig.input.set_cursor(50.0, 450.0);
    rig.step(0.01);
    assert!(rig.player.character.facing().x < -0.5);
}

#[test]
fn test_degenerate_aim_keeps_yaw() {
    let mut rig = Rig::on_floor();
    rig.player.character.rotate.y = 42.0;
    rig.viewport = Viewport::new(0.0, 0.0);
    rig.input.cursor = Vec2::new(10.0, 10.0);
    rig.step(0.01);
    assert_eq!(rig.player.character.yaw(), 42.0);
}

#[test]
fn test_camera_sits_behind_player() {
    let rig = Rig::on_floor();
    // Camera sits behind and above the player
    let eye = rig.camera.position();
    let mid = rig.player.character.mid_point();
    assert!(eye.y > mid.y && eye.z > mid.z);
}
