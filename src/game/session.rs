//! Game session
//!
//! Owns everything one running game needs and advances it one frame at a
//! time: input → player input processing → player state update → level
//! update → camera follow.
//!
//! # Example
//!
//! ```ignore
//! let registry = ModelRegistry::with_default_models();
//! let mut session = GameSession::with_audio(GameConfig::default(), &registry, AudioLog::new())?;
//!
//! session.input_mut().handle_key(KeyCode::W, true);
//! while session.frame(1.0 / 60.0) == SessionStatus::Running {
//!     renderer.draw(&session.draw_list());
//! }
//! ```

use glam::Vec3;

use super::audio::{AudioSink, SilentAudio};
use super::character::ActorState;
use super::config::GameConfig;
use super::error::GameError;
use super::frame::FrameContext;
use super::level::VoxelLevel;
use super::model::ModelRegistry;
use super::player::Player;
use crate::camera::{Camera, Viewport};
use crate::input::{InputSnapshot, KeyBindings};
use crate::render::{DrawList, ModelDraw, ModelInstance};

/// Outcome of one [`GameSession::frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    /// The player is DEAD; further frames only run the level
    PlayerDead,
}

/// Monotonic simulation clock. Accumulates in f64 and hands out f32
/// timestamps, so long sessions keep sub-frame resolution.
#[derive(Debug, Clone, Copy, Default)]
struct SessionClock {
    seconds: f64,
}

impl SessionClock {
    fn tick(&mut self, dt: f32) -> f32 {
        self.seconds += f64::from(dt);
        self.now()
    }

    fn now(&self) -> f32 {
        self.seconds as f32
    }
}

pub struct GameSession<A: AudioSink = SilentAudio> {
    config: GameConfig,
    player: Player,
    level: VoxelLevel,
    camera: Camera,
    bindings: KeyBindings,
    input: InputSnapshot,
    audio: A,
    viewport: Viewport,
    clock: SessionClock,
    frame_count: u64,
    game_over_logged: bool,
}

impl GameSession<SilentAudio> {
    pub fn new(config: GameConfig, registry: &ModelRegistry) -> Result<Self, GameError> {
        Self::with_audio(config, registry, SilentAudio)
    }
}

impl<A: AudioSink> GameSession<A> {
    pub fn with_audio(config: GameConfig, registry: &ModelRegistry, audio: A) -> Result<Self, GameError> {
        let player = Player::new(&config.player, registry)?;
        let level = VoxelLevel::from_config(&config.level, &config.enemy, registry)?;
        let viewport = Viewport::new(config.window_size[0], config.window_size[1]);
        let camera = Camera::new(
            &config.camera,
            player.character.mid_point(),
            viewport.aspect_ratio(),
        );

        let bindings = config.bindings;

        Ok(Self {
            config,
            player,
            level,
            camera,
            bindings,
            input: InputSnapshot::new(),
            audio,
            viewport,
            clock: SessionClock::default(),
            frame_count: 0,
            game_over_logged: false,
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn input_mut(&mut self) -> &mut InputSnapshot {
        &mut self.input
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn level(&self) -> &VoxelLevel {
        &self.level
    }

    pub fn level_mut(&mut self) -> &mut VoxelLevel {
        &mut self.level
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Seconds of simulated time.
    pub fn elapsed(&self) -> f32 {
        self.clock.now()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    // ========================================================================
    // SIMULATION
    // ========================================================================

    /// Advance the simulation by `dt` seconds.
    pub fn frame(&mut self, dt: f32) -> SessionStatus {
        let now = self.clock.tick(dt);
        self.frame_count += 1;

        let frame = FrameContext {
            dt,
            elapsed: now,
            input: &self.input,
            bindings: &self.bindings,
            camera: &self.camera,
            viewport: self.viewport,
        };
        self.player.process_input(&frame, &self.level, &mut self.audio);
        self.player.update_state(&frame, &mut self.level, &mut self.audio);

        let target = self.player.character.mid_point();
        self.level.update(dt, now, target, &mut self.audio);
        self.camera.follow(target);
        self.input.set_scroll(0.0);

        if self.player.state() != ActorState::Dead {
            return SessionStatus::Running;
        }
        if !self.game_over_logged {
            self.game_over_logged = true;
            log::info!(
                "player dead after {} frames ({:.2}s)",
                self.frame_count,
                now
            );
        }
        SessionStatus::PlayerDead
    }

    // ========================================================================
    // RENDER HAND-OFF
    // ========================================================================

    /// Instance data for everything visible this frame.
    pub fn draw_list(&self) -> DrawList {
        let mut list = DrawList::default();
        self.fill_draw_list(&mut list);
        list
    }

    /// Refill `list` in place, reusing its allocations.
    pub fn fill_draw_list(&self, list: &mut DrawList) {
        list.clear();

        let actors = std::iter::once(&self.player.character)
            .chain(self.level.enemies().iter().map(|(_, e)| &e.character));
        for character in actors {
            list.models.push(ModelDraw {
                model: character.current_model().name().to_string(),
                instance: ModelInstance::new(character.pos, character.yaw(), character.tint(), character.scale),
            });
            for bullet in character.bullets.iter() {
                list.bullets.push(ModelInstance::new(
                    bullet.position,
                    bullet.yaw_degrees,
                    bullet.color,
                    bullet.scale,
                ));
                list.push_trail(bullet.trail.vertices(bullet.color));
            }
        }

        // Pickups share the player's voxel scale
        let scale = self.player.character.scale;
        for pickup in self.level.pickups() {
            list.models.push(ModelDraw {
                model: pickup.kind.model_name().to_string(),
                instance: ModelInstance::new(pickup.bounds().min, 0.0, Vec3::ONE, scale),
            });
        }
    }
}
