//! Box-terrain level with enemies and pickups.

use glam::Vec3;

use super::arena::{ActorArena, ActorId};
use super::pickup::Pickup;
use super::{CollisionOracle, LevelContacts};
use crate::game::audio::AudioSink;
use crate::game::character::{ActorState, Character};
use crate::game::config::{EnemyConfig, LevelConfig};
use crate::game::enemy::Enemy;
use crate::game::error::GameError;
use crate::game::model::ModelRegistry;
use crate::game::player::Player;
use crate::physics::Aabb;

#[derive(Debug, Clone)]
pub struct VoxelLevel {
    terrain: Vec<Aabb>,
    kill_y: f32,
    half_width: f32,
    island_speed: f32,
    enemies: ActorArena<Enemy>,
    pickups: Vec<Pickup>,
}

impl VoxelLevel {
    /// Terrain and pickups from `config`, without enemies.
    pub fn new(config: &LevelConfig) -> Self {
        Self {
            terrain: config.terrain.clone(),
            kill_y: config.kill_y,
            half_width: config.half_width,
            island_speed: config.island_speed,
            enemies: ActorArena::new(),
            pickups: config
                .pickups
                .iter()
                .map(|&p| Pickup::power_up(p, config.pickup_size))
                .collect(),
        }
    }

    /// Full level including the configured enemy spawns.
    pub fn from_config(
        config: &LevelConfig,
        enemy: &EnemyConfig,
        registry: &ModelRegistry,
    ) -> Result<Self, GameError> {
        let mut level = Self::new(config);
        for &spawn in &config.enemy_spawns {
            level.spawn_enemy(Enemy::new(enemy, registry, spawn)?);
        }
        log::info!(
            "level ready: {} terrain blocks, {} enemies, {} pickups",
            level.terrain.len(),
            level.enemies.len(),
            level.pickups.len()
        );
        Ok(level)
    }

    pub fn spawn_enemy(&mut self, enemy: Enemy) -> ActorId {
        let pos = enemy.character.pos;
        let id = self.enemies.insert(enemy);
        log::debug!("spawned enemy {} at {pos:?}", id.raw());
        id
    }

    pub fn add_block(&mut self, block: Aabb) {
        self.terrain.push(block);
    }

    pub fn add_pickup(&mut self, pickup: Pickup) {
        self.pickups.push(pickup);
    }

    pub fn set_island_speed(&mut self, speed: f32) {
        self.island_speed = speed;
    }

    pub fn terrain(&self) -> &[Aabb] {
        &self.terrain
    }

    pub fn enemies(&self) -> &ActorArena<Enemy> {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut ActorArena<Enemy> {
        &mut self.enemies
    }

    pub fn enemy(&self, id: ActorId) -> Result<&Enemy, GameError> {
        self.enemies.try_get(id)
    }

    pub fn pickups(&self) -> &[Pickup] {
        &self.pickups
    }

    /// Scroll the island, run the enemies and drop finished actors.
    pub fn update(&mut self, dt: f32, now: f32, target: Vec3, audio: &mut dyn AudioSink) {
        let scroll = Vec3::new(0.0, 0.0, -self.island_speed * dt);
        if scroll.z != 0.0 {
            for block in &mut self.terrain {
                *block = block.translated(scroll);
            }
            for pickup in &mut self.pickups {
                pickup.position += scroll;
            }
        }

        let terrain = &self.terrain;
        for (_, enemy) in self.enemies.iter_mut() {
            enemy.character.pos += scroll;
            enemy.update(dt, now, target, audio);
            enemy
                .character
                .bullets
                .remove_where(|_, hit_box| terrain.iter().any(|block| hit_box.overlaps(block)));
        }

        self.enemies.retain(|id, enemy| {
            let dead = enemy.character.state() == ActorState::Dead;
            if dead {
                log::debug!("removed enemy {}", id.raw());
            }
            !dead
        });
    }
}

impl CollisionOracle for VoxelLevel {
    fn actor_displacement(&self, actor: &Character) -> Vec3 {
        // Resolve against each block in turn so adjacent blocks do not
        // push the same overlap twice.
        let mut bounds = actor.bounds();
        let mut total = Vec3::ZERO;
        for block in &self.terrain {
            let push = bounds.penetration(block);
            if push != Vec3::ZERO {
                bounds = bounds.translated(push);
                total += push;
            }
        }
        total
    }

    fn out_of_bounds(&self, actor: &Character) -> bool {
        actor.pos.y < self.kill_y || actor.mid_point().x.abs() > self.half_width
    }

    fn island_speed(&self) -> f32 {
        self.island_speed
    }
}

impl LevelContacts for VoxelLevel {
    fn check_player_bullet_collision(&mut self, player: &mut Player, now: f32, audio: &mut dyn AudioSink) {
        if player.character.state() == ActorState::Dead {
            return;
        }
        let player_box = player.character.bounds();
        let mut hits = 0;
        for (_, enemy) in self.enemies.iter_mut() {
            hits += enemy
                .character
                .bullets
                .remove_where(|_, hit_box| hit_box.overlaps(&player_box));
        }
        for _ in 0..hits {
            player.take_damage(now, audio);
        }
    }

    fn check_bullet_enemy_collisions(&mut self, player: &mut Player, now: f32, audio: &mut dyn AudioSink) {
        let terrain = &self.terrain;
        let enemies = &mut self.enemies;
        player.character.bullets.remove_where(|_, hit_box| {
            for (_, enemy) in enemies.iter_mut() {
                if enemy.character.is_alive() && hit_box.overlaps(&enemy.character.bounds()) {
                    enemy.take_damage(now, audio);
                    return true;
                }
            }
            terrain.iter().any(|block| hit_box.overlaps(block))
        });
    }

    fn check_player_pickup_collision(&mut self, player: &mut Player, now: f32) {
        if !player.character.is_alive() {
            return;
        }
        let player_box = player.character.bounds();
        let before = self.pickups.len();
        self.pickups.retain(|pickup| !pickup.bounds().overlaps(&player_box));
        if self.pickups.len() < before {
            player.power_up(now);
        }
    }
}
