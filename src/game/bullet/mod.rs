//! Bullet Module
//!
//! Projectiles are owned by the actor that fired them. Each actor keeps a
//! [`BulletPool`]: an insertion-ordered list of live bullets that is
//! appended on fire and pruned on expiry or collision.
//!
//! # Example
//!
//! ```ignore
//! let mut pool = BulletPool::new(BulletConfig::default());
//! pool.fire(muzzle, facing, Vec3::new(1.0, 0.2, 0.6), yaw);
//! pool.advance(dt);
//! pool.update_trails(dt);
//! ```

pub mod trail;

use glam::Vec3;

use crate::game::config::BulletConfig;
use crate::physics::Aabb;

pub use trail::{TrailConfig, TrailGenerator};

/// A single projectile in flight.
#[derive(Debug, Clone)]
pub struct Bullet {
    pub position: Vec3,
    /// Unit travel direction
    pub direction: Vec3,
    pub color: Vec3,
    /// Yaw inherited from the shooter, for orienting the model
    pub yaw_degrees: f32,
    pub scale: f32,
    /// Seconds left before the bullet expires
    pub remaining: f32,
    pub trail: TrailGenerator,
}

impl Bullet {
    /// Move along `direction` and spend `dt` of the lifetime budget.
    pub fn advance(&mut self, dt: f32, speed: f32) {
        self.position += self.direction * speed * dt;
        self.remaining -= dt;
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }
}

/// Live bullets of one actor, oldest first.
#[derive(Debug, Clone)]
pub struct BulletPool {
    config: BulletConfig,
    bullets: Vec<Bullet>,
}

impl BulletPool {
    pub fn new(config: BulletConfig) -> Self {
        Self {
            config,
            bullets: Vec::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &BulletConfig {
        &self.config
    }

    /// Spawn a bullet at `origin` heading along `direction`.
    pub fn fire(&mut self, origin: Vec3, direction: Vec3, color: Vec3, yaw_degrees: f32) {
        self.bullets.push(Bullet {
            position: origin,
            direction: direction.normalize_or_zero(),
            color,
            yaw_degrees,
            scale: self.config.scale,
            remaining: self.config.lifetime,
            trail: TrailGenerator::new(self.config.trail, origin),
        });
    }

    /// Move every bullet and drop the ones whose budget ran out.
    pub fn advance(&mut self, dt: f32) {
        let speed = self.config.speed;
        for bullet in &mut self.bullets {
            bullet.advance(dt, speed);
        }
        self.bullets.retain(|b| !b.is_expired());
    }

    pub fn update_trails(&mut self, dt: f32) {
        for bullet in &mut self.bullets {
            bullet.trail.update(dt, bullet.position);
        }
    }

    /// Collision box of a bullet, centered on its position.
    pub fn hit_box(&self, bullet: &Bullet) -> Aabb {
        bullet_box(bullet, self.config.hit_extent)
    }

    /// Remove every bullet for which `hit` returns true, keeping order.
    /// `hit` receives the bullet and its collision box. Returns how many
    /// were removed.
    pub fn remove_where(&mut self, mut hit: impl FnMut(&Bullet, Aabb) -> bool) -> usize {
        let extent = self.config.hit_extent;
        let before = self.bullets.len();
        self.bullets.retain(|b| !hit(b, bullet_box(b, extent)));
        before - self.bullets.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bullet> {
        self.bullets.iter()
    }

    pub fn len(&self) -> usize {
        self.bullets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty()
    }

    pub fn clear(&mut self) {
        self.bullets.clear();
    }
}

fn bullet_box(bullet: &Bullet, hit_extent: f32) -> Aabb {
    Aabb::from_center_size(bullet.position, Vec3::splat(bullet.scale * hit_extent))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> BulletPool {
        BulletPool::new(BulletConfig::default())
    }

    #[test]
    fn test_full_lifetime_removes_bullet() {
        let mut pool = pool();
        pool.fire(Vec3::ZERO, Vec3::NEG_X, Vec3::ONE, 0.0);
        pool.advance(pool.config().lifetime);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_partial_advance_keeps_bullet() {
        let mut pool = pool();
        pool.fire(Vec3::ZERO, Vec3::NEG_X, Vec3::ONE, 0.0);
        pool.advance(2.0);

        assert_eq!(pool.len(), 1);
        let bullet = pool.iter().next().unwrap();
        assert!((bullet.remaining - 8.0).abs() < 1e-5);
        assert!((bullet.position - Vec3::new(-46.0, 0.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_remove_where_keeps_order() {
        let mut pool = pool();
        for i in 0..4 {
            pool.fire(Vec3::new(i as f32, 0.0, 0.0), Vec3::Z, Vec3::ONE, 0.0);
        }
        let removed = pool.remove_where(|b, _| b.position.x == 1.0);
        assert_eq!(removed, 1);
        let xs: Vec<f32> = pool.iter().map(|b| b.position.x).collect();
        assert_eq!(xs, vec![0.0, 2.0, 3.0]);
    }

    #[test]
    fn test_hit_box_scales_with_bullet() {
        let pool = pool();
        let bullet = Bullet {
            position: Vec3::ONE,
            direction: Vec3::X,
            color: Vec3::ONE,
            yaw_degrees: 0.0,
            scale: 0.5,
            remaining: 1.0,
            trail: TrailGenerator::new(TrailConfig::default(), Vec3::ONE),
        };
        let hit_box = pool.hit_box(&bullet);
        assert!((hit_box.size() - Vec3::splat(0.2)).length() < 1e-6);
        assert!((hit_box.center() - Vec3::ONE).length() < 1e-6);
    }
}
