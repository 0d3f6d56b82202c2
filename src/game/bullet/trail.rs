//! Bullet trail generator.
//!
//! Samples the bullet's head position at a fixed interval and fades each
//! sample out over its lifetime. The renderer draws the samples as one
//! ribbon strip per bullet.

use std::collections::VecDeque;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::render::TrailVertex;

/// Trail tunables shared by all bullets of one shooter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Samples kept per trail
    pub max_points: usize,
    /// Seconds between samples
    pub sample_interval: f32,
    /// Seconds a sample stays visible
    pub point_lifetime: f32,
    /// Ribbon width at the head
    pub width: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            max_points: 12,
            sample_interval: 0.02,
            point_lifetime: 0.25,
            width: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TrailPoint {
    position: Vec3,
    age: f32,
}

/// Fading ribbon behind one bullet.
#[derive(Debug, Clone)]
pub struct TrailGenerator {
    config: TrailConfig,
    points: VecDeque<TrailPoint>,
    since_sample: f32,
}

impl TrailGenerator {
    pub fn new(config: TrailConfig, head: Vec3) -> Self {
        let mut points = VecDeque::with_capacity(config.max_points);
        points.push_front(TrailPoint {
            position: head,
            age: 0.0,
        });
        Self {
            config,
            points,
            since_sample: 0.0,
        }
    }

    /// Age existing samples, drop faded ones and sample `head` when due.
    pub fn update(&mut self, dt: f32, head: Vec3) {
        for point in &mut self.points {
            point.age += dt;
        }
        let lifetime = self.config.point_lifetime;
        self.points.retain(|p| p.age < lifetime);

        self.since_sample += dt;
        if self.since_sample >= self.config.sample_interval {
            self.since_sample = 0.0;
            self.points.push_front(TrailPoint {
                position: head,
                age: 0.0,
            });
            self.points.truncate(self.config.max_points.max(1));
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Ribbon vertices from head to tail, alpha fading with age.
    pub fn vertices(&self, color: Vec3) -> impl Iterator<Item = TrailVertex> + '_ {
        let lifetime = self.config.point_lifetime.max(f32::EPSILON);
        let width = self.config.width;
        self.points.iter().map(move |point| {
            let alpha = (1.0 - point.age / lifetime).clamp(0.0, 1.0);
            TrailVertex::new(point.position, alpha, color, width * alpha)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_accumulate_and_cap() {
        let config = TrailConfig {
            max_points: 4,
            sample_interval: 0.01,
            point_lifetime: 10.0,
            width: 0.1,
        };
        let mut trail = TrailGenerator::new(config, Vec3::ZERO);
        for i in 1..=10 {
            trail.update(0.02, Vec3::new(i as f32, 0.0, 0.0));
        }
        assert_eq!(trail.len(), 4);
        let head = trail.vertices(Vec3::ONE).next().unwrap();
        assert_eq!(head.position, [10.0, 0.0, 0.0]);
    }

    #[test]
    fn test_old_samples_fade_out() {
        let config = TrailConfig {
            sample_interval: 1.0,
            point_lifetime: 0.1,
            ..TrailConfig::default()
        };
        let mut trail = TrailGenerator::new(config, Vec3::ZERO);
        trail.update(0.2, Vec3::X);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_alpha_decreases_toward_tail() {
        let mut trail = TrailGenerator::new(TrailConfig::default(), Vec3::ZERO);
        trail.update(0.05, Vec3::X);
        let alphas: Vec<f32> = trail.vertices(Vec3::ONE).map(|v| v.alpha).collect();
        assert_eq!(alphas.len(), 2);
        assert!(alphas[0] > alphas[1]);
    }
}
