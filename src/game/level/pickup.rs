//! Level pickups.

use glam::Vec3;

use crate::physics::Aabb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupKind {
    /// Calls `power_up()` on the player that touches it
    PowerUp,
}

impl PickupKind {
    /// Registry name of the pickup's model.
    pub fn model_name(self) -> &'static str {
        match self {
            PickupKind::PowerUp => "powerup",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pickup {
    /// Center of the pickup
    pub position: Vec3,
    pub size: Vec3,
    pub kind: PickupKind,
}

impl Pickup {
    pub fn power_up(position: Vec3, size: Vec3) -> Self {
        Self {
            position,
            size,
            kind: PickupKind::PowerUp,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.position, self.size)
    }
}
