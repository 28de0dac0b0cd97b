//! Projectile entities

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::player::{Direction, PlayerSlot};
use super::sink::RenderSink;

/// Projectile tuning shared by both players
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileSettings {
    /// Maximum live projectiles per player
    pub concurrent_limit: usize,
    /// Minimum time between shots (milliseconds)
    pub cool_down_ms: u64,
    pub width: f32,
    pub height: f32,
    /// Pixels per tick
    pub speed: f32,
}

impl Default for ProjectileSettings {
    fn default() -> Self {
        use crate::consts::*;
        Self {
            concurrent_limit: PROJECTILE_CONCURRENT_LIMIT,
            cool_down_ms: PROJECTILE_COOL_DOWN_MS,
            width: PROJECTILE_WIDTH,
            height: PROJECTILE_HEIGHT,
            speed: PROJECTILE_SPEED,
        }
    }
}

/// Stable handle for a projectile, unique for the whole session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectileId {
    pub owner: PlayerSlot,
    pub seq: u32,
}

/// A projectile in flight. Direction and speed are fixed at spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: ProjectileId,
    pub rect: Rect,
    pub direction: Direction,
    pub speed: f32,
}

impl Projectile {
    pub fn new(id: ProjectileId, rect: Rect, direction: Direction, speed: f32) -> Self {
        Self {
            id,
            rect,
            direction,
            speed,
        }
    }

    /// Displacement per tick
    pub fn velocity(&self) -> Vec2 {
        self.direction.unit() * self.speed
    }

    /// Where the projectile will be after one more tick
    pub fn predicted_rect(&self) -> Rect {
        self.rect.translate(self.velocity())
    }

    /// Release the projectile's render/audio resources.
    ///
    /// Consumes the projectile so it can only ever be disposed once.
    pub fn dispose(self, sink: &mut dyn RenderSink) {
        sink.dispose_projectile(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_follows_direction() {
        let id = ProjectileId {
            owner: PlayerSlot::One,
            seq: 0,
        };
        let rect = Rect::new(50.0, 50.0, 10.0, 10.0);

        let up = Projectile::new(id, rect, Direction::Up, 7.0);
        assert_eq!(up.velocity(), Vec2::new(0.0, -7.0));

        let right = Projectile::new(id, rect, Direction::Right, 7.0);
        assert_eq!(right.predicted_rect(), Rect::new(57.0, 50.0, 10.0, 10.0));
        // Prediction never mutates the current rect
        assert_eq!(right.rect, rect);
    }
}
