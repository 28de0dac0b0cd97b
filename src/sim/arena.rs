//! Arena bounds (the shared viewport)

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;

/// Viewport extent; the arena always starts at (0, 0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when `rect` lies fully inside the arena (edges may touch)
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.left >= 0.0
            && rect.top >= 0.0
            && rect.right() <= self.width
            && rect.bottom() <= self.height
    }

    /// Predict `rect` moved by `velocity`, snapping to any arena edge it would
    /// cross.
    ///
    /// Each axis that hits an edge is pinned to it and its velocity component
    /// is zeroed, so the returned rect never partially overlaps the boundary.
    pub fn clamp(&self, rect: &Rect, velocity: Vec2) -> (Rect, Vec2) {
        let mut velocity = velocity;
        let mut left = rect.left + velocity.x;
        let mut top = rect.top + velocity.y;

        if left < 0.0 {
            left = 0.0;
            velocity.x = 0.0;
        }
        if left + rect.width > self.width {
            left = self.width - rect.width;
            velocity.x = 0.0;
        }
        if top < 0.0 {
            top = 0.0;
            velocity.y = 0.0;
        }
        if top + rect.height > self.height {
            top = self.height - rect.height;
            velocity.y = 0.0;
        }

        (rect.with_origin(left, top), velocity)
    }
}
