//! Render/audio sink used by the simulation
//!
//! The simulation never draws or plays sound itself. It reports lifecycle
//! events to a sink; calls are synchronous and must not touch game state.

use super::geometry::Rect;
use super::player::PlayerSlot;
use super::projectile::ProjectileId;

pub trait RenderSink {
    /// A projectile survived its spawn check and should appear (and play its sound)
    fn render_projectile(&mut self, id: ProjectileId, rect: &Rect);

    /// A projectile is retired. Also called for a projectile that hit on the
    /// spawn tick and was never rendered.
    fn dispose_projectile(&mut self, id: ProjectileId);

    /// A player snapped back to its starting position on round reset
    fn reset_player(&mut self, _slot: PlayerSlot, _rect: &Rect) {}

    /// The wall layout was replaced
    fn replace_walls(&mut self, _walls: &[Rect]) {}
}

/// Sink that ignores every event (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render_projectile(&mut self, _id: ProjectileId, _rect: &Rect) {}

    fn dispose_projectile(&mut self, _id: ProjectileId) {}
}

/// Sink that records every event, in order
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SinkEvent {
    Render { id: ProjectileId, rect: Rect },
    Dispose { id: ProjectileId },
    ResetPlayer { slot: PlayerSlot, rect: Rect },
    ReplaceWalls { walls: Vec<Rect> },
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all recorded events, leaving the log empty
    pub fn drain(&mut self) -> Vec<SinkEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn rendered(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SinkEvent::Render { .. }))
            .count()
    }

    pub fn disposed(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SinkEvent::Dispose { .. }))
            .count()
    }
}

impl RenderSink for RecordingSink {
    fn render_projectile(&mut self, id: ProjectileId, rect: &Rect) {
        self.events.push(SinkEvent::Render { id, rect: *rect });
    }

    fn dispose_projectile(&mut self, id: ProjectileId) {
        self.events.push(SinkEvent::Dispose { id });
    }

    fn reset_player(&mut self, slot: PlayerSlot, rect: &Rect) {
        self.events.push(SinkEvent::ResetPlayer { slot, rect: *rect });
    }

    fn replace_walls(&mut self, walls: &[Rect]) {
        self.events.push(SinkEvent::ReplaceWalls {
            walls: walls.to_vec(),
        });
    }
}
