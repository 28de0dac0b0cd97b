//! Projectile lifecycle: advance, retire, spawn
//!
//! Existing projectiles of both players move before either player may fire,
//! so a freshly spawned projectile is never tested against projectiles that
//! have not moved yet this tick.

use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::geometry::{Rect, overlaps};
use super::layout::ObstacleSet;
use super::player::{Player, PlayerSlot};
use super::sink::RenderSink;

/// Which players were struck by an opposing projectile this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitReport {
    /// Player one was hit by player two's projectile
    pub p1_hit: bool,
    /// Player two was hit by player one's projectile
    pub p2_hit: bool,
}

impl HitReport {
    pub fn any(&self) -> bool {
        self.p1_hit || self.p2_hit
    }

    pub fn was_hit(&self, slot: PlayerSlot) -> bool {
        match slot {
            PlayerSlot::One => self.p1_hit,
            PlayerSlot::Two => self.p2_hit,
        }
    }
}

/// Move `owner`'s projectiles one tick.
///
/// Returns true as soon as one of them reaches `opponent`; that projectile is
/// disposed and the rest of the pass is skipped (nothing else moves or is
/// retired). Otherwise projectiles whose next position would touch a wall or
/// leave the arena are disposed without moving, and the rest advance.
pub fn advance_projectiles(
    owner: &mut Player,
    opponent: &Rect,
    walls: &ObstacleSet,
    arena: &Arena,
    sink: &mut dyn RenderSink,
) -> bool {
    let mut retired = Vec::new();

    for index in 0..owner.projectiles.len() {
        let predicted = owner.projectiles[index].predicted_rect();

        if overlaps(&predicted, opponent) {
            let projectile = owner.projectiles.remove(index);
            log::debug!("{:?} struck {:?}", projectile.id, owner.slot.opponent());
            projectile.dispose(sink);
            return true;
        }

        if walls.collides(&predicted) || !arena.contains(&predicted) {
            retired.push(index);
        }
    }

    // Back to front so earlier indices stay valid
    for &index in retired.iter().rev() {
        let projectile = owner.projectiles.remove(index);
        log::debug!("{:?} retired", projectile.id);
        projectile.dispose(sink);
    }

    for projectile in &mut owner.projectiles {
        projectile.rect = projectile.predicted_rect();
    }

    false
}

/// Let `owner` fire if its gate is open and fire is held.
///
/// A new projectile that already overlaps `opponent` is a hit: it is
/// disposed without ever being rendered and true is returned. Otherwise it
/// is rendered and kept.
pub fn try_spawn(
    owner: &mut Player,
    opponent: &Rect,
    now_ms: u64,
    fire_held: bool,
    sink: &mut dyn RenderSink,
) -> bool {
    let Some(projectile) = owner.try_fire(now_ms, fire_held) else {
        return false;
    };

    if overlaps(&projectile.rect, opponent) {
        log::debug!("{:?} struck {:?} point-blank", projectile.id, owner.slot.opponent());
        projectile.dispose(sink);
        return true;
    }

    log::debug!("{:?} fired {:?}", projectile.id, projectile.direction);
    sink.render_projectile(projectile.id, &projectile.rect);
    owner.projectiles.push(projectile);
    false
}

/// Run one projectile tick for both players.
///
/// Order: advance player one's projectiles, then player two's, then player
/// one may fire (tested against player two), then player two. A player whose
/// existing projectile already landed this tick does not fire.
pub fn move_projectiles(
    players: &mut [Player; 2],
    fire_held: [bool; 2],
    walls: &ObstacleSet,
    arena: &Arena,
    now_ms: u64,
    sink: &mut dyn RenderSink,
) -> HitReport {
    let [p1, p2] = players;

    let mut p1_scored = advance_projectiles(p1, &p2.rect, walls, arena, sink);
    let mut p2_scored = advance_projectiles(p2, &p1.rect, walls, arena, sink);

    if !p1_scored {
        p1_scored = try_spawn(p1, &p2.rect, now_ms, fire_held[0], sink);
    }
    if !p2_scored {
        p2_scored = try_spawn(p2, &p1.rect, now_ms, fire_held[1], sink);
    }

    HitReport {
        p1_hit: p2_scored,
        p2_hit: p1_scored,
    }
}
