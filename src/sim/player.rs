//! Player entities and their fire control

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::projectile::{Projectile, ProjectileId, ProjectileSettings};
use super::sink::RenderSink;

/// Which of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub const ALL: [PlayerSlot; 2] = [PlayerSlot::One, PlayerSlot::Two];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }

    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }
}

/// Facing / aim direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step in screen space (y grows downward)
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Actions currently held by one player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSet {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl ActionSet {
    pub fn holding(self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

/// A player: hitbox, aim, fire control and owned projectiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub slot: PlayerSlot,
    /// Authoritative hitbox, committed once per tick
    pub rect: Rect,
    /// Pixels per tick per held direction
    pub speed: f32,
    /// Aim for the next shot
    pub last_direction: Direction,
    /// Time of the last open fire gate (None = never fired since reset)
    pub last_fired_at: Option<u64>,
    pub weapon: ProjectileSettings,
    /// Live projectiles, oldest first
    pub projectiles: Vec<Projectile>,
    pub score: u32,
    spawn: Rect,
    spawn_direction: Direction,
    next_seq: u32,
}

impl Player {
    pub fn new(
        slot: PlayerSlot,
        spawn: Rect,
        direction: Direction,
        speed: f32,
        weapon: ProjectileSettings,
    ) -> Self {
        Self {
            slot,
            rect: spawn,
            speed,
            last_direction: direction,
            last_fired_at: None,
            weapon,
            projectiles: Vec::new(),
            score: 0,
            spawn,
            spawn_direction: direction,
            next_seq: 0,
        }
    }

    /// Requested displacement for this tick. Opposing directions cancel.
    pub fn velocity(&self, held: &ActionSet) -> Vec2 {
        Direction::ALL
            .into_iter()
            .filter(|direction| held.holding(*direction))
            .map(|direction| direction.unit() * self.speed)
            .sum()
    }

    /// Starting hitbox for each round
    pub fn spawn_rect(&self) -> Rect {
        self.spawn
    }

    pub fn add_score(&mut self) {
        self.score += 1;
    }

    /// Whether a shot may be taken at `now_ms`
    pub fn fire_gate_open(&self, now_ms: u64) -> bool {
        if self.projectiles.len() >= self.weapon.concurrent_limit {
            return false;
        }
        match self.last_fired_at {
            None => true,
            Some(at) => now_ms.saturating_sub(at) >= self.weapon.cool_down_ms,
        }
    }

    /// Pass the fire gate and, if `fire_held`, build a new projectile.
    ///
    /// An open gate stamps the cooldown even when fire is not held, so a
    /// shot is only available once per cooldown window. The projectile is
    /// centered on the player and aimed along `last_direction`; it is not
    /// added to `projectiles` here.
    pub fn try_fire(&mut self, now_ms: u64, fire_held: bool) -> Option<Projectile> {
        if !self.fire_gate_open(now_ms) {
            return None;
        }

        self.last_fired_at = Some(now_ms);
        if !fire_held {
            return None;
        }

        let id = ProjectileId {
            owner: self.slot,
            seq: self.next_seq,
        };
        self.next_seq = self.next_seq.wrapping_add(1);

        let rect = Rect::centered_on(self.rect.center(), self.weapon.width, self.weapon.height);
        Some(Projectile::new(id, rect, self.last_direction, self.weapon.speed))
    }

    /// Back to the round start: spawn position and direction, no projectiles,
    /// cooldown cleared. Score is kept.
    pub fn reset(&mut self, sink: &mut dyn RenderSink) {
        for projectile in self.projectiles.drain(..) {
            projectile.dispose(sink);
        }
        self.rect = self.spawn;
        self.last_direction = self.spawn_direction;
        self.last_fired_at = None;
        sink.reset_player(self.slot, &self.rect);
    }
}
