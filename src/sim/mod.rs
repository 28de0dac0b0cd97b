//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per tick, no continuous sweeps
//! - Seeded RNG only
//! - Stable iteration order (player one before player two, projectiles oldest first)
//! - No rendering or platform dependencies (side effects go through `RenderSink`)

pub mod arena;
pub mod collision;
pub mod geometry;
pub mod layout;
pub mod player;
pub mod projectile;
pub mod projectiles;
pub mod sink;
pub mod state;
pub mod tick;

pub use arena::Arena;
pub use collision::{CollisionSource, resolve};
pub use geometry::{Rect, is_smaller, minimum_translation_vector, overlaps};
pub use layout::{LayoutGenerator, ObstacleSet};
pub use player::{ActionSet, Direction, Player, PlayerSlot};
pub use projectile::{Projectile, ProjectileId, ProjectileSettings};
pub use projectiles::{HitReport, advance_projectiles, move_projectiles, try_spawn};
pub use sink::{NullSink, RecordingSink, RenderSink, SinkEvent};
pub use state::GameState;
pub use tick::{PlayerInput, TickInput, TickOutcome, move_players, tick};
