//! Doodle Duel - A two-player arcade shootout in a shared viewport
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, projectiles, rounds)
//! - `input`: Keyboard-to-action mapping
//! - `settings`: Data-driven game tuning
//! - `web`: Browser binding (wasm32 only)

pub mod input;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{Action, Controls, KeyBindings};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Player movement per tick (pixels)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Player hitbox dimensions
    pub const PLAYER_WIDTH: f32 = 100.0;
    pub const PLAYER_HEIGHT: f32 = 100.0;

    /// Wall thickness for generated layouts
    pub const WALL_WIDTH: f32 = 10.0;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 10.0;
    pub const PROJECTILE_HEIGHT: f32 = 10.0;
    /// Projectile movement per tick (pixels)
    pub const PROJECTILE_SPEED: f32 = 7.0;
    /// Maximum live projectiles per player
    pub const PROJECTILE_CONCURRENT_LIMIT: usize = 5;
    /// Minimum time between shots (milliseconds)
    pub const PROJECTILE_COOL_DOWN_MS: u64 = 100;

    /// Walls keep this many player-steps of slack around the player hitbox
    pub const GAP_STEPS: f32 = 4.0;
}
