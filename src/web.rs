//! Browser binding
//!
//! The page owns the DOM (player doodles, wall divs, projectile divs and
//! their sounds). Each animation frame it calls `tick`, then drains the
//! lifecycle events and reads a position snapshot to update the page.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::input::{Controls, KeyBindings};
use crate::settings::{Settings, SettingsError};
use crate::sim::{
    Arena, GameState, ObstacleSet, Player, PlayerSlot, RecordingSink, SinkEvent, TickInput, tick,
};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        // Only fails when a logger is already installed, so this still lands
        log::warn!("console_log not installed: {err}");
    }
}

fn to_js_error(err: SettingsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Positions the page needs to draw a frame
#[derive(Serialize)]
struct Snapshot<'a> {
    round: u32,
    players: &'a [Player; 2],
    walls: &'a ObstacleSet,
}

#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
    controls: [Controls; 2],
    sink: RecordingSink,
}

#[wasm_bindgen]
impl WebGame {
    /// Start a match in a `width` x `height` viewport
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, seed: u64) -> WebGame {
        let settings = Settings::load();
        let mut sink = RecordingSink::new();
        let state = GameState::new(settings, Arena::new(width, height), seed);
        // Let the page draw the first layout
        sink.events.push(SinkEvent::ReplaceWalls {
            walls: state.walls.walls().to_vec(),
        });

        WebGame {
            state,
            controls: [
                Controls::new(KeyBindings::player_one()),
                Controls::new(KeyBindings::player_two()),
            ],
            sink,
        }
    }

    /// Validate, store and apply a JSON settings document. The match restarts
    /// with the new tuning; invalid documents leave the game untouched.
    pub fn set_settings(&mut self, json: &str) -> Result<(), JsValue> {
        let settings = Settings::from_json(json).map_err(to_js_error)?;
        settings.save().map_err(to_js_error)?;
        self.state.restart(settings, &mut self.sink);
        Ok(())
    }

    /// Forward a `keydown` event's key to both players
    pub fn key_down(&mut self, key: &str) {
        for controls in &mut self.controls {
            controls.key_down(key);
        }
    }

    /// Forward a `keyup` event's key to both players
    pub fn key_up(&mut self, key: &str) {
        for controls in &mut self.controls {
            controls.key_up(key);
        }
    }

    /// Drop all held keys (window blur)
    pub fn release_all(&mut self) {
        for controls in &mut self.controls {
            controls.release_all();
        }
    }

    /// Run one frame. Returns true when the round ended this frame.
    pub fn tick(&mut self, width: f32, height: f32) -> bool {
        let now_ms = js_sys::Date::now() as u64;
        let mut input = TickInput::new(Arena::new(width, height), now_ms);
        for (player_input, controls) in input.players.iter_mut().zip(&mut self.controls) {
            *player_input = controls.take_input();
        }

        tick(&mut self.state, &input, &mut self.sink).round_over
    }

    pub fn score(&self, player: u8) -> u32 {
        let slot = if player == 2 {
            PlayerSlot::Two
        } else {
            PlayerSlot::One
        };
        self.state.player(slot).score
    }

    /// Players, projectiles and walls as JSON
    pub fn snapshot(&self) -> String {
        let snapshot = Snapshot {
            round: self.state.round,
            players: &self.state.players,
            walls: &self.state.walls,
        };
        serde_json::to_string(&snapshot).unwrap_or_default()
    }

    /// Render/dispose/reset events since the last call, as JSON
    pub fn drain_events(&mut self) -> String {
        let events = self.sink.drain();
        serde_json::to_string(&events).unwrap_or_default()
    }
}
