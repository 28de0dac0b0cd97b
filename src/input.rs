//! Keyboard-to-action mapping
//!
//! Both players share one keyboard. Each has a `KeyBindings` table and a
//! `Controls` tracker fed with raw key events; the game loop calls
//! `take_input` once per tick.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::sim::{ActionSet, Direction, PlayerInput};

/// Things a player can do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

impl Action {
    /// The aim direction for a movement action
    pub fn direction(self) -> Option<Direction> {
        match self {
            Action::Up => Some(Direction::Up),
            Action::Down => Some(Direction::Down),
            Action::Left => Some(Direction::Left),
            Action::Right => Some(Direction::Right),
            Action::Fire => None,
        }
    }
}

/// Key name (as reported by the browser's `KeyboardEvent.key`) to action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    keys: HashMap<String, Action>,
}

impl KeyBindings {
    pub fn new(bindings: &[(&str, Action)]) -> Self {
        Self {
            keys: bindings
                .iter()
                .map(|(key, action)| (key.to_string(), *action))
                .collect(),
        }
    }

    /// WASD to move, Space to fire
    pub fn player_one() -> Self {
        Self::new(&[
            ("w", Action::Up),
            ("s", Action::Down),
            ("a", Action::Left),
            ("d", Action::Right),
            (" ", Action::Fire),
        ])
    }

    /// Arrow keys to move, Control to fire
    pub fn player_two() -> Self {
        Self::new(&[
            ("ArrowUp", Action::Up),
            ("ArrowDown", Action::Down),
            ("ArrowLeft", Action::Left),
            ("ArrowRight", Action::Right),
            ("Control", Action::Fire),
        ])
    }

    pub fn action(&self, key: &str) -> Option<Action> {
        self.keys.get(key).copied()
    }

    /// A key bound to `action`, if any
    pub fn key_for(&self, action: Action) -> Option<&str> {
        self.keys
            .iter()
            .find(|(_, bound)| **bound == action)
            .map(|(key, _)| key.as_str())
    }
}

/// Held-key state for one player
#[derive(Debug, Clone)]
pub struct Controls {
    bindings: KeyBindings,
    held: ActionSet,
    turned: Option<Direction>,
}

impl Controls {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: ActionSet::default(),
            turned: None,
        }
    }

    /// Handle a key press (auto-repeat included). Returns whether the key is
    /// bound for this player.
    pub fn key_down(&mut self, key: &str) -> bool {
        let Some(action) = self.bindings.action(key) else {
            return false;
        };
        self.set(action, true);
        if let Some(direction) = action.direction() {
            self.turned = Some(direction);
        }
        true
    }

    /// Handle a key release. Returns whether the key is bound for this player.
    pub fn key_up(&mut self, key: &str) -> bool {
        let Some(action) = self.bindings.action(key) else {
            return false;
        };
        self.set(action, false);
        true
    }

    /// Release everything (e.g. the window lost focus)
    pub fn release_all(&mut self) {
        self.held = ActionSet::default();
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Snapshot for the next tick; clears the one-shot direction change
    pub fn take_input(&mut self) -> PlayerInput {
        PlayerInput {
            held: self.held,
            turned: self.turned.take(),
        }
    }

    fn set(&mut self, action: Action, pressed: bool) {
        match action {
            Action::Up => self.held.up = pressed,
            Action::Down => self.held.down = pressed,
            Action::Left => self.held.left = pressed,
            Action::Right => self.held.right = pressed,
            Action::Fire => self.held.fire = pressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings_are_disjoint() {
        let one = KeyBindings::player_one();
        let two = KeyBindings::player_two();
        assert_eq!(one.action("w"), Some(Action::Up));
        assert_eq!(one.action(" "), Some(Action::Fire));
        assert_eq!(one.action("ArrowUp"), None);
        assert_eq!(two.action("Control"), Some(Action::Fire));
        assert_eq!(two.action("d"), None);
        assert_eq!(two.key_for(Action::Left), Some("ArrowLeft"));
    }

    #[test]
    fn test_key_down_up_tracks_held() {
        let mut controls = Controls::new(KeyBindings::player_one());
        assert!(controls.key_down("d"));
        assert!(controls.key_down(" "));
        assert!(!controls.key_down("x"));

        let held = controls.take_input().held;
        assert!(held.right && held.fire);
        assert!(held.holding(Direction::Right));

        controls.key_up("d");
        let held = controls.take_input().held;
        assert!(!held.holding(Direction::Right));
        assert!(held.fire);
    }

    #[test]
    fn test_turn_is_one_shot() {
        let mut controls = Controls::new(KeyBindings::player_two());
        controls.key_down("ArrowUp");
        controls.key_down("ArrowLeft");

        let input = controls.take_input();
        assert_eq!(input.turned, Some(Direction::Left));
        assert!(input.held.up && input.held.left);

        // Still held, but no new turn
        let input = controls.take_input();
        assert_eq!(input.turned, None);
        assert!(input.held.up);
    }

    #[test]
    fn test_fire_does_not_turn() {
        let mut controls = Controls::new(KeyBindings::player_one());
        controls.key_down(" ");
        assert_eq!(controls.take_input().turned, None);
    }

    #[test]
    fn test_release_all() {
        let mut controls = Controls::new(KeyBindings::player_one());
        controls.key_down("w");
        controls.key_down(" ");
        controls.release_all();
        assert_eq!(controls.take_input().held, ActionSet::default());
    }
}
