//! Per-frame simulation tick
//!
//! One tick: boundary-clamp both players, resolve wall/player overlaps,
//! commit positions, then run the projectile lifecycle. Player movement is
//! always settled first because projectiles spawn from the committed player
//! positions.

use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::collision::resolve;
use super::player::{ActionSet, Direction};
use super::projectiles::{HitReport, move_projectiles};
use super::sink::RenderSink;
use super::state::GameState;

/// One player's controls for a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInput {
    /// Actions currently held
    pub held: ActionSet,
    /// Direction newly pressed since the previous tick, if any
    pub turned: Option<Direction>,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    pub players: [PlayerInput; 2],
    /// Current viewport size
    pub arena: Arena,
    /// Wall clock in milliseconds, used for fire cooldowns
    pub now_ms: u64,
}

impl TickInput {
    pub fn new(arena: Arena, now_ms: u64) -> Self {
        Self {
            players: [PlayerInput::default(); 2],
            arena,
            now_ms,
        }
    }
}

/// Result of one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub hits: HitReport,
    /// The round ended and the state was reset
    pub round_over: bool,
}

/// Move both players one step and commit the resolved positions
pub fn move_players(state: &mut GameState, inputs: &[PlayerInput; 2]) {
    let [p1, p2] = &mut state.players;

    let (p1_predicted, p1_velocity) = state.arena.clamp(&p1.rect, p1.velocity(&inputs[0].held));
    let (p2_predicted, p2_velocity) = state.arena.clamp(&p2.rect, p2.velocity(&inputs[1].held));

    let (p1_push, p2_push) = resolve(
        &p1_predicted,
        &p2_predicted,
        p1_velocity,
        p2_velocity,
        &state.walls,
    );

    p1.rect = p1_predicted.translate(p1_push);
    p2.rect = p2_predicted.translate(p2_push);
}

/// Advance the game by one frame.
///
/// When a projectile lands, the shooter scores and the round is reset before
/// returning. No match winner is decided here.
pub fn tick(state: &mut GameState, input: &TickInput, sink: &mut dyn RenderSink) -> TickOutcome {
    state.time_ticks += 1;
    state.arena = input.arena;

    for (player, controls) in state.players.iter_mut().zip(&input.players) {
        if let Some(direction) = controls.turned {
            player.last_direction = direction;
        }
    }

    move_players(state, &input.players);

    let fire_held = [input.players[0].held.fire, input.players[1].held.fire];
    let hits = move_projectiles(
        &mut state.players,
        fire_held,
        &state.walls,
        &state.arena,
        input.now_ms,
        sink,
    );

    let round_over = hits.any();
    if round_over {
        state.award(&hits);
        state.reset_round(sink);
    }

    TickOutcome { hits, round_over }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::geometry::Rect;
    use crate::sim::layout::ObstacleSet;
    use crate::sim::player::PlayerSlot;
    use crate::sim::sink::{NullSink, RecordingSink};

    const ARENA: Arena = Arena::new(1280.0, 720.0);

    fn open_state() -> GameState {
        GameState::with_walls(Settings::default(), ARENA, 42, ObstacleSet::empty())
    }

    fn hold(held: ActionSet) -> PlayerInput {
        PlayerInput { held, turned: None }
    }

    #[test]
    fn test_boundary_clamp() {
        let mut state = open_state();
        let mut input = TickInput::new(ARENA, 0);
        input.players[0] = hold(ActionSet {
            left: true,
            ..Default::default()
        });

        tick(&mut state, &input, &mut NullSink);
        assert_eq!(state.player(PlayerSlot::One).rect.left, 0.0);
    }

    #[test]
    fn test_wall_blocks_player() {
        let walls = ObstacleSet::new(vec![Rect::new(200.0, 0.0, 10.0, 720.0)]);
        let mut state = GameState::with_walls(Settings::default(), ARENA, 42, walls);
        state.player_mut(PlayerSlot::One).rect = Rect::new(95.0, 50.0, 100.0, 100.0);

        let mut input = TickInput::new(ARENA, 0);
        input.players[0] = hold(ActionSet {
            right: true,
            ..Default::default()
        });

        for _ in 0..10 {
            tick(&mut state, &input, &mut NullSink);
            let rect = state.player(PlayerSlot::One).rect;
            assert!(rect.left <= 100.0);
            assert!(!state.walls.collides(&rect));
        }
    }

    #[test]
    fn test_players_shove_each_other() {
        let mut state = open_state();
        state.player_mut(PlayerSlot::One).rect = Rect::new(400.0, 300.0, 100.0, 100.0);
        state.player_mut(PlayerSlot::Two).rect = Rect::new(505.0, 300.0, 100.0, 100.0);

        let mut input = TickInput::new(ARENA, 0);
        input.players[0] = hold(ActionSet {
            right: true,
            ..Default::default()
        });
        input.players[1] = hold(ActionSet {
            left: true,
            ..Default::default()
        });

        for _ in 0..5 {
            tick(&mut state, &input, &mut NullSink);
        }
        // Equal and opposite pushes hold them in place
        let p1 = state.player(PlayerSlot::One).rect;
        let p2 = state.player(PlayerSlot::Two).rect;
        assert!(p1.left > 395.0 && p1.left < 405.0);
        assert!(p2.left > 495.0 && p2.left < 510.0);
        assert!(p1.left < p2.left);
    }

    #[test]
    fn test_turn_sets_aim() {
        let mut state = open_state();
        let mut input = TickInput::new(ARENA, 0);
        input.players[0].turned = Some(Direction::Down);

        tick(&mut state, &input, &mut NullSink);
        assert_eq!(state.player(PlayerSlot::One).last_direction, Direction::Down);
    }

    #[test]
    fn test_fire_spawns_after_movement() {
        let mut state = open_state();
        let mut sink = RecordingSink::new();
        let mut input = TickInput::new(ARENA, 1_000);
        input.players[0] = hold(ActionSet {
            down: true,
            fire: true,
            ..Default::default()
        });

        tick(&mut state, &input, &mut sink);

        let p1 = state.player(PlayerSlot::One);
        assert_eq!(p1.rect.top, 5.0);
        assert_eq!(p1.projectiles.len(), 1);
        // Spawned from the committed position, not the pre-move one
        assert_eq!(p1.projectiles[0].rect.center(), p1.rect.center());
        assert_eq!(sink.rendered(), 1);
    }

    #[test]
    fn test_round_ending_hit_scores_and_resets() {
        let mut state = open_state();
        let mut sink = RecordingSink::new();

        // Line the players up horizontally, player one aiming right
        state.player_mut(PlayerSlot::Two).rect = Rect::new(400.0, 0.0, 100.0, 100.0);
        let mut input = TickInput::new(ARENA, 0);
        input.players[0] = hold(ActionSet {
            fire: true,
            ..Default::default()
        });

        let mut outcome = TickOutcome::default();
        for frame in 0..200u64 {
            input.now_ms = frame * 16;
            outcome = tick(&mut state, &input, &mut sink);
            if outcome.round_over {
                break;
            }
        }

        assert!(outcome.round_over);
        assert!(outcome.hits.p2_hit);
        assert!(!outcome.hits.p1_hit);
        assert_eq!(state.scores(), [1, 0]);
        assert_eq!(state.round, 1);
        for player in &state.players {
            assert_eq!(player.rect, player.spawn_rect());
            assert!(player.projectiles.is_empty());
        }
        // Every rendered projectile was disposed exactly once
        assert!(sink.rendered() >= 1);
        assert_eq!(sink.rendered(), sink.disposed());
    }

    #[test]
    fn test_projectiles_never_rest_inside_walls() {
        let walls = ObstacleSet::new(vec![Rect::new(300.0, 0.0, 10.0, 720.0)]);
        let mut state = GameState::with_walls(Settings::default(), ARENA, 42, walls);
        let mut input = TickInput::new(ARENA, 0);
        input.players[0] = hold(ActionSet {
            fire: true,
            ..Default::default()
        });

        for frame in 0..120u64 {
            input.now_ms = frame * 16;
            let outcome = tick(&mut state, &input, &mut NullSink);
            assert!(!outcome.round_over);
            for shot in &state.player(PlayerSlot::One).projectiles {
                assert!(!state.walls.collides(&shot.rect));
                assert!(state.arena.contains(&shot.rect));
            }
        }
        assert!(state.player(PlayerSlot::One).projectiles.len() <= 5);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(Settings::default(), ARENA, 99_999);
        let mut b = GameState::new(Settings::default(), ARENA, 99_999);

        let mut input = TickInput::new(ARENA, 0);
        input.players[0] = hold(ActionSet {
            right: true,
            down: true,
            fire: true,
            ..Default::default()
        });
        input.players[1] = hold(ActionSet {
            left: true,
            fire: true,
            ..Default::default()
        });

        for frame in 0..300u64 {
            input.now_ms = frame * 16;
            let oa = tick(&mut a, &input, &mut NullSink);
            let ob = tick(&mut b, &input, &mut NullSink);
            assert_eq!(oa, ob);
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.walls, b.walls);
        assert_eq!(a.players, b.players);
    }
}
