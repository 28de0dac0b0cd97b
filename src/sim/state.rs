//! Game session state
//!
//! Everything the tick driver mutates lives here, owned by whoever runs the
//! game loop. There is no global state.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::arena::Arena;
use super::geometry::Rect;
use super::layout::{LayoutGenerator, ObstacleSet};
use super::player::{Direction, Player, PlayerSlot};
use super::projectiles::HitReport;
use super::sink::RenderSink;
use crate::settings::Settings;

/// Complete state of a two-player match
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    /// Seed for wall layouts
    pub seed: u64,
    /// Viewport size as of the last tick
    pub arena: Arena,
    pub players: [Player; 2],
    /// Walls for the current round
    pub walls: ObstacleSet,
    /// Rounds finished so far
    pub round: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    layout: LayoutGenerator,
    rng: Pcg32,
}

impl GameState {
    /// New match with a generated wall layout
    pub fn new(settings: Settings, arena: Arena, seed: u64) -> Self {
        let layout = LayoutGenerator::from_settings(&settings);
        let mut rng = Pcg32::seed_from_u64(seed);
        let walls = layout.generate(&arena, &mut rng);
        Self::assemble(settings, arena, seed, walls, layout, rng)
    }

    /// New match starting on a fixed wall layout. Later rounds are generated.
    pub fn with_walls(settings: Settings, arena: Arena, seed: u64, walls: ObstacleSet) -> Self {
        let layout = LayoutGenerator::from_settings(&settings);
        let rng = Pcg32::seed_from_u64(seed);
        Self::assemble(settings, arena, seed, walls, layout, rng)
    }

    fn assemble(
        settings: Settings,
        arena: Arena,
        seed: u64,
        walls: ObstacleSet,
        layout: LayoutGenerator,
        rng: Pcg32,
    ) -> Self {
        let size = &settings.player;
        // Opposite corners, facing each other
        let p1 = Player::new(
            PlayerSlot::One,
            Rect::new(0.0, 0.0, size.width, size.height),
            Direction::Right,
            size.speed,
            settings.projectile,
        );
        let p2 = Player::new(
            PlayerSlot::Two,
            Rect::new(
                arena.width - size.width,
                arena.height - size.height,
                size.width,
                size.height,
            ),
            Direction::Left,
            size.speed,
            settings.projectile,
        );

        log::info!(
            "New match: arena {}x{}, seed {}, {} walls",
            arena.width,
            arena.height,
            seed,
            walls.len()
        );

        Self {
            settings,
            seed,
            arena,
            players: [p1, p2],
            walls,
            round: 0,
            time_ticks: 0,
            layout,
            rng,
        }
    }

    pub fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.index()]
    }

    pub fn player_mut(&mut self, slot: PlayerSlot) -> &mut Player {
        &mut self.players[slot.index()]
    }

    pub fn scores(&self) -> [u32; 2] {
        [self.players[0].score, self.players[1].score]
    }

    /// Credit the shooter of a hit. If both players were hit in the same
    /// tick only player one scores.
    pub fn award(&mut self, hits: &HitReport) {
        let shooter = PlayerSlot::ALL
            .into_iter()
            .find(|slot| hits.was_hit(slot.opponent()));
        if let Some(slot) = shooter {
            self.player_mut(slot).add_score();
        }
    }

    /// Start over with new settings in the same arena and seed. Live
    /// projectiles are disposed and scores are cleared.
    pub fn restart(&mut self, settings: Settings, sink: &mut dyn RenderSink) {
        for player in &mut self.players {
            for projectile in player.projectiles.drain(..) {
                projectile.dispose(sink);
            }
        }

        *self = Self::new(settings, self.arena, self.seed);
        sink.replace_walls(self.walls.walls());
    }

    /// Swap in a new wall layout
    pub fn replace_walls(&mut self, walls: ObstacleSet, sink: &mut dyn RenderSink) {
        self.walls = walls;
        sink.replace_walls(self.walls.walls());
    }

    /// End the current round: new walls, players back at their spawns, all
    /// projectiles gone. Scores carry over.
    ///
    /// Only call between ticks.
    pub fn reset_round(&mut self, sink: &mut dyn RenderSink) {
        let walls = self.layout.generate(&self.arena, &mut self.rng);
        if walls.is_empty() {
            log::info!("Round {} has an open arena", self.round + 1);
        }
        self.replace_walls(walls, sink);

        for player in &mut self.players {
            player.reset(sink);
        }

        self.round += 1;
        log::info!(
            "Round {} over, score {}-{}",
            self.round,
            self.players[0].score,
            self.players[1].score
        );
    }
}
