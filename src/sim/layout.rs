//! Wall obstacles and the per-round layout generator
//!
//! A layout is a handful of vertical wall columns. Each column is split by
//! random gaps tall enough for a player to squeeze through, and neighbouring
//! columns are spaced far enough apart for a player to pass between them.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::geometry::{Rect, overlaps};
use crate::settings::Settings;

/// Ordered wall rectangles for one round.
///
/// Read-only while a round is running; replaced wholesale on reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSet {
    walls: Vec<Rect>,
}

impl ObstacleSet {
    pub fn new(walls: Vec<Rect>) -> Self {
        Self { walls }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rect> {
        self.walls.iter()
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Whether `rect` overlaps any wall
    pub fn collides(&self, rect: &Rect) -> bool {
        self.walls.iter().any(|wall| overlaps(rect, wall))
    }
}

/// Random wall layout builder
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutGenerator {
    pub wall_width: f32,
    /// Minimum horizontal distance between wall columns
    pub x_gap: f32,
    /// Minimum height of a gap in a column
    pub y_gap: f32,
    /// Horizontal footprint reserved per column when sizing the wall budget
    pub column_pitch: f32,
}

impl LayoutGenerator {
    /// Gaps sized so a player fits with a few steps of slack
    pub fn from_settings(settings: &Settings) -> Self {
        let slack = settings.player.speed * crate::consts::GAP_STEPS;
        Self {
            wall_width: settings.wall_width,
            x_gap: settings.player.width + slack,
            y_gap: settings.player.height + slack,
            column_pitch: settings.player.width + settings.wall_width,
        }
    }

    /// Upper bound on wall columns for an arena width
    pub fn max_columns(&self, arena: &Arena) -> f32 {
        (arena.width / self.column_pitch).floor()
    }

    /// Generate a fresh layout for `arena`
    pub fn generate(&self, arena: &Arena, rng: &mut Pcg32) -> ObstacleSet {
        let column_count = roll(rng, self.max_columns(arena)) as usize + 1;

        let mut columns = Vec::with_capacity(column_count);
        let mut last_x = 0.0;
        for _ in 0..column_count {
            let remainder = arena.width - last_x - self.x_gap;
            let x = last_x + self.x_gap + roll(rng, remainder);
            if x + self.x_gap + self.wall_width > arena.width {
                break;
            }
            columns.push(x);
            last_x = x;
        }

        let mut walls = Vec::new();
        for x in columns {
            for (top, bottom) in self.column_spans(arena.height, rng) {
                walls.push(Rect::new(x, top, self.wall_width, bottom - top));
            }
        }

        log::info!(
            "Generated layout for {}x{}: {} walls",
            arena.width,
            arena.height,
            walls.len()
        );
        ObstacleSet::new(walls)
    }

    /// Solid (top, bottom) spans of one wall column, top to bottom
    fn column_spans(&self, height: f32, rng: &mut Pcg32) -> Vec<(f32, f32)> {
        let max_gaps = (height / self.y_gap).floor();
        let gap_count = roll(rng, max_gaps) as usize + 1;

        let mut gaps = Vec::with_capacity(gap_count);
        let mut last_y = 0.0;
        for _ in 0..gap_count {
            let gap_top = height.min(last_y + self.y_gap + roll(rng, height - last_y - self.y_gap));
            let gap_bottom =
                height.min(gap_top + self.y_gap + roll(rng, height - gap_top - self.y_gap));
            if gap_bottom - gap_top < self.y_gap {
                break;
            }
            gaps.push((gap_top, gap_bottom));
            last_y = gap_bottom;
        }

        // Column with no gaps is left out entirely
        if gaps.is_empty() {
            return Vec::new();
        }

        let mut spans = Vec::with_capacity(gaps.len() + 1);
        let mut span_top = 0.0;
        for (gap_top, gap_bottom) in gaps {
            spans.push((span_top, gap_top));
            span_top = gap_bottom;
        }
        spans.push((span_top, height));

        spans.retain(|(top, bottom)| bottom > top);
        spans
    }
}

/// `floor(random * span)` with random in [0, 1)
fn roll(rng: &mut Pcg32, span: f32) -> f32 {
    (rng.random::<f32>() * span).floor()
}
