//! Player collision resolution
//!
//! Given both players' predicted (already boundary-clamped) hitboxes, find
//! the push each one needs to get clear of walls and of each other. Walls are
//! scanned first, the player pair last; a running best correction is kept per
//! player using the per-axis `is_smaller` test.

use glam::Vec2;

use super::geometry::{Rect, is_smaller, minimum_translation_vector, overlaps};
use super::layout::ObstacleSet;

/// What produced a player's winning correction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionSource {
    Wall,
    Player,
}

/// Best correction found so far for one player
#[derive(Debug, Clone, Copy, PartialEq)]
struct Correction {
    push: Vec2,
    source: CollisionSource,
}

impl Correction {
    fn offer(best: &mut Option<Correction>, push: Vec2, source: CollisionSource) {
        if is_smaller(best.map(|c| c.push), push) {
            *best = Some(Correction { push, source });
        }
    }
}

/// Best wall correction for one predicted hitbox
fn wall_correction(predicted: &Rect, walls: &ObstacleSet) -> Option<Correction> {
    let mut best = None;
    for wall in walls.iter() {
        if overlaps(predicted, wall) {
            let push = minimum_translation_vector(predicted, wall);
            Correction::offer(&mut best, push, CollisionSource::Wall);
        }
    }
    best
}

/// Corrections for player one and player two, in that order.
///
/// Pure: nothing is moved. A player with nothing to resolve gets
/// `Vec2::ZERO`. When both players' best correction comes from their mutual
/// overlap and both are actively moving, each correction is halved so they
/// shove through each other evenly. With only one mover the full push
/// stands, which lets a moving player shove a stationary one.
pub fn resolve(
    p1_predicted: &Rect,
    p2_predicted: &Rect,
    p1_velocity: Vec2,
    p2_velocity: Vec2,
    walls: &ObstacleSet,
) -> (Vec2, Vec2) {
    let mut p1_best = wall_correction(p1_predicted, walls);
    let mut p2_best = wall_correction(p2_predicted, walls);

    if overlaps(p1_predicted, p2_predicted) {
        let push = minimum_translation_vector(p1_predicted, p2_predicted);
        Correction::offer(&mut p1_best, push, CollisionSource::Player);
        Correction::offer(&mut p2_best, -push, CollisionSource::Player);
    }

    if let (Some(p1), Some(p2)) = (p1_best.as_mut(), p2_best.as_mut()) {
        let both_shoving =
            p1.source == CollisionSource::Player && p2.source == CollisionSource::Player;
        if both_shoving && p1_velocity != Vec2::ZERO && p2_velocity != Vec2::ZERO {
            p1.push /= 2.0;
            p2.push /= 2.0;
        }
    }

    (
        p1_best.map_or(Vec2::ZERO, |c| c.push),
        p2_best.map_or(Vec2::ZERO, |c| c.push),
    )
}
