//! Axis-aligned rectangle geometry and minimum translation vectors
//!
//! Every actor and wall is an axis-aligned box in screen space (y grows
//! downward). Displacements and velocities are plain `Vec2`s.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box (screen coordinates, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Build a rect of the given size whose center sits on `center`
    pub fn centered_on(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Same size, shifted by `offset`
    #[inline]
    pub fn translate(&self, offset: Vec2) -> Self {
        Self::new(self.left + offset.x, self.top + offset.y, self.width, self.height)
    }

    /// Same size, moved so the top-left corner is at (`left`, `top`)
    #[inline]
    pub fn with_origin(&self, left: f32, top: f32) -> Self {
        Self::new(left, top, self.width, self.height)
    }
}

/// Whether the open interiors of two rects intersect on both axes.
///
/// Touching edges do not count.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.left < b.right() && a.right() > b.left && a.top < b.bottom() && a.bottom() > b.top
}

/// Push that separates `moving` from `obstacle` along the axis of least
/// penetration.
///
/// Precondition: the two rects overlap. Debug builds assert it; release
/// builds return `Vec2::ZERO` for a non-overlapping pair.
///
/// Exactly one component of the result is non-zero. When both axes need the
/// same magnitude the y-axis correction is returned.
pub fn minimum_translation_vector(moving: &Rect, obstacle: &Rect) -> Vec2 {
    debug_assert!(
        overlaps(moving, obstacle),
        "MTV requested for non-overlapping rects {moving:?} / {obstacle:?}"
    );
    if !overlaps(moving, obstacle) {
        return Vec2::ZERO;
    }

    // Depth of moving's right edge past obstacle's left, and obstacle's right past moving's left
    let overlap_x1 = moving.right() - obstacle.left;
    let overlap_x2 = obstacle.right() - moving.left;
    let overlap_y1 = moving.bottom() - obstacle.top;
    let overlap_y2 = obstacle.bottom() - moving.top;

    let mtv_x = if overlap_x1 < overlap_x2 {
        -overlap_x1
    } else {
        overlap_x2
    };
    let mtv_y = if overlap_y1 < overlap_y2 {
        -overlap_y1
    } else {
        overlap_y2
    };

    if mtv_x.abs() < mtv_y.abs() {
        Vec2::new(mtv_x, 0.0)
    } else {
        Vec2::new(0.0, mtv_y)
    }
}

/// Selection predicate for accumulating the best correction so far.
///
/// An absent `current` always loses. Otherwise `candidate` wins when either
/// of its components is strictly smaller in magnitude than the matching
/// component of `current`. This is a per-axis test, not a length comparison,
/// and it is not transitive.
#[inline]
pub fn is_smaller(current: Option<Vec2>, candidate: Vec2) -> bool {
    match current {
        None => true,
        Some(current) => {
            candidate.x.abs() < current.x.abs() || candidate.y.abs() < current.y.abs()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_interior() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &right));
        assert!(!overlaps(&a, &below));
    }

    #[test]
    fn test_mtv_wall_deflection() {
        // Player at left 95 moved right by 10 into a wall at x=200
        let predicted = Rect::new(95.0, 50.0, 100.0, 100.0).translate(Vec2::new(10.0, 0.0));
        let wall = Rect::new(200.0, 0.0, 10.0, 200.0);

        let mtv = minimum_translation_vector(&predicted, &wall);
        assert_eq!(mtv, Vec2::new(-5.0, 0.0));

        let resolved = predicted.translate(mtv);
        assert!(resolved.left <= 190.0);
        assert!(!overlaps(&resolved, &wall));
    }

    #[test]
    fn test_mtv_picks_vertical_push() {
        // Shallow overlap from above
        let moving = Rect::new(0.0, 0.0, 50.0, 50.0);
        let floor = Rect::new(-100.0, 48.0, 300.0, 10.0);
        let mtv = minimum_translation_vector(&moving, &floor);
        assert_eq!(mtv, Vec2::new(0.0, -2.0));
    }

    #[test]
    fn test_mtv_tie_resolves_to_y() {
        // Corner overlap of 5 on both axes
        let moving = Rect::new(0.0, 0.0, 10.0, 10.0);
        let obstacle = Rect::new(5.0, 5.0, 10.0, 10.0);
        let mtv = minimum_translation_vector(&moving, &obstacle);
        assert_eq!(mtv, Vec2::new(0.0, -5.0));
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_mtv_non_overlapping_is_zero_in_release() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(50.0, 50.0, 10.0, 10.0);
        assert_eq!(minimum_translation_vector(&a, &b), Vec2::ZERO);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_mtv_non_overlapping_asserts_in_debug() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(50.0, 50.0, 10.0, 10.0);
        minimum_translation_vector(&a, &b);
    }

    #[test]
    fn test_is_smaller_absent_current_loses() {
        assert!(is_smaller(None, Vec2::new(100.0, 0.0)));
    }

    #[test]
    fn test_is_smaller_is_per_axis() {
        // A y-push beats a much smaller x-push because its x component is zero
        let current = Vec2::new(-1.0, 0.0);
        let candidate = Vec2::new(0.0, 50.0);
        assert!(is_smaller(Some(current), candidate));
        // ...and the reverse holds too
        assert!(is_smaller(Some(candidate), current));
        // Same-axis comparisons behave like magnitude
        assert!(!is_smaller(Some(Vec2::new(3.0, 0.0)), Vec2::new(-4.0, 0.0)));
        assert!(is_smaller(Some(Vec2::new(3.0, 0.0)), Vec2::new(-2.0, 0.0)));
    }

    #[test]
    fn test_rect_helpers() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
        assert_eq!(Rect::centered_on(r.center(), 10.0, 10.0), Rect::new(20.0, 35.0, 10.0, 10.0));
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-200i32..200, -200i32..200, 1i32..120, 1i32..120)
            .prop_map(|(l, t, w, h)| Rect::new(l as f32, t as f32, w as f32, h as f32))
    }

    /// A rect guaranteed to overlap `a`, built from integer offsets so the
    /// arithmetic stays exact.
    fn overlapping_pair() -> impl Strategy<Value = (Rect, Rect)> {
        rect_strategy().prop_flat_map(|a| {
            (1i32..120, 1i32..120).prop_flat_map(move |(bw, bh)| {
                let max_x = a.width as i32 + bw;
                let max_y = a.height as i32 + bh;
                (1i32..max_x, 1i32..max_y).prop_map(move |(kx, ky)| {
                    let b = Rect::new(
                        a.left - bw as f32 + kx as f32,
                        a.top - bh as f32 + ky as f32,
                        bw as f32,
                        bh as f32,
                    );
                    (a, b)
                })
            })
        })
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn prop_mtv_separates((moving, obstacle) in overlapping_pair()) {
            prop_assert!(overlaps(&moving, &obstacle));
            let mtv = minimum_translation_vector(&moving, &obstacle);
            prop_assert!(mtv.x == 0.0 || mtv.y == 0.0);
            prop_assert!(!overlaps(&moving.translate(mtv), &obstacle));
        }
    }
}
