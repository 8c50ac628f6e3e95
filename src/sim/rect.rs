//! Axis-aligned rectangle geometry for colliders and render quads
//!
//! Everything in the play field is an axis-aligned box in integer pixel
//! coordinates: (x, y) is the top-left corner, y grows downward.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        debug_assert!(w > 0 && h > 0, "degenerate rect {w}x{h}");
        Self { x, y, w, h }
    }

    /// Rectangle anchored at a position vector
    pub fn at(pos: IVec2, w: i32, h: i32) -> Self {
        Self::new(pos.x, pos.y, w, h)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Move the rectangle so its top-left corner is at `pos`
    pub fn place(&mut self, pos: IVec2) {
        self.x = pos.x;
        self.y = pos.y;
    }
}

/// Check whether two rectangles overlap with nonzero area.
///
/// Edges that merely touch do not count as a collision: the test is
/// strict on every side, so `a.right() == b.left()` is a miss.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    if a.bottom() <= b.top() {
        return false;
    }
    if a.top() >= b.bottom() {
        return false;
    }
    if a.right() <= b.left() {
        return false;
    }
    if a.left() >= b.right() {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(overlaps(&a, &b));

        let far = Rect::new(100, 100, 10, 10);
        assert!(!overlaps(&a, &far));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::new(0, 0, 10, 10);
        // Shares the x=10 edge with a
        let right = Rect::new(10, 0, 10, 10);
        assert!(!overlaps(&a, &right));
        // Shares the y=10 edge
        let below = Rect::new(0, 10, 10, 10);
        assert!(!overlaps(&a, &below));
        // One pixel of actual overlap
        let nudged = Rect::new(9, 0, 10, 10);
        assert!(overlaps(&a, &nudged));
    }

    #[test]
    fn test_containment_is_overlap() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(40, 40, 10, 10);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    fn arb_rect() -> impl Strategy<Value = Rect> {
        (-200..200i32, -200..200i32, 1..100i32, 1..100i32)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_overlap_symmetric(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn prop_rect_overlaps_itself(a in arb_rect()) {
            prop_assert!(overlaps(&a, &a));
        }
    }
}
