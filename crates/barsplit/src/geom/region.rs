//! Point-in-region predicate over a set of contours.
//!
//! Winding numbers come from signed crossings of the ray `p + s·(1, 0)`, `s > 0`.
//! Edges are half-open in y (`a.y <= p.y < b.y` for upward edges), so a ray through
//! a shared vertex is counted once. A point on a left edge counts as inside, a point
//! on a right edge as outside.

use super::types::{Point, Shape};

/// Fill rule deciding which winding numbers are "inside".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WindingRule {
    /// Inside iff the winding number is nonzero. Counter-wound overlaps stay solid.
    #[default]
    NonZero,
    /// Inside iff the winding number is odd.
    EvenOdd,
}

impl WindingRule {
    #[inline]
    pub fn is_inside(self, winding: i32) -> bool {
        match self {
            WindingRule::NonZero => winding != 0,
            WindingRule::EvenOdd => winding % 2 != 0,
        }
    }
}

/// Read-only membership test derived once per source shape.
///
/// An empty shape contains nothing.
#[derive(Clone, Copy, Debug)]
pub struct RegionMembership<'a> {
    shape: &'a Shape,
    rule: WindingRule,
}

impl<'a> RegionMembership<'a> {
    pub fn new(shape: &'a Shape, rule: WindingRule) -> Self {
        Self { shape, rule }
    }

    /// Signed crossing count of the +x ray from `p` against every contour edge.
    pub fn winding_number(&self, p: Point) -> i32 {
        let mut w = 0i32;
        for contour in self.shape.iter() {
            if contour.is_degenerate() {
                continue;
            }
            for (a, b) in contour.edges() {
                if a.y <= p.y {
                    if b.y > p.y && is_left(a, b, p) > 0.0 {
                        w += 1;
                    }
                } else if b.y <= p.y && is_left(a, b, p) < 0.0 {
                    w -= 1;
                }
            }
        }
        w
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.rule.is_inside(self.winding_number(p))
    }
}

/// `> 0` if `p` is left of the directed line `a → b`, `< 0` if right, `0` if on it.
#[inline]
fn is_left(a: Point, b: Point, p: Point) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}
