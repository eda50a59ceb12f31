//! Outline value types: points, closed contours, shapes and bounding boxes.
//!
//! - `Contour`: closed, ordered point loop (the closing edge is implicit).
//! - `Shape`: set of contours; order among contours carries no meaning.
//! - `BoundingBox`: axis-aligned extent of a shape.
//! - `Affine2`: `x ↦ M x + t`, used when flattening components.
//!
//! All transformations build new values; nothing here mutates shared geometry.

use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

/// A point in design-space units.
pub type Point = Vector2<f64>;

/// Closed, ordered sequence of points. The last point connects back to the first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Contour {
    pub points: Vec<Point>,
}

impl Contour {
    #[inline]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Axis-aligned rectangle wound counter-clockwise from `(x0, y0)`.
    pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Fewer than three points encloses no area.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }

    /// Edges `(a, b)` including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |k| (self.points[k], self.points[(k + 1) % n]))
    }

    /// Shoelace area; positive for counter-clockwise winding.
    pub fn signed_area(&self) -> f64 {
        0.5 * self
            .edges()
            .map(|(a, b)| a.x * b.y - a.y * b.x)
            .sum::<f64>()
    }

    /// Same loop traversed in the opposite direction.
    pub fn reversed(&self) -> Contour {
        let mut points = self.points.clone();
        points.reverse();
        Contour { points }
    }

    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.points.iter().copied())
    }

    pub fn transformed(&self, f: &Affine2) -> Contour {
        Contour {
            points: self.points.iter().map(|p| f.apply(*p)).collect(),
        }
    }
}

/// A set of contours describing a (possibly self-overlapping) region.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shape {
    pub contours: Vec<Contour>,
}

impl Shape {
    #[inline]
    pub fn new(contours: Vec<Contour>) -> Self {
        Self { contours }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.contours.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    pub fn push(&mut self, c: Contour) {
        self.contours.push(c);
    }

    pub fn extend(&mut self, other: Shape) {
        self.contours.extend(other.contours);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contour> {
        self.contours.iter()
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.contours.iter().flat_map(|c| c.points.iter().copied())
    }

    /// Bounding box over every node; `None` when there are no points.
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.points())
    }

    /// Sum of contour signed areas (counter-wound holes subtract).
    pub fn signed_area(&self) -> f64 {
        self.contours.iter().map(Contour::signed_area).sum()
    }

    pub fn transformed(&self, f: &Affine2) -> Shape {
        Shape {
            contours: self.contours.iter().map(|c| c.transformed(f)).collect(),
        }
    }
}

impl From<Vec<Contour>> for Shape {
    fn from(contours: Vec<Contour>) -> Self {
        Shape { contours }
    }
}

impl FromIterator<Contour> for Shape {
    fn from_iter<I: IntoIterator<Item = Contour>>(iter: I) -> Self {
        Shape {
            contours: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Shape {
    type Item = Contour;
    type IntoIter = std::vec::IntoIter<Contour>;
    fn into_iter(self) -> Self::IntoIter {
        self.contours.into_iter()
    }
}

impl<'a> IntoIterator for &'a Shape {
    type Item = &'a Contour;
    type IntoIter = std::slice::Iter<'a, Contour>;
    fn into_iter(self) -> Self::IntoIter {
        self.contours.iter()
    }
}

/// Axis-aligned bounding box `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut bb = BoundingBox {
            min: first,
            max: first,
        };
        for p in it {
            bb.min.x = bb.min.x.min(p.x);
            bb.min.y = bb.min.y.min(p.y);
            bb.max.x = bb.max.x.max(p.x);
            bb.max.y = bb.max.y.max(p.y);
        }
        Some(bb)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }

    #[inline]
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::new(dx, dy),
        }
    }

    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        self.m * p + self.t
    }

    /// `self ∘ inner`: apply `inner` first, then `self`.
    #[inline]
    pub fn compose(&self, inner: &Affine2) -> Affine2 {
        Affine2 {
            m: self.m * inner.m,
            t: self.m * inner.t + self.t,
        }
    }
}
