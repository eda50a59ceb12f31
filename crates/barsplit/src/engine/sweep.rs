//! `OutlineEngine` implementation on top of `linesweeper`.
//!
//! Contours become closed `kurbo::BezPath` polylines; output paths are read back
//! node by node. Inputs are polygons, so curve segments in the output only
//! contribute their end points.

use kurbo::{BezPath, PathEl};
use linesweeper::topology::{BinaryWindingNumber, Topology};

use super::{EngineError, OutlineEngine};
use crate::geom::{Contour, Point, Shape};

/// Sweep-line boolean engine.
#[derive(Clone, Copy, Debug)]
pub struct SweepEngine {
    /// Sweep tolerance in design units.
    pub eps: f64,
}

impl Default for SweepEngine {
    fn default() -> Self {
        Self { eps: 1e-6 }
    }
}

impl OutlineEngine for SweepEngine {
    fn normalize(&self, shape: &Shape) -> Result<Shape, EngineError> {
        let path = to_bez_path(shape);
        if path.elements().is_empty() {
            return Ok(Shape::default());
        }
        let topo =
            Topology::<i32>::from_path(&path, self.eps).map_err(|_| EngineError::OpenContour)?;
        let contours = topo.contours(|w: i32| w != 0);
        Ok(contours.contours().flat_map(|c| from_bez_path(&c.path)).collect())
    }

    fn intersect(&self, a: &Shape, b: &Shape) -> Result<Shape, EngineError> {
        let pa = to_bez_path(a);
        let pb = to_bez_path(b);
        if pa.elements().is_empty() || pb.elements().is_empty() {
            return Ok(Shape::default());
        }
        let topo = Topology::<BinaryWindingNumber>::from_paths_binary(&pa, &pb, self.eps)
            .map_err(|_| EngineError::OpenContour)?;
        let contours = topo.contours(|w: BinaryWindingNumber| w.shape_a != 0 && w.shape_b != 0);
        Ok(contours.contours().flat_map(|c| from_bez_path(&c.path)).collect())
    }
}

/// Closed polyline path; contours with fewer than three nodes are skipped.
fn to_bez_path(shape: &Shape) -> BezPath {
    let mut path = BezPath::new();
    for c in shape.iter().filter(|c| !c.is_degenerate()) {
        let first = c.points[0];
        path.move_to((first.x, first.y));
        for p in &c.points[1..] {
            path.line_to((p.x, p.y));
        }
        path.close_path();
    }
    path
}

/// Split a path into contours, dropping repeated and closing nodes.
fn from_bez_path(path: &BezPath) -> Vec<Contour> {
    let mut out = Vec::new();
    let mut cur: Vec<Point> = Vec::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                finish(&mut out, &mut cur);
                push(&mut cur, p);
            }
            PathEl::LineTo(p) | PathEl::QuadTo(_, p) | PathEl::CurveTo(_, _, p) => {
                push(&mut cur, p)
            }
            PathEl::ClosePath => finish(&mut out, &mut cur),
        }
    }
    finish(&mut out, &mut cur);
    out
}

fn push(cur: &mut Vec<Point>, p: kurbo::Point) {
    let p = Point::new(p.x, p.y);
    if cur.last() != Some(&p) {
        cur.push(p);
    }
}

fn finish(out: &mut Vec<Contour>, cur: &mut Vec<Point>) {
    if cur.len() > 1 && cur.first() == cur.last() {
        cur.pop();
    }
    let points = std::mem::take(cur);
    if points.len() >= 3 {
        out.push(Contour::new(points));
    }
}
