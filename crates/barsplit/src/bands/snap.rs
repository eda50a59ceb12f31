//! Snap the outermost band nodes onto the source's vertical extremes.

use serde::{Deserialize, Serialize};

use crate::geom::{Contour, Point, Shape};

/// Which extreme a band touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Bottom,
    Top,
}

/// Force `y = target_y` on every node that is outward of `target_y`, or inward by
/// less than `tolerance`. Only y changes; a new shape is returned.
pub fn snap(shape: &Shape, target_y: f64, tolerance: f64, edge: Edge) -> Shape {
    shape
        .iter()
        .map(|c| Contour {
            points: c
                .points
                .iter()
                .map(|p| {
                    let near = match edge {
                        Edge::Bottom => p.y < target_y + tolerance,
                        Edge::Top => p.y > target_y - tolerance,
                    };
                    if near {
                        Point::new(p.x, target_y)
                    } else {
                        *p
                    }
                })
                .collect(),
        })
        .collect()
}
