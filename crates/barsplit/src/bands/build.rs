//! Band polygons: per-interval rectangles/parallelograms and clip rectangles.

use super::types::{Band, Interval};
use crate::geom::{Contour, Point};

/// Horizontal offset of a band's top edge relative to its bottom edge.
#[inline]
pub fn skew_dx(angle_deg: f64, height: f64) -> f64 {
    angle_deg.to_radians().tan() * height
}

/// One polygon per interval, wound counter-clockwise.
///
/// With `skewed == false` the corners are `(x0,yb) (x1,yb) (x1,yt) (x0,yt)`.
/// Otherwise the top edge is shifted by `tan(angle)·(yt - yb)`.
pub fn interval_polygons(
    band: &Band,
    intervals: &[Interval],
    angle_deg: f64,
    skewed: bool,
) -> Vec<Contour> {
    let dx = if skewed {
        skew_dx(angle_deg, band.height())
    } else {
        0.0
    };
    intervals
        .iter()
        .map(|iv| {
            Contour::new(vec![
                Point::new(iv.start, band.y_bottom),
                Point::new(iv.end, band.y_bottom),
                Point::new(iv.end + dx, band.y_top),
                Point::new(iv.start + dx, band.y_top),
            ])
        })
        .collect()
}

/// Clip rectangle `[x_min, x_max] × band`, with the first band pushed down and
/// the last band pushed up by `epsilon_y`.
pub fn clip_rect(band: &Band, x_min: f64, x_max: f64, epsilon_y: f64) -> Contour {
    let bottom = if band.is_first {
        band.y_bottom - epsilon_y
    } else {
        band.y_bottom
    };
    let top = if band.is_last {
        band.y_top + epsilon_y
    } else {
        band.y_top
    };
    Contour::rect(x_min, bottom, x_max, top)
}
