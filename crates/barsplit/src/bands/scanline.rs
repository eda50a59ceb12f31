//! Interval detection along one horizontal scanline by fixed-step sampling.
//!
//! Samples sit at `x_min + k·step` (computed from `k`, not accumulated), for every
//! `k` with `x_min + k·step <= x_max`. The scan starts "outside": a region that
//! already covers `x_min` opens its interval there. Features narrower than
//! `step` may be missed and boundaries snap to the sample grid.

use super::cfg::SAMPLE_EPS;
use super::types::Interval;
use crate::geom::{Point, RegionMembership};

/// Ordered intervals where the scanline at `y` lies inside the region.
///
/// An interval opens at the first inside sample and closes at the first
/// following outside sample; a run still open at the end closes at `x_max`.
/// Runs shorter than `min_len` are dropped.
pub fn intervals(
    membership: &RegionMembership<'_>,
    y: f64,
    x_min: f64,
    x_max: f64,
    step: f64,
    min_len: f64,
) -> Vec<Interval> {
    let mut out = Vec::new();
    if !(step > 0.0) || !(x_max >= x_min) {
        return out;
    }
    let samples = ((x_max - x_min) / step + SAMPLE_EPS).floor() as usize;
    let mut start: Option<f64> = None;
    for k in 0..=samples {
        let x = x_min + (k as f64) * step;
        let inside = membership.contains(Point::new(x, y));
        match (inside, start) {
            (true, None) => start = Some(x),
            (false, Some(s)) => {
                push_if_long(&mut out, s, x, min_len);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        push_if_long(&mut out, s, x_max, min_len);
    }
    out
}

#[inline]
fn push_if_long(out: &mut Vec<Interval>, start: f64, end: f64, min_len: f64) {
    let run = Interval { start, end };
    if run.len() > 0.0 && run.len() >= min_len {
        out.push(run);
    }
}
