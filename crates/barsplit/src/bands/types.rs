//! Band and interval records plus the band-height computation.

use serde::{Deserialize, Serialize};

/// One horizontal slice of the layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub index: usize,
    pub y_bottom: f64,
    pub y_top: f64,
    pub is_first: bool,
    pub is_last: bool,
}

impl Band {
    #[inline]
    pub fn height(&self) -> f64 {
        self.y_top - self.y_bottom
    }

    #[inline]
    pub fn y_mid(&self) -> f64 {
        (self.y_bottom + self.y_top) * 0.5
    }
}

/// Horizontal run `[start, end]` of a scanline inside the region.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    #[inline]
    pub fn len(&self) -> f64 {
        self.end - self.start
    }
}

/// Split `[y_min, y_max]` into `count` bands separated by `gap`.
///
/// Every band but the last has height `(H - (count-1)·gap) / count`; the last one
/// ends exactly at `y_max` and absorbs the rounding remainder. Returns `None`
/// when `count == 0` or the per-band height would not be positive.
pub fn compute_bands(y_min: f64, y_max: f64, count: usize, gap: f64) -> Option<Vec<Band>> {
    if count == 0 {
        return None;
    }
    let bar_h = bar_height(y_max - y_min, count, gap)?;
    let mut bands = Vec::with_capacity(count);
    let mut y0 = y_min;
    for i in 0..count {
        let is_last = i + 1 == count;
        let y_top = if is_last { y_max } else { y0 + bar_h };
        bands.push(Band {
            index: i,
            y_bottom: y0,
            y_top,
            is_first: i == 0,
            is_last,
        });
        y0 += bar_h + gap;
    }
    Some(bands)
}

/// Per-band height, or `None` if the gaps leave no room.
pub fn bar_height(total_height: f64, count: usize, gap: f64) -> Option<f64> {
    if count == 0 {
        return None;
    }
    let remaining = total_height - (count as f64 - 1.0) * gap;
    if remaining <= 0.0 || !remaining.is_finite() {
        return None;
    }
    Some(remaining / count as f64)
}
