//! Band slicing: heights and gaps, scanline intervals, band polygons, snapping.
//!
//! Purpose
//! - `compute_bands` splits the source's vertical extent into `barCount` bands
//!   separated by `gap`; the last band absorbs the rounding remainder.
//! - `scanline::intervals` samples the region along one horizontal line.
//! - `build` turns intervals (or whole bands) into polygons.
//! - `snap` pins the outermost band nodes to the source's `yMin`/`yMax`.
//!
//! Code cross-refs: `layout::BarLayout` (orchestration), `geom::RegionMembership`.

pub mod build;
mod cfg;
pub mod scanline;
pub mod snap;
mod types;

pub use cfg::{LayoutConfig, MAX_BAR_COUNT};
pub(crate) use cfg::ANGLE_EPS_DEG;
pub use snap::Edge;
pub use types::{bar_height, compute_bands, Band, Interval};

#[cfg(test)]
mod tests;
