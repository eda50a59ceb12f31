//! Split closed outlines into horizontal bars.
//!
//! Given a shape (one or more closed contours, possibly self-overlapping) this
//! crate slices its vertical extent into `barCount` bands separated by a fixed
//! gap and emits the banded geometry as a new shape, either by fast midline
//! sampling (optionally skewed) or by exact clipping against the source.
//!
//! Layout
//! - `geom`: points, contours, shapes and the non-zero region predicate.
//! - `bands`: band heights, scanline intervals, band polygons, snapping.
//! - `engine`: the boolean/normalization seam and its sweep-line default.
//! - `layout`: orchestration, errors and the layer wrapper.

pub mod bands;
pub mod engine;
pub mod geom;
pub mod layout;

pub use bands::LayoutConfig;
pub use layout::{layout, BarLayout, LayoutError, LayoutOutput};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bands::{Band, Interval, LayoutConfig};
    pub use crate::engine::{EngineError, OutlineEngine, SweepEngine};
    pub use crate::geom::{
        Affine2, BoundingBox, Contour, Point, RegionMembership, Shape, WindingRule,
    };
    pub use crate::layout::{
        layer_name, layout, BarLayer, BarLayout, Layer, LayerShape, LayoutError, LayoutOutput,
        LayoutWarning, NormalizeStage,
    };
}
