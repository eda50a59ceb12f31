//! Exact band clip: source ∩ band rectangle, then self-union of the result.

use super::{EngineError, OutlineEngine};
use crate::geom::{Contour, Shape};

/// Result of clipping one band.
#[derive(Clone, Debug)]
pub struct Clipped {
    pub shape: Shape,
    /// Set when the post-clip normalization failed; `shape` is then the raw
    /// intersection and may self-intersect.
    pub normalize_error: Option<EngineError>,
}

/// Intersects source contours with band rectangles through an `OutlineEngine`.
pub struct ContourClipper<'e, E: OutlineEngine + ?Sized> {
    engine: &'e E,
}

impl<'e, E: OutlineEngine + ?Sized> ContourClipper<'e, E> {
    pub fn new(engine: &'e E) -> Self {
        Self { engine }
    }

    /// Clip `source` to `band`. An engine failure in the intersection is fatal;
    /// a failure in the follow-up normalization is reported in `Clipped`.
    pub fn clip(&self, source: &Shape, band: &Contour) -> Result<Clipped, EngineError> {
        let rect = Shape::new(vec![band.clone()]);
        let raw = self.engine.intersect(source, &rect)?;
        if raw.is_empty() {
            return Ok(Clipped {
                shape: raw,
                normalize_error: None,
            });
        }
        match self.engine.normalize(&raw) {
            Ok(shape) => Ok(Clipped {
                shape,
                normalize_error: None,
            }),
            Err(e) => Ok(Clipped {
                shape: raw,
                normalize_error: Some(e),
            }),
        }
    }
}
