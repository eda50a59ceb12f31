//! Outline engine seam: normalization and boolean intersection.
//!
//! Purpose
//! - Keep the general polygon boolean behind `OutlineEngine` so the layout
//!   never depends on one clipping library. `SweepEngine` is the default,
//!   backed by the `linesweeper` sweep-line crate.
//! - `ContourClipper` is the exact band clip built on top of the engine.
//!
//! Both operations use the non-zero winding rule.

mod clip;
mod sweep;

pub use clip::{Clipped, ContourClipper};
pub use sweep::SweepEngine;

use serde::Serialize;
use thiserror::Error;

use crate::geom::Shape;

/// Failure reported by an outline engine.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum EngineError {
    #[error("outline contains an open contour")]
    OpenContour,
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Polygon operations supplied by an outline-geometry library.
pub trait OutlineEngine {
    /// Remove self-intersections and overlaps (self-union under non-zero winding).
    fn normalize(&self, shape: &Shape) -> Result<Shape, EngineError>;

    /// Region covered by both `a` and `b` under non-zero winding.
    fn intersect(&self, a: &Shape, b: &Shape) -> Result<Shape, EngineError>;
}

impl<E: OutlineEngine + ?Sized> OutlineEngine for &E {
    fn normalize(&self, shape: &Shape) -> Result<Shape, EngineError> {
        (**self).normalize(shape)
    }

    fn intersect(&self, a: &Shape, b: &Shape) -> Result<Shape, EngineError> {
        (**self).intersect(a, b)
    }
}
