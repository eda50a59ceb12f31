//! Outline geometry: immutable shapes and the non-zero region predicate.
//!
//! Purpose
//! - Replace framework-owned path/node graphs by plain values (`Shape` of
//!   `Contour`s of points) that transformations rebuild instead of mutate.
//! - Provide `RegionMembership`, an explicit winding-number point test, so the
//!   band algorithms never depend on a vector-graphics runtime.
//!
//! Code cross-refs: `bands::scanline` (consumer of `RegionMembership`),
//! `engine` (boolean operations over `Shape`).

pub mod rand;
mod region;
mod types;

pub use region::{RegionMembership, WindingRule};
pub use types::{Affine2, BoundingBox, Contour, Point, Shape};
