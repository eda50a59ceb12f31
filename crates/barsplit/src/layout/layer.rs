//! Layer wrapper around the geometric core: decomposition, naming, metrics.
//!
//! A `Layer` holds plain contours and components (nested shape items placed by
//! an affine transform). `decompose` flattens everything into one `Shape`
//! before layout; the resulting `BarLayer` copies width and side bearings from
//! its source.

use serde::{Deserialize, Serialize};

use super::error::LayoutWarning;
use crate::bands::{LayoutConfig, ANGLE_EPS_DEG};
use crate::geom::{Affine2, BoundingBox, Contour, Shape};

/// One drawable item of a layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LayerShape {
    Path {
        contour: Contour,
    },
    Component {
        shapes: Vec<LayerShape>,
        #[serde(default)]
        transform: Affine2,
    },
}

/// Outline-bearing layer as handed in by the caller.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    #[serde(default)]
    pub name: String,
    pub width: f64,
    #[serde(default)]
    pub shapes: Vec<LayerShape>,
}

impl Layer {
    /// Flatten components recursively into plain contours in layer coordinates.
    pub fn decompose(&self) -> Shape {
        let mut out = Shape::default();
        flatten_into(&self.shapes, &Affine2::identity(), &mut out);
        out
    }

    pub fn bounds(&self) -> Option<BoundingBox> {
        self.decompose().bounds()
    }

    /// Left side bearing, or 0 for a layer without nodes.
    pub fn lsb(&self) -> f64 {
        self.bounds().map_or(0.0, |bb| bb.min.x)
    }

    /// Right side bearing, or the full width for a layer without nodes.
    pub fn rsb(&self) -> f64 {
        self.bounds().map_or(self.width, |bb| self.width - bb.max.x)
    }
}

fn flatten_into(items: &[LayerShape], placement: &Affine2, out: &mut Shape) {
    for item in items {
        match item {
            LayerShape::Path { contour } => out.push(contour.transformed(placement)),
            LayerShape::Component { shapes, transform } => {
                flatten_into(shapes, &placement.compose(transform), out)
            }
        }
    }
}

/// New layer produced by a layout.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarLayer {
    pub name: String,
    pub width: f64,
    pub lsb: f64,
    pub rsb: f64,
    pub shape: Shape,
    pub warnings: Vec<LayoutWarning>,
}

/// `Bars=<n>, Gap=<g>` plus `, Angle=<a>` when a skew is applied.
pub fn layer_name(cfg: &LayoutConfig) -> String {
    let angle = cfg.effective_angle_deg();
    if angle.abs() > ANGLE_EPS_DEG {
        format!("Bars={}, Gap={}, Angle={}", cfg.bar_count, cfg.gap, angle)
    } else {
        format!("Bars={}, Gap={}", cfg.bar_count, cfg.gap)
    }
}
