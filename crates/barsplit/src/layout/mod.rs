//! Bar layout orchestration.
//!
//! Purpose
//! - `BarLayout::layout` turns one decomposed source outline into banded
//!   geometry: validate, compute bands, then per band either sample the
//!   midline (scanline mode) or clip the source (fitContour mode), and finally
//!   assemble and self-union everything into one new `Shape`.
//! - `BarLayout::build_layer` wraps that into a named `BarLayer`.
//!
//! Stages
//! - Validating → ComputingBands → Sampling | Clipping (per band) → Assembling.
//!   Validation failures and engine failures inside an intersection abort with
//!   a `LayoutError` and no geometry. Failed normalizations keep the degraded
//!   geometry and add a `LayoutWarning`.
//!
//! Code cross-refs: `bands::{compute_bands, scanline, build, snap}`,
//! `engine::{OutlineEngine, ContourClipper}`, `geom::RegionMembership`.

mod error;
mod layer;

pub use error::{LayoutError, LayoutWarning, NormalizeStage};
pub use layer::{layer_name, BarLayer, Layer, LayerShape};

use tracing::{debug, info, warn};

use crate::bands::{
    build::{clip_rect, interval_polygons},
    compute_bands, scanline,
    snap::{snap, Edge},
    Band, LayoutConfig, ANGLE_EPS_DEG,
};
use crate::engine::{ContourClipper, EngineError, OutlineEngine, SweepEngine};
use crate::geom::{RegionMembership, Shape, WindingRule};

/// Banded geometry plus everything the caller needs to judge it.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutOutput {
    pub shape: Shape,
    pub bands: Vec<Band>,
    pub warnings: Vec<LayoutWarning>,
}

impl LayoutOutput {
    /// Reject degraded geometry: the first warning becomes an error.
    pub fn into_strict(self) -> Result<Shape, LayoutError> {
        match self.warnings.into_iter().next() {
            None => Ok(self.shape),
            Some(LayoutWarning::NormalizationFailed { stage, error }) => {
                Err(LayoutError::NormalizationFailed {
                    stage,
                    source: error,
                })
            }
        }
    }
}

/// Layout engine: a configuration plus the outline engine it clips and
/// normalizes with.
#[derive(Clone, Debug, Default)]
pub struct BarLayout<E: OutlineEngine = SweepEngine> {
    cfg: LayoutConfig,
    engine: E,
}

impl BarLayout<SweepEngine> {
    pub fn with_config(cfg: LayoutConfig) -> Self {
        Self::new(cfg, SweepEngine::default())
    }
}

impl<E: OutlineEngine> BarLayout<E> {
    pub fn new(cfg: LayoutConfig, engine: E) -> Self {
        Self { cfg, engine }
    }

    /// Lay out `source` (already decomposed) over the scan range `[0, width]`.
    ///
    /// The input is never mutated; the returned shape is newly built.
    pub fn layout(&self, source: &Shape, width: f64) -> Result<LayoutOutput, LayoutError> {
        let cfg = &self.cfg;
        let _span = tracing::debug_span!(
            "bar_layout",
            bars = cfg.bar_count,
            gap = cfg.gap,
            fit_contour = cfg.fit_contour
        )
        .entered();

        // Validating
        cfg.validate().map_err(LayoutError::InvalidConfiguration)?;
        if !width.is_finite() {
            return Err(LayoutError::InvalidConfiguration(
                "layer width must be finite".to_string(),
            ));
        }
        if source.iter().all(|c| c.is_degenerate()) {
            return Err(LayoutError::EmptySource);
        }
        if cfg.fit_contour && cfg.angle_deg.abs() > ANGLE_EPS_DEG {
            warn!(angle = cfg.angle_deg, "angle ignored while fitting bars to the contour");
        }

        let mut warnings = Vec::new();
        let source = match self.engine.normalize(source) {
            Ok(s) => s,
            Err(error) => {
                note_normalize_failure(&mut warnings, NormalizeStage::Source, error);
                source.clone()
            }
        };
        let Some(bounds) = source.bounds() else {
            return Err(LayoutError::EmptySource);
        };
        let (y_min, y_max) = (bounds.min.y, bounds.max.y);

        // ComputingBands
        let count = usize::try_from(cfg.bar_count).map_err(|_| {
            LayoutError::InvalidConfiguration(format!(
                "bar count {} does not fit this platform",
                cfg.bar_count
            ))
        })?;
        let bands = compute_bands(y_min, y_max, count, cfg.gap).ok_or(
            LayoutError::InfeasibleLayout {
                total_height: y_max - y_min,
                needed_gaps: (cfg.bar_count - 1) as f64 * cfg.gap,
            },
        )?;

        let mut assembled = Shape::default();
        if cfg.fit_contour {
            let clipper = ContourClipper::new(&self.engine);
            for band in &bands {
                let part =
                    self.clip_band(&clipper, &source, band, width, (y_min, y_max), &mut warnings)?;
                assembled.extend(part);
            }
        } else {
            let membership = RegionMembership::new(&source, WindingRule::NonZero);
            for band in &bands {
                assembled.extend(self.sample_band(&membership, band, width));
            }
        }

        // Assembling
        let shape = if assembled.is_empty() {
            assembled
        } else {
            match self.engine.normalize(&assembled) {
                Ok(s) => s,
                Err(error) => {
                    note_normalize_failure(&mut warnings, NormalizeStage::Output, error);
                    assembled
                }
            }
        };
        info!(
            bands = bands.len(),
            contours = shape.len(),
            warnings = warnings.len(),
            y_min,
            y_max,
            "bar layout done"
        );
        Ok(LayoutOutput {
            shape,
            bands,
            warnings,
        })
    }

    /// Scanline mode: one midline scan, one polygon per interval.
    fn sample_band(&self, membership: &RegionMembership<'_>, band: &Band, width: f64) -> Shape {
        let cfg = &self.cfg;
        let y_mid = band.y_mid();
        let runs = scanline::intervals(
            membership,
            y_mid,
            0.0,
            width,
            cfg.sample_step_x,
            cfg.min_interval_len,
        );
        debug!(band = band.index, y_mid, intervals = runs.len(), "sampled band");
        interval_polygons(band, &runs, cfg.effective_angle_deg(), cfg.is_skewed()).into()
    }

    /// fitContour mode: exact clip, then snap the outermost bands.
    fn clip_band(
        &self,
        clipper: &ContourClipper<'_, E>,
        source: &Shape,
        band: &Band,
        width: f64,
        (y_min, y_max): (f64, f64),
        warnings: &mut Vec<LayoutWarning>,
    ) -> Result<Shape, LayoutError> {
        let cfg = &self.cfg;
        let rect = clip_rect(band, 0.0, width, cfg.epsilon_y);
        let clipped = clipper
            .clip(source, &rect)
            .map_err(|error| LayoutError::DegenerateBand {
                band: band.index,
                source: error,
            })?;
        if let Some(error) = clipped.normalize_error {
            note_normalize_failure(warnings, NormalizeStage::Band(band.index), error);
        }
        let mut shape = clipped.shape;
        if band.is_first {
            shape = snap(&shape, y_min, cfg.snap_tolerance, Edge::Bottom);
        }
        if band.is_last {
            shape = snap(&shape, y_max, cfg.snap_tolerance, Edge::Top);
        }
        debug!(
            band = band.index,
            y_bottom = band.y_bottom,
            y_top = band.y_top,
            contours = shape.len(),
            "clipped band"
        );
        Ok(shape)
    }

    /// Decompose `layer`, lay it out, and wrap the result as a new named layer.
    pub fn build_layer(&self, layer: &Layer) -> Result<BarLayer, LayoutError> {
        let out = self.layout(&layer.decompose(), layer.width)?;
        Ok(BarLayer {
            name: layer_name(&self.cfg),
            width: layer.width,
            lsb: layer.lsb(),
            rsb: layer.rsb(),
            shape: out.shape,
            warnings: out.warnings,
        })
    }

    /// Independent layout of several layers; one result per input layer.
    pub fn build_layers(&self, layers: &[Layer]) -> Vec<Result<BarLayer, LayoutError>> {
        layers.iter().map(|l| self.build_layer(l)).collect()
    }
}

fn note_normalize_failure(
    warnings: &mut Vec<LayoutWarning>,
    stage: NormalizeStage,
    error: EngineError,
) {
    warn!(%stage, %error, "normalization failed; keeping un-normalized geometry");
    warnings.push(LayoutWarning::NormalizationFailed { stage, error });
}

/// Lay out `source` with the default sweep-line engine.
pub fn layout(cfg: LayoutConfig, source: &Shape, width: f64) -> Result<LayoutOutput, LayoutError> {
    BarLayout::with_config(cfg).layout(source, width)
}
