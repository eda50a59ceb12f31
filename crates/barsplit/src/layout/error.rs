//! Layout failures (fatal) and warnings (degraded but usable geometry).

use serde::Serialize;
use thiserror::Error;

use crate::engine::EngineError;

/// Where a normalization pass ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum NormalizeStage {
    /// Sanitizing the decomposed source outline.
    Source,
    /// Re-normalizing one clipped band.
    Band(usize),
    /// Final self-union of the assembled output.
    Output,
}

impl std::fmt::Display for NormalizeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalizeStage::Source => write!(f, "source outline"),
            NormalizeStage::Band(i) => write!(f, "band {i}"),
            NormalizeStage::Output => write!(f, "assembled output"),
        }
    }
}

/// Fatal layout errors. No output geometry accompanies them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("empty source outline")]
    EmptySource,

    #[error(
        "gap too large for given bar count and height \
         (height {total_height}, gaps need {needed_gaps})"
    )]
    InfeasibleLayout { total_height: f64, needed_gaps: f64 },

    #[error("band {band} has degenerate geometry: {source}")]
    DegenerateBand { band: usize, source: EngineError },

    #[error("normalization failed for {stage}: {source}")]
    NormalizationFailed {
        stage: NormalizeStage,
        source: EngineError,
    },
}

/// Non-fatal findings returned next to the geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LayoutWarning {
    /// Self-union failed; the un-normalized geometry was kept.
    NormalizationFailed {
        stage: NormalizeStage,
        error: EngineError,
    },
}

impl std::fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutWarning::NormalizationFailed { stage, error } => {
                write!(f, "normalization failed for {stage}: {error}")
            }
        }
    }
}
