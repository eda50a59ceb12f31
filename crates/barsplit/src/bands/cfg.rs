//! Layout configuration and its fixed defaults.
//!
//! Defaults follow the interactive tool: 11 bars, gap 20, no skew, sampling
//! every 0.4 units, snapping within 0.6 units, bands extended by 0.15 units.

use serde::{Deserialize, Serialize};

/// Angles at or below this magnitude (degrees) count as "no skew".
pub(crate) const ANGLE_EPS_DEG: f64 = 1e-4;
/// Slack for comparing a sample position against the scan end.
pub(crate) const SAMPLE_EPS: f64 = 1e-9;
/// Largest bar count accepted; bands are materialized one record each.
pub const MAX_BAR_COUNT: i64 = 100_000;

/// Knobs for one layout computation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub bar_count: i64,
    pub gap: f64,
    pub angle_deg: f64,
    /// Clip the source outline per band instead of sampling it.
    pub fit_contour: bool,
    pub sample_step_x: f64,
    pub min_interval_len: f64,
    pub snap_tolerance: f64,
    pub epsilon_y: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            bar_count: 11,
            gap: 20.0,
            angle_deg: 0.0,
            fit_contour: false,
            sample_step_x: 0.4,
            min_interval_len: 0.4,
            snap_tolerance: 0.6,
            epsilon_y: 0.15,
        }
    }
}

impl LayoutConfig {
    /// Check the knobs that need no geometry. Returns a human-readable reason.
    pub fn validate(&self) -> Result<(), String> {
        if self.bar_count < 1 {
            return Err("bar count must be ≥ 1".to_string());
        }
        if self.bar_count > MAX_BAR_COUNT {
            return Err(format!("bar count must be ≤ {MAX_BAR_COUNT}"));
        }
        let finite = [
            ("gap", self.gap),
            ("angleDeg", self.angle_deg),
            ("sampleStepX", self.sample_step_x),
            ("minIntervalLen", self.min_interval_len),
            ("snapTolerance", self.snap_tolerance),
            ("epsilonY", self.epsilon_y),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("{name} must be finite"));
        }
        if self.gap < 0.0 {
            return Err("gap must be ≥ 0".to_string());
        }
        if self.sample_step_x <= 0.0 {
            return Err("sampleStepX must be > 0".to_string());
        }
        if self.min_interval_len <= 0.0 {
            return Err("minIntervalLen must be > 0".to_string());
        }
        if self.snap_tolerance < 0.0 {
            return Err("snapTolerance must be ≥ 0".to_string());
        }
        if self.epsilon_y < 0.0 {
            return Err("epsilonY must be ≥ 0".to_string());
        }
        if !self.fit_contour && self.angle_deg.to_radians().cos().abs() < 1e-9 {
            return Err("angleDeg must not be an odd multiple of 90°".to_string());
        }
        Ok(())
    }

    /// Skew angle actually applied; fitContour forces 0.
    #[inline]
    pub fn effective_angle_deg(&self) -> f64 {
        if self.fit_contour {
            0.0
        } else {
            self.angle_deg
        }
    }

    #[inline]
    pub fn is_skewed(&self) -> bool {
        self.effective_angle_deg().abs() > ANGLE_EPS_DEG
    }
}
