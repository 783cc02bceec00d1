//! # Pyramid Parameters
//!
//! The configuration layer in front of the builder. Hosts collect these five
//! values from their property panel (or any serde source), validate them, and
//! only then build.

use crate::error::MeshError;
use config::constants::{
    ParamSpec, BASE_SIZE_PARAM, DEFAULT_BASE_SIZE, DEFAULT_POINT_TOP, DEFAULT_STEP_COUNT,
    DEFAULT_STEP_HEIGHT, DEFAULT_STEP_WIDTH, MAX_STEP_COUNT, MIN_STEP_COUNT, STEP_COUNT_PARAM,
    STEP_HEIGHT_PARAM, STEP_WIDTH_PARAM,
};
use serde::{Deserialize, Serialize};

/// Inputs of a step pyramid.
///
/// Missing fields deserialize to their defaults.
///
/// # Example
///
/// ```rust
/// use pyramid_mesh::PyramidParams;
///
/// let params = PyramidParams {
///     step_count: 3,
///     point_top: true,
///     ..PyramidParams::default()
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PyramidParams {
    /// Edge length of the lowest step's footprint
    pub base_size: f64,
    /// Height of every step
    pub step_height: f64,
    /// Inset of each step on every side
    pub step_width: f64,
    /// Number of steps
    pub step_count: u32,
    /// Collapse the top ring of the last step into an apex
    pub point_top: bool,
}

impl Default for PyramidParams {
    fn default() -> Self {
        Self {
            base_size: DEFAULT_BASE_SIZE,
            step_height: DEFAULT_STEP_HEIGHT,
            step_width: DEFAULT_STEP_WIDTH,
            step_count: DEFAULT_STEP_COUNT,
            point_top: DEFAULT_POINT_TOP,
        }
    }
}

impl PyramidParams {
    /// Checks every field against its bounds.
    ///
    /// Base size and step height have exclusive lower bounds; NaN is always
    /// rejected. A footprint that shrinks to nothing before the last step is
    /// accepted but logged.
    pub fn validate(&self) -> Result<(), MeshError> {
        check(&BASE_SIZE_PARAM, self.base_size)?;
        check(&STEP_HEIGHT_PARAM, self.step_height)?;
        check(&STEP_WIDTH_PARAM, self.step_width)?;
        check(&STEP_COUNT_PARAM, f64::from(self.step_count))?;

        let top = self.top_size();
        if top <= 0.0 {
            tracing::warn!(
                base_size = self.base_size,
                step_width = self.step_width,
                step_count = self.step_count,
                top_size = top,
                "footprint collapses before the last step"
            );
        }

        Ok(())
    }

    /// Returns a copy with every field forced into range, the way a panel
    /// slider with min/max would. NaN, and anything at or below an exclusive
    /// lower bound, falls back to the default.
    pub fn clamped(&self) -> Self {
        Self {
            base_size: BASE_SIZE_PARAM.clamp(self.base_size),
            step_height: STEP_HEIGHT_PARAM.clamp(self.step_height),
            step_width: STEP_WIDTH_PARAM.clamp(self.step_width),
            step_count: self.step_count.clamp(MIN_STEP_COUNT, MAX_STEP_COUNT),
            point_top: self.point_top,
        }
    }

    /// Numeric value of the field `name`, with switches as 0 or 1.
    ///
    /// Lets a host drive a generic panel from [`ParamSpec`] names.
    pub fn value(&self, name: &str) -> Option<f64> {
        match name {
            "base_size" => Some(self.base_size),
            "step_height" => Some(self.step_height),
            "step_width" => Some(self.step_width),
            "step_count" => Some(f64::from(self.step_count)),
            "point_top" => Some(if self.point_top { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    /// Returns a copy with the field `name` set from a numeric panel value,
    /// or `None` for an unknown name. Step counts are rounded and saturate
    /// at zero; switches are on for any non-zero value.
    pub fn with_value(&self, name: &str, value: f64) -> Option<Self> {
        let mut params = *self;
        match name {
            "base_size" => params.base_size = value,
            "step_height" => params.step_height = value,
            "step_width" => params.step_width = value,
            "step_count" => params.step_count = value.round() as u32,
            "point_top" => params.point_top = value != 0.0,
            _ => return None,
        }
        Some(params)
    }

    /// Footprint edge length of the highest step.
    pub fn top_size(&self) -> f64 {
        let insets = f64::from(self.step_count.saturating_sub(1));
        self.base_size - self.step_width * 2.0 * insets
    }
}

fn check(spec: &ParamSpec, value: f64) -> Result<(), MeshError> {
    if spec.accepts(value) {
        Ok(())
    } else {
        tracing::warn!(name = spec.name, value, "parameter rejected");
        Err(MeshError::out_of_range(spec, value))
    }
}
