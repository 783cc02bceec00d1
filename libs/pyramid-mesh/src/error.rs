//! # Mesh Errors
//!
//! Error types for the configuration and registration layers. Geometry
//! generation itself is total and never fails.

use config::constants::{ParamRange, ParamSpec};
use thiserror::Error;

/// Errors that can occur around pyramid mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A configuration value is outside its accepted range
    #[error(
        "Invalid parameter `{name}`: {value} (expected {})",
        describe_range(.min, .max, .min_inclusive)
    )]
    InvalidParameter {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
        min_inclusive: bool,
    },

    /// Invalid mesh topology
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// An operator with this id is already registered
    #[error("Operator already registered: {id}")]
    DuplicateOperator { id: String },

    /// No operator with this id is registered
    #[error("Unknown operator: {id}")]
    UnknownOperator { id: String },
}

impl MeshError {
    /// Creates an invalid parameter error for a `min..=max` range.
    pub fn invalid_parameter(name: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::InvalidParameter {
            name,
            value,
            min,
            max,
            min_inclusive: true,
        }
    }

    /// Creates an invalid parameter error for a `min < value <= max` range.
    pub fn invalid_parameter_above(name: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::InvalidParameter {
            name,
            value,
            min,
            max,
            min_inclusive: false,
        }
    }

    /// Creates the error for `value` falling outside `spec`'s range.
    pub fn out_of_range(spec: &ParamSpec, value: f64) -> Self {
        match spec.range {
            ParamRange::Float {
                min,
                max,
                min_inclusive: true,
                ..
            } => Self::invalid_parameter(spec.name, value, min, max),
            ParamRange::Float { min, max, .. } => {
                Self::invalid_parameter_above(spec.name, value, min, max)
            }
            ParamRange::Int { min, max, .. } => {
                Self::invalid_parameter(spec.name, value, f64::from(min), f64::from(max))
            }
            ParamRange::Bool { .. } => Self::invalid_parameter(spec.name, value, 0.0, 1.0),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates a duplicate operator error.
    pub fn duplicate_operator(id: impl Into<String>) -> Self {
        Self::DuplicateOperator { id: id.into() }
    }

    /// Creates an unknown operator error.
    pub fn unknown_operator(id: impl Into<String>) -> Self {
        Self::UnknownOperator { id: id.into() }
    }
}

fn describe_range(min: &f64, max: &f64, min_inclusive: &bool) -> String {
    if *min_inclusive {
        format!("{min}..={max}")
    } else {
        format!("{min} < value <= {max}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = MeshError::invalid_parameter("step_count", 0.0, 1.0, 20.0);
        assert_eq!(
            err.to_string(),
            "Invalid parameter `step_count`: 0 (expected 1..=20)"
        );
    }

    #[test]
    fn test_exclusive_bound_message() {
        let err = MeshError::invalid_parameter_above("base_size", 0.0, 0.0, 20.0);
        assert_eq!(
            err.to_string(),
            "Invalid parameter `base_size`: 0 (expected 0 < value <= 20)"
        );
    }

    #[test]
    fn test_out_of_range_follows_spec_bound_kind() {
        use config::constants::{STEP_HEIGHT_PARAM, STEP_WIDTH_PARAM};

        assert_eq!(
            MeshError::out_of_range(&STEP_HEIGHT_PARAM, 11.0),
            MeshError::invalid_parameter_above("step_height", 11.0, 0.0, 10.0)
        );
        assert_eq!(
            MeshError::out_of_range(&STEP_WIDTH_PARAM, -1.0),
            MeshError::invalid_parameter("step_width", -1.0, 0.0, 10.0)
        );
    }

    #[test]
    fn test_unknown_operator_message() {
        let err = MeshError::unknown_operator("mesh.nothing");
        assert_eq!(err.to_string(), "Unknown operator: mesh.nothing");
    }
}
