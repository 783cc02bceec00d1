//! # Configuration Constants
//!
//! Centralized constants for the step pyramid generator.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Parameter Bounds**: Ranges accepted by the configuration layer
//! - **Defaults**: Values a freshly opened property panel starts with
//! - **Topology**: Fixed vertex/face counts per pyramid layer

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// PARAMETER BOUNDS
// =============================================================================

/// Lower bound of the base size (exclusive).
///
/// A pyramid needs a footprint with positive area.
pub const MIN_BASE_SIZE: f64 = 0.0;

/// Upper bound of the base size (inclusive).
///
/// # Example
///
/// ```rust
/// use config::constants::{MAX_BASE_SIZE, MIN_BASE_SIZE};
///
/// let size = 25.0_f64;
/// assert!(size > MAX_BASE_SIZE);
/// assert!(MAX_BASE_SIZE > MIN_BASE_SIZE);
/// ```
pub const MAX_BASE_SIZE: f64 = 20.0;

/// Lower bound of the step height (exclusive).
pub const MIN_STEP_HEIGHT: f64 = 0.0;

/// Upper bound of the step height (inclusive).
pub const MAX_STEP_HEIGHT: f64 = 10.0;

/// Lower bound of the step width (inclusive).
///
/// Zero is allowed and produces a straight prism.
pub const MIN_STEP_WIDTH: f64 = 0.0;

/// Upper bound of the step width (inclusive).
pub const MAX_STEP_WIDTH: f64 = 10.0;

/// Minimum number of steps.
pub const MIN_STEP_COUNT: u32 = 1;

/// Maximum number of steps.
///
/// # Example
///
/// ```rust
/// use config::constants::{MAX_STEP_COUNT, MIN_STEP_COUNT};
///
/// assert!((MIN_STEP_COUNT..=MAX_STEP_COUNT).contains(&5));
/// ```
pub const MAX_STEP_COUNT: u32 = 20;

// =============================================================================
// DEFAULTS
// =============================================================================

/// Default edge length of the pyramid footprint.
pub const DEFAULT_BASE_SIZE: f64 = 2.0;

/// Default height of each step.
pub const DEFAULT_STEP_HEIGHT: f64 = 0.2;

/// Default inset of each step on every side.
pub const DEFAULT_STEP_WIDTH: f64 = 0.2;

/// Default number of steps.
pub const DEFAULT_STEP_COUNT: u32 = 5;

/// Whether the top ring is collapsed to an apex by default.
pub const DEFAULT_POINT_TOP: bool = false;

// =============================================================================
// TOPOLOGY CONSTANTS
// =============================================================================

/// Vertices emitted for every layer (a bottom ring and a top ring of four).
pub const VERTICES_PER_LAYER: usize = 8;

/// Side faces emitted for every layer (front, back, left, right).
pub const SIDE_FACES_PER_LAYER: usize = 4;

/// Connector faces bridging two consecutive layers.
pub const CONNECTOR_FACES_PER_JOINT: usize = 4;

/// Top cap plus bottom cap.
pub const CAP_FACES: usize = 2;

// =============================================================================
// PARAMETER SCHEMA
// =============================================================================

/// Accepted values and default of one pyramid parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamRange {
    /// Real value in `min..=max`, or `min < value <= max` when the lower
    /// bound is exclusive.
    Float {
        min: f64,
        max: f64,
        min_inclusive: bool,
        default: f64,
    },
    /// Integer value in `min..=max`.
    Int { min: u32, max: u32, default: u32 },
    /// On/off switch.
    Bool { default: bool },
}

/// Panel metadata for one pyramid parameter: the field it maps to, the
/// label and tooltip a host shows, and its accepted range.
///
/// # Example
///
/// ```rust
/// use config::constants::{PYRAMID_PARAMS, STEP_COUNT_PARAM};
///
/// assert_eq!(STEP_COUNT_PARAM.label, "Number Steps");
/// assert!(STEP_COUNT_PARAM.accepts(5.0));
/// assert!(!STEP_COUNT_PARAM.accepts(2.5));
/// assert_eq!(PYRAMID_PARAMS.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    /// Field name in serialized configuration
    pub name: &'static str,
    /// Short panel label
    pub label: &'static str,
    /// Tooltip text
    pub description: &'static str,
    pub range: ParamRange,
}

impl ParamSpec {
    /// Whether `value` lies inside this parameter's range. NaN never does;
    /// switches accept anything.
    pub fn accepts(&self, value: f64) -> bool {
        match self.range {
            ParamRange::Float {
                min,
                max,
                min_inclusive,
                ..
            } => {
                let above_min = if min_inclusive { value >= min } else { value > min };
                above_min && value <= max
            }
            ParamRange::Int { min, max, .. } => {
                value.fract() == 0.0 && value >= f64::from(min) && value <= f64::from(max)
            }
            ParamRange::Bool { .. } => true,
        }
    }

    /// Forces `value` into range the way a panel slider does. NaN and values
    /// at or below an exclusive lower bound fall back to the default.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::constants::{BASE_SIZE_PARAM, DEFAULT_BASE_SIZE};
    ///
    /// assert_eq!(BASE_SIZE_PARAM.clamp(-3.0), DEFAULT_BASE_SIZE);
    /// assert_eq!(BASE_SIZE_PARAM.clamp(50.0), 20.0);
    /// ```
    pub fn clamp(&self, value: f64) -> f64 {
        match self.range {
            ParamRange::Float {
                min,
                max,
                min_inclusive,
                default,
            } => {
                if value.is_nan() || (!min_inclusive && value <= min) {
                    default
                } else {
                    value.clamp(min, max)
                }
            }
            ParamRange::Int { min, max, default } => {
                if value.is_nan() {
                    f64::from(default)
                } else {
                    value.round().clamp(f64::from(min), f64::from(max))
                }
            }
            ParamRange::Bool { .. } => value,
        }
    }
}

/// Base size parameter (`initialSize` on the panel).
pub const BASE_SIZE_PARAM: ParamSpec = ParamSpec {
    name: "base_size",
    label: "Initial Size",
    description: "Set the initial size at the pyramid base",
    range: ParamRange::Float {
        min: MIN_BASE_SIZE,
        max: MAX_BASE_SIZE,
        min_inclusive: false,
        default: DEFAULT_BASE_SIZE,
    },
};

pub const STEP_HEIGHT_PARAM: ParamSpec = ParamSpec {
    name: "step_height",
    label: "Step Height",
    description: "How tall each of the steps will be.",
    range: ParamRange::Float {
        min: MIN_STEP_HEIGHT,
        max: MAX_STEP_HEIGHT,
        min_inclusive: false,
        default: DEFAULT_STEP_HEIGHT,
    },
};

pub const STEP_WIDTH_PARAM: ParamSpec = ParamSpec {
    name: "step_width",
    label: "Step Width",
    description: "How fast the steps come in towards a point",
    range: ParamRange::Float {
        min: MIN_STEP_WIDTH,
        max: MAX_STEP_WIDTH,
        min_inclusive: true,
        default: DEFAULT_STEP_WIDTH,
    },
};

pub const STEP_COUNT_PARAM: ParamSpec = ParamSpec {
    name: "step_count",
    label: "Number Steps",
    description: "",
    range: ParamRange::Int {
        min: MIN_STEP_COUNT,
        max: MAX_STEP_COUNT,
        default: DEFAULT_STEP_COUNT,
    },
};

pub const POINT_TOP_PARAM: ParamSpec = ParamSpec {
    name: "point_top",
    label: "Point the Top",
    description: "",
    range: ParamRange::Bool {
        default: DEFAULT_POINT_TOP,
    },
};

/// Every pyramid parameter, in panel order.
pub const PYRAMID_PARAMS: [ParamSpec; 5] = [
    BASE_SIZE_PARAM,
    STEP_HEIGHT_PARAM,
    STEP_WIDTH_PARAM,
    STEP_COUNT_PARAM,
    POINT_TOP_PARAM,
];

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Number of vertices a pyramid with `step_count` layers has.
///
/// # Example
///
/// ```rust
/// use config::constants::expected_vertex_count;
///
/// assert_eq!(expected_vertex_count(5), 40);
/// ```
#[inline]
pub fn expected_vertex_count(step_count: u32) -> usize {
    VERTICES_PER_LAYER * step_count as usize
}

/// Number of quad faces a pyramid with `step_count` layers has.
///
/// Zero layers produce no faces at all.
///
/// # Example
///
/// ```rust
/// use config::constants::expected_face_count;
///
/// assert_eq!(expected_face_count(1), 6);
/// assert_eq!(expected_face_count(5), 38);
/// assert_eq!(expected_face_count(0), 0);
/// ```
pub fn expected_face_count(step_count: u32) -> usize {
    if step_count == 0 {
        return 0;
    }
    let steps = step_count as usize;
    SIDE_FACES_PER_LAYER * steps + CONNECTOR_FACES_PER_JOINT * (steps - 1) + CAP_FACES
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
