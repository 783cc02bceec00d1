//! # Config Crate
//!
//! Centralized configuration constants for the step pyramid generator.
//! Parameter bounds, defaults and the fixed per-layer topology counts are
//! defined here so the mesh crate and any host glue agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_STEP_COUNT, MAX_STEP_COUNT, MIN_STEP_COUNT};
//!
//! let requested: u32 = 42;
//! let steps = requested.clamp(MIN_STEP_COUNT, MAX_STEP_COUNT);
//! assert_eq!(steps, MAX_STEP_COUNT);
//! assert!(DEFAULT_STEP_COUNT <= MAX_STEP_COUNT);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host-Compatible**: Bounds and defaults match the host property panel
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
