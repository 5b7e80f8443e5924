//! Homesense: evaluates home sensor logs against a reference environment
//!
//! Log text → reference parser → per-sensor blocks → evaluators → verdicts

pub mod core;
pub mod types;

pub use crate::core::{evaluate_log, LogEvaluator};
pub use crate::types::{EvalError, EvalResult, ReferenceEnvironment, SensorResults, SensorType, Verdict};

// =============================================================================
// LOG FORMAT
// =============================================================================

/// Tag that opens the first line of every log
pub const REFERENCE_TAG: &str = "reference";

/// Tokens on the reference line: tag, temperature, humidity, CO
pub const REFERENCE_PARTS: usize = 4;

/// Tokens on every header and reading line
pub const LINE_PARTS: usize = 2;

// =============================================================================
// THERMOMETER TIERS
// =============================================================================

/// Max |reference - mean| for "ultra precise" (°C)
pub const ULTRA_PRECISE_MEAN_TOLERANCE: f64 = 0.5;

/// Standard deviation must be strictly below this for "ultra precise" (°C)
pub const ULTRA_PRECISE_STD_DEV_LIMIT: f64 = 3.0;

/// Max |reference - mean| for "very precise" (°C)
/// Same bound as ultra precise; only the deviation ceiling differs
pub const VERY_PRECISE_MEAN_TOLERANCE: f64 = 0.5;

/// Standard deviation must be strictly below this for "very precise" (°C)
pub const VERY_PRECISE_STD_DEV_LIMIT: f64 = 5.0;

// =============================================================================
// KEEP / DISCARD TOLERANCES
// =============================================================================

/// Max deviation of a humidity reading (percentage points)
pub const HUMIDITY_TOLERANCE: f64 = 1.0;

/// Max deviation of a CO reading (ppm)
pub const CO_TOLERANCE_PPM: i64 = 3;

/// Valid humidity range (percent)
pub const HUMIDITY_MIN: f64 = 0.0;
pub const HUMIDITY_MAX: f64 = 100.0;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
