//! Reference room environment

use serde::{Deserialize, Serialize};

/// The stable environment a room was held at while sensors were logging.
///
/// Parsed once from the first log line and shared read-only with every
/// evaluator during a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEnvironment {
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Relative humidity, 0-100 inclusive
    pub humidity: f64,
    /// Carbon monoxide concentration in ppm
    pub co_concentration: i32,
}

impl ReferenceEnvironment {
    /// Create a reference environment from known values
    pub fn new(temperature: f64, humidity: f64, co_concentration: i32) -> Self {
        Self {
            temperature,
            humidity,
            co_concentration,
        }
    }
}

impl std::fmt::Display for ReferenceEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            crate::REFERENCE_TAG,
            self.temperature,
            self.humidity,
            self.co_concentration
        )
    }
}
