//! Humidity evaluator: keeps a sensor only if every reading is within tolerance

use tracing::trace;

use crate::core::evaluator::{ensure_readings, reading_value, SensorEvaluator};
use crate::types::{EvalError, EvalResult, ReferenceEnvironment, Verdict};
use crate::{HUMIDITY_MAX, HUMIDITY_MIN, HUMIDITY_TOLERANCE};

/// Keeps or discards humidity sensors
#[derive(Debug, Default, Clone, Copy)]
pub struct HumidityEvaluator;

impl HumidityEvaluator {
    /// Create new evaluator
    pub fn new() -> Self {
        Self
    }
}

impl SensorEvaluator for HumidityEvaluator {
    fn evaluate(&self, reference: &ReferenceEnvironment, readings: &[String]) -> EvalResult<Verdict> {
        ensure_readings(readings, "humidity")?;

        for line in readings {
            let humidity = reading_value(line)?
                .parse::<f64>()
                .ok()
                .filter(|h| (HUMIDITY_MIN..=HUMIDITY_MAX).contains(h))
                .ok_or_else(|| EvalError::InvalidReadingValue {
                    line: line.clone(),
                    expected: "a percentage",
                })?;

            let deviation = (reference.humidity - humidity).abs();
            trace!(humidity, deviation, "humidity reading");

            // One bad reading condemns the sensor
            if deviation > HUMIDITY_TOLERANCE {
                return Ok(Verdict::Discard);
            }
        }

        Ok(Verdict::Keep)
    }
}

// =============================================================================
// TESTS
// =============================================================================
