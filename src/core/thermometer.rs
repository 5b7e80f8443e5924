//! Thermometer evaluator: grades precision from mean offset and spread

use tracing::trace;

use crate::core::evaluator::{ensure_readings, reading_value, SensorEvaluator};
use crate::types::{EvalError, EvalResult, ReferenceEnvironment, Verdict};
use crate::{
    ULTRA_PRECISE_MEAN_TOLERANCE, ULTRA_PRECISE_STD_DEV_LIMIT,
    VERY_PRECISE_MEAN_TOLERANCE, VERY_PRECISE_STD_DEV_LIMIT,
};

/// Grades thermometers as ultra precise, very precise or precise
#[derive(Debug, Default, Clone, Copy)]
pub struct ThermometerEvaluator;

impl ThermometerEvaluator {
    /// Create new evaluator
    pub fn new() -> Self {
        Self
    }

    /// Pick the tier for a mean offset and standard deviation.
    /// First matching tier wins; deviation ceilings are strict.
    pub fn classify(mean_inaccuracy: f64, std_dev: f64) -> Verdict {
        if mean_inaccuracy <= ULTRA_PRECISE_MEAN_TOLERANCE && std_dev < ULTRA_PRECISE_STD_DEV_LIMIT {
            Verdict::UltraPrecise
        } else if mean_inaccuracy <= VERY_PRECISE_MEAN_TOLERANCE && std_dev < VERY_PRECISE_STD_DEV_LIMIT {
            Verdict::VeryPrecise
        } else {
            Verdict::Precise
        }
    }
}

impl SensorEvaluator for ThermometerEvaluator {
    fn evaluate(&self, reference: &ReferenceEnvironment, readings: &[String]) -> EvalResult<Verdict> {
        ensure_readings(readings, "thermometer")?;

        let values = readings
            .iter()
            .map(|line| {
                reading_value(line)?
                    .parse::<f64>()
                    .map_err(|_| EvalError::InvalidReadingValue {
                        line: line.clone(),
                        expected: "a decimal temperature",
                    })
            })
            .collect::<EvalResult<Vec<f64>>>()?;

        let (mean, std_dev) = mean_and_std_dev(&values);
        let mean_inaccuracy = (reference.temperature - mean).abs();
        trace!(mean, std_dev, mean_inaccuracy, "thermometer statistics");

        Ok(Self::classify(mean_inaccuracy, std_dev))
    }
}

/// Mean and sample standard deviation from running sums of x and x².
///
/// A single value has a deviation of exactly 0. Cancellation can push the
/// variance a hair below zero for identical values, giving a NaN deviation
/// that fails every tier ceiling.
pub fn mean_and_std_dev(values: &[f64]) -> (f64, f64) {
    let (sum, sum_sq) = values
        .iter()
        .fold((0.0_f64, 0.0_f64), |(s, sq), &x| (s + x, sq + x * x));

    let n = values.len() as f64;
    let mean = sum / n;

    if values.len() == 1 {
        return (mean, 0.0);
    }

    let variance = (sum_sq - (sum * sum) / n) * (1.0 / (n - 1.0));
    (mean, variance.sqrt())
}

// =============================================================================
// TESTS
// =============================================================================
