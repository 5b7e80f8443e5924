//! Carbon monoxide evaluator: keeps a detector only if every reading is within tolerance

use tracing::trace;

use crate::core::evaluator::{ensure_readings, reading_value, SensorEvaluator};
use crate::types::{EvalError, EvalResult, ReferenceEnvironment, Verdict};
use crate::CO_TOLERANCE_PPM;

/// Keeps or discards carbon monoxide detectors
#[derive(Debug, Default, Clone, Copy)]
pub struct MonoxideEvaluator;

impl MonoxideEvaluator {
    /// Create new evaluator
    pub fn new() -> Self {
        Self
    }
}

impl SensorEvaluator for MonoxideEvaluator {
    fn evaluate(&self, reference: &ReferenceEnvironment, readings: &[String]) -> EvalResult<Verdict> {
        ensure_readings(readings, "monoxide")?;

        for line in readings {
            let ppm = reading_value(line)?
                .parse::<i32>()
                .map_err(|_| EvalError::InvalidReadingValue {
                    line: line.clone(),
                    expected: "an integer",
                })?;

            // Widened so i32 extremes cannot overflow
            let deviation = (i64::from(reference.co_concentration) - i64::from(ppm)).abs();
            trace!(ppm, deviation, "monoxide reading");

            if deviation > CO_TOLERANCE_PPM {
                return Ok(Verdict::Discard);
            }
        }

        Ok(Verdict::Keep)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> ReferenceEnvironment {
        ReferenceEnvironment::new(70.0, 45.0, 6)
    }

    fn readings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| format!("2007-04-05T22:00 {}", v)).collect()
    }

    #[test]
    fn test_empty_readings() {
        let result = MonoxideEvaluator::new().evaluate(&reference(), &[]);
        assert_eq!(result, Err(EvalError::EmptyReadings { sensor: "monoxide" }));
    }

    #[test]
    fn test_exactly_at_tolerance_keeps() {
        let result = MonoxideEvaluator::new().evaluate(&reference(), &readings(&["5", "7", "9", "3"]));
        assert_eq!(result, Ok(Verdict::Keep));
    }

    #[test]
    fn test_outside_tolerance_discards() {
        let result = MonoxideEvaluator::new().evaluate(&reference(), &readings(&["2", "4", "10", "8", "6"]));
        assert_eq!(result, Ok(Verdict::Discard));

        let result = MonoxideEvaluator::new().evaluate(&reference(), &readings(&["10"]));
        assert_eq!(result, Ok(Verdict::Discard));
    }

    #[test]
    fn test_short_circuits_before_bad_value() {
        let result = MonoxideEvaluator::new().evaluate(&reference(), &readings(&["20", "lots"]));
        assert_eq!(result, Ok(Verdict::Discard));
    }

    #[test]
    fn test_non_integer_fails() {
        for value in ["6.0", "six", ""] {
            let lines = vec![format!("2007-04-05T22:00 {}", value)];
            let result = MonoxideEvaluator::new().evaluate(&reference(), &lines);
            assert!(result.is_err(), "Expected {:?} to be rejected", value);
        }
    }

    #[test]
    fn test_negative_values_are_accepted() {
        let env = ReferenceEnvironment::new(20.0, 50.0, -2);
        let result = MonoxideEvaluator::new().evaluate(&env, &readings(&["-5", "1"]));
        assert_eq!(result, Ok(Verdict::Keep));
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let env = ReferenceEnvironment::new(20.0, 50.0, i32::MIN);
        let max = i32::MAX.to_string();
        let result = MonoxideEvaluator::new().evaluate(&env, &readings(&[max.as_str()]));
        assert_eq!(result, Ok(Verdict::Discard));
    }
}
