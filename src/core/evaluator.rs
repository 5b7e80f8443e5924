//! The capability every sensor evaluator provides

use std::sync::Arc;

use crate::types::{EvalError, EvalResult, ReferenceEnvironment, Verdict};
use crate::LINE_PARTS;

/// Grades one sensor from its raw reading lines.
///
/// Implementations receive the trimmed lines of one sensor block and must
/// reject an empty slice on their own.
pub trait SensorEvaluator: Send + Sync {
    /// Evaluate a sensor against the reference environment
    fn evaluate(&self, reference: &ReferenceEnvironment, readings: &[String]) -> EvalResult<Verdict>;
}

/// Shared evaluators can be injected while the caller keeps a handle
impl<T: SensorEvaluator + ?Sized> SensorEvaluator for Arc<T> {
    fn evaluate(&self, reference: &ReferenceEnvironment, readings: &[String]) -> EvalResult<Verdict> {
        (**self).evaluate(reference, readings)
    }
}

/// Split a reading into its value token.
/// The first token is a timestamp in any format and is never inspected.
pub(crate) fn reading_value(line: &str) -> EvalResult<&str> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != LINE_PARTS {
        return Err(EvalError::MalformedReading { line: line.to_string() });
    }
    Ok(parts[1])
}

/// Fail fast on an empty block
pub(crate) fn ensure_readings(readings: &[String], sensor: &'static str) -> EvalResult<()> {
    if readings.is_empty() {
        return Err(EvalError::EmptyReadings { sensor });
    }
    Ok(())
}
