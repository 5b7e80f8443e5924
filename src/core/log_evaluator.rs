//! Log scanner: splits a log into sensor blocks and dispatches each block
//!
//! Format:
//! - line 1: `reference <temperature> <humidity> <co>`
//! - header: `<thermometer|humidity|monoxide> <name>`
//! - reading: `<timestamp> <value>`, belonging to the last header

use tracing::debug;

use crate::core::{HumidityEvaluator, MonoxideEvaluator, SensorEvaluator, ThermometerEvaluator};
use crate::types::{
    EvalError, EvalResult, EvaluationReport, ReferenceEnvironment,
    SensorBlock, SensorResults, SensorType,
};
use crate::LINE_PARTS;

/// Evaluates whole logs with one evaluator per sensor type
pub struct LogEvaluator {
    thermometer: Box<dyn SensorEvaluator>,
    humidity: Box<dyn SensorEvaluator>,
    monoxide: Box<dyn SensorEvaluator>,
}

impl Default for LogEvaluator {
    fn default() -> Self {
        Self::new(ThermometerEvaluator::new(), HumidityEvaluator::new(), MonoxideEvaluator::new())
    }
}

impl std::fmt::Debug for LogEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogEvaluator").finish_non_exhaustive()
    }
}

impl LogEvaluator {
    /// Create with explicit evaluators
    pub fn new(
        thermometer: impl SensorEvaluator + 'static,
        humidity: impl SensorEvaluator + 'static,
        monoxide: impl SensorEvaluator + 'static,
    ) -> Self {
        Self {
            thermometer: Box::new(thermometer),
            humidity: Box::new(humidity),
            monoxide: Box::new(monoxide),
        }
    }

    /// Evaluate a log and return the verdict for every sensor with readings
    pub fn evaluate(&self, text: &str) -> EvalResult<SensorResults> {
        self.scan(text).map(|(_, results)| results)
    }

    /// Evaluate a log and wrap the verdicts with their reference environment
    pub fn evaluate_report(&self, text: &str) -> EvalResult<EvaluationReport> {
        let (reference, results) = self.scan(text)?;
        Ok(EvaluationReport::new(reference, results))
    }

    fn scan(&self, text: &str) -> EvalResult<(ReferenceEnvironment, SensorResults)> {
        if text.trim().is_empty() {
            return Err(EvalError::EmptyInput);
        }

        let mut lines = text.lines();
        let first = lines
            .next()
            .filter(|line| !line.trim().is_empty())
            .ok_or(EvalError::MissingReferenceLine)?;
        let reference: ReferenceEnvironment = first.parse()?;
        debug!(%reference, "parsed reference environment");

        let mut results = SensorResults::new();
        let mut current: Option<SensorBlock> = None;

        for (index, raw) in lines.enumerate() {
            let line_number = index + 2;
            let line = raw.trim();

            // Headers and readings alike are exactly "<label> <value>"
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() != LINE_PARTS {
                return Err(EvalError::MalformedLine {
                    line_number,
                    line: line.to_string(),
                });
            }

            match SensorType::from_tag(parts[0]) {
                Some(sensor_type) => {
                    if let Some(block) = current.take() {
                        self.finalize(block, &reference, &mut results)?;
                    }
                    debug!(name = parts[1], %sensor_type, line_number, "opened sensor block");
                    current = Some(SensorBlock::new(parts[1], sensor_type, line_number));
                }
                None => match current.as_mut() {
                    Some(block) => block.push(line),
                    None => debug!(line_number, "discarding reading before any sensor header"),
                },
            }
        }

        if let Some(block) = current {
            self.finalize(block, &reference, &mut results)?;
        }

        Ok((reference, results))
    }

    /// Evaluate a finished block and record its verdict
    fn finalize(
        &self,
        block: SensorBlock,
        reference: &ReferenceEnvironment,
        results: &mut SensorResults,
    ) -> EvalResult<()> {
        if !block.has_readings() {
            debug!(
                name = %block.name,
                header_line = block.header_line,
                "dropping sensor without readings"
            );
            return Ok(());
        }

        let verdict = self
            .evaluator_for(block.sensor_type)
            .evaluate(reference, &block.readings)?;
        debug!(
            name = %block.name,
            sensor_type = %block.sensor_type,
            header_line = block.header_line,
            readings = block.readings.len(),
            %verdict,
            "evaluated sensor"
        );

        if let Some(previous) = results.insert(block.name, verdict) {
            debug!(%previous, "replaced earlier verdict for repeated sensor name");
        }
        Ok(())
    }

    fn evaluator_for(&self, sensor_type: SensorType) -> &dyn SensorEvaluator {
        match sensor_type {
            SensorType::Thermometer => self.thermometer.as_ref(),
            SensorType::Humidity => self.humidity.as_ref(),
            SensorType::Monoxide => self.monoxide.as_ref(),
        }
    }
}

/// Evaluate a log with the stock evaluators
pub fn evaluate_log(text: &str) -> EvalResult<SensorResults> {
    LogEvaluator::default().evaluate(text)
}

// =============================================================================
// TESTS
// =============================================================================
