//! Report envelope for CLI and machine output

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ReferenceEnvironment, SensorResults, Verdict};

/// One evaluated log, with the context it was evaluated against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// When the evaluation finished
    pub timestamp: DateTime<Utc>,
    /// Crate version that produced the report
    pub version: String,
    /// Reference environment from the first log line
    pub reference: ReferenceEnvironment,
    /// Verdict per sensor
    pub sensors: SensorResults,
}

impl EvaluationReport {
    /// Create new report
    pub fn new(reference: ReferenceEnvironment, sensors: SensorResults) -> Self {
        Self {
            timestamp: Utc::now(),
            version: crate::VERSION.to_string(),
            reference,
            sensors,
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let reset = Verdict::color_reset();
        self.sensors
            .iter()
            .map(|(name, verdict)| format!("{}{}: {}{}", verdict.color_code(), name, verdict, reset))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        self.sensors
            .iter()
            .map(|(name, verdict)| format!("{}: {}", name, verdict))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One-line tally of the evaluation
    pub fn summary(&self) -> String {
        format!(
            "{} sensors evaluated | {} trusted | {} discarded",
            self.sensors.len(),
            self.sensors.trusted_count(),
            self.sensors.len() - self.sensors.trusted_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EvaluationReport {
        let sensors = vec![("temp-1", Verdict::Precise), ("hum-2", Verdict::Discard)]
            .into_iter()
            .collect();
        EvaluationReport::new(ReferenceEnvironment::new(70.0, 45.0, 6), sensors)
    }

    #[test]
    fn test_parseable_string_lists_every_sensor() {
        assert_eq!(sample().to_parseable_string(), "hum-2: discard\ntemp-1: precise");
    }

    #[test]
    fn test_terminal_string_is_colored() {
        let out = sample().to_terminal_string();
        assert!(out.contains("\x1b[31mhum-2: discard\x1b[0m"));
    }

    #[test]
    fn test_summary_counts() {
        assert_eq!(sample().summary(), "2 sensors evaluated | 1 trusted | 1 discarded");
    }

    #[test]
    fn test_json_envelope_fields() {
        let json: serde_json::Value = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["version"], crate::VERSION);
        assert_eq!(json["reference"]["co_concentration"], 6);
        assert_eq!(json["sensors"]["temp-1"], "precise");
        assert!(json["timestamp"].is_string());
    }
}
