//! Errors raised while evaluating a sensor log
//!
//! Every failure aborts the whole evaluation; no partial results are returned.

use thiserror::Error;

/// Result type alias for log evaluation
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur while parsing or evaluating a log
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Log text missing or blank
    #[error("Log file must not be empty")]
    EmptyInput,

    /// No usable first line
    #[error("Log file must contain a first line")]
    MissingReferenceLine,

    /// First line is not `reference <temp> <humidity> <co>`
    #[error("Log file first line must represent a room environment: {line:?}")]
    InvalidReferenceLine { line: String },

    /// A header or reading line without exactly two parts
    #[error("Line {line_number} did not have the expected format: {line:?}")]
    MalformedLine { line_number: usize, line: String },

    /// Header resolved to a type no evaluator handles
    #[error("Sensor type should not be unknown: {0}")]
    UnknownSensorType(String),

    /// Evaluator called without readings
    #[error("Sensor {sensor} should have at least one reading")]
    EmptyReadings { sensor: &'static str },

    /// Reading line without exactly two parts
    #[error("Reading should have 2 parts separated by whitespace: {line:?}")]
    MalformedReading { line: String },

    /// Reading value unparsable or out of range
    #[error("Read value must be {expected}: {line:?}")]
    InvalidReadingValue { line: String, expected: &'static str },
}

impl EvalError {
    /// Stable code string (for parseable output and logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "E001_EMPTY_INPUT",
            Self::MissingReferenceLine => "E002_MISSING_REFERENCE_LINE",
            Self::InvalidReferenceLine { .. } => "E003_INVALID_REFERENCE_LINE",
            Self::MalformedLine { .. } => "E004_MALFORMED_LINE",
            Self::UnknownSensorType(_) => "E005_UNKNOWN_SENSOR_TYPE",
            Self::EmptyReadings { .. } => "E006_EMPTY_READINGS",
            Self::MalformedReading { .. } => "E007_MALFORMED_READING",
            Self::InvalidReadingValue { .. } => "E008_INVALID_READING_VALUE",
        }
    }

    /// Is this a problem with the log content rather than with the caller?
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::UnknownSensorType(_) | Self::EmptyReadings { .. })
    }
}
