//! Sensor types and the transient per-sensor block

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::EvalError;

/// The three kinds of sensor a log can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorType {
    /// Temperature sensor, graded by precision
    Thermometer,
    /// Relative humidity sensor, kept or discarded
    Humidity,
    /// Carbon monoxide detector, kept or discarded
    Monoxide,
}

impl SensorType {
    /// All sensor types, in log-tag order
    pub const ALL: [SensorType; 3] = [Self::Thermometer, Self::Humidity, Self::Monoxide];

    /// Tag used on header lines
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Thermometer => "thermometer",
            Self::Humidity => "humidity",
            Self::Monoxide => "monoxide",
        }
    }

    /// Resolve a header tag, ignoring ASCII case.
    /// Anything else is not a header.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|sensor_type| sensor_type.tag().eq_ignore_ascii_case(tag))
    }
}

impl std::fmt::Display for SensorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for SensorType {
    type Err = EvalError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::from_tag(tag).ok_or_else(|| EvalError::UnknownSensorType(tag.to_string()))
    }
}

/// One sensor's header plus the reading lines collected under it
#[derive(Debug, Clone, PartialEq)]
pub struct SensorBlock {
    /// Name from the header line
    pub name: String,
    /// Type from the header line
    pub sensor_type: SensorType,
    /// Trimmed reading lines, in log order
    pub readings: Vec<String>,
    /// 1-based line number of the header
    pub header_line: usize,
}

impl SensorBlock {
    /// Open a block with no readings yet
    pub fn new(name: impl Into<String>, sensor_type: SensorType, header_line: usize) -> Self {
        Self {
            name: name.into(),
            sensor_type,
            readings: Vec::new(),
            header_line,
        }
    }

    /// Append a reading line
    pub fn push(&mut self, reading: impl Into<String>) {
        self.readings.push(reading.into());
    }

    /// Blocks without readings are dropped, not evaluated
    pub fn has_readings(&self) -> bool {
        !self.readings.is_empty()
    }
}
