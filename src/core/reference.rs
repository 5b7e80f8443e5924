//! Reference environment parser
//!
//! Line format: `reference <temperature> <humidity 0-100> <co ppm>`

use std::str::FromStr;

use crate::types::{EvalError, ReferenceEnvironment};
use crate::{HUMIDITY_MAX, HUMIDITY_MIN, REFERENCE_PARTS, REFERENCE_TAG};

/// Parse the first log line into a reference environment.
/// Any violation yields `None`; there is no partial result.
pub fn parse_reference(line: &str) -> Option<ReferenceEnvironment> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != REFERENCE_PARTS {
        return None;
    }

    if !parts[0].eq_ignore_ascii_case(REFERENCE_TAG) {
        return None;
    }

    let temperature = parts[1].parse::<f64>().ok().filter(|t| t.is_finite())?;

    let humidity = parts[2]
        .parse::<f64>()
        .ok()
        .filter(|h| (HUMIDITY_MIN..=HUMIDITY_MAX).contains(h))?;

    let co_concentration = parts[3].parse::<i32>().ok()?;

    Some(ReferenceEnvironment::new(temperature, humidity, co_concentration))
}

impl FromStr for ReferenceEnvironment {
    type Err = EvalError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse_reference(line).ok_or_else(|| EvalError::InvalidReferenceLine {
            line: line.trim().to_string(),
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
