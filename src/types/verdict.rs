//! Verdicts assigned to evaluated sensors

use serde::{Deserialize, Serialize};

/// Categorical outcome of evaluating one sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Thermometer: mean on target, tight spread
    #[serde(rename = "ultra precise")]
    UltraPrecise,
    /// Thermometer: mean on target, moderate spread
    #[serde(rename = "very precise")]
    VeryPrecise,
    /// Thermometer: everything else
    #[serde(rename = "precise")]
    Precise,
    /// Humidity / CO: every reading within tolerance
    #[serde(rename = "keep")]
    Keep,
    /// Humidity / CO: at least one reading out of tolerance
    #[serde(rename = "discard")]
    Discard,
}

impl Verdict {
    /// Canonical string written to reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UltraPrecise => "ultra precise",
            Self::VeryPrecise => "very precise",
            Self::Precise => "precise",
            Self::Keep => "keep",
            Self::Discard => "discard",
        }
    }

    /// Can the sensor's readings be relied on?
    pub fn is_trusted(&self) -> bool {
        !matches!(self, Self::Discard)
    }

    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            Self::UltraPrecise => "\x1b[32m", // Green
            Self::VeryPrecise => "\x1b[36m",  // Cyan
            Self::Precise => "\x1b[33m",      // Yellow
            Self::Keep => "\x1b[32m",         // Green
            Self::Discard => "\x1b[31m",      // Red
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
