//! Core types for Homesense

mod environment;
mod sensor;
mod verdict;
mod error;
mod results;
mod report;

pub use environment::ReferenceEnvironment;
pub use sensor::{SensorType, SensorBlock};
pub use verdict::Verdict;
pub use error::{EvalError, EvalResult};
pub use results::SensorResults;
pub use report::EvaluationReport;
