//! Core modules for Homesense

pub mod reference;
pub mod evaluator;
pub mod thermometer;
pub mod humidity;
pub mod monoxide;
pub mod log_evaluator;

pub use reference::parse_reference;
pub use evaluator::SensorEvaluator;
pub use thermometer::ThermometerEvaluator;
pub use humidity::HumidityEvaluator;
pub use monoxide::MonoxideEvaluator;
pub use log_evaluator::{LogEvaluator, evaluate_log};
