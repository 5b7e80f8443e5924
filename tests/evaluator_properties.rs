//! Property tests for the sensor evaluators
//!
//! - keep/discard does not depend on reading order
//! - tolerance boundaries are inclusive
//! - a single thermometer reading has no spread

use homesense::core::{HumidityEvaluator, MonoxideEvaluator, SensorEvaluator, ThermometerEvaluator};
use homesense::core::thermometer::mean_and_std_dev;
use homesense::types::{ReferenceEnvironment, Verdict};
use proptest::prelude::*;

fn lines<T: std::fmt::Display>(values: &[T]) -> Vec<String> {
    values.iter().map(|v| format!("2007-04-05T22:00 {}", v)).collect()
}

/// Verdict from checking every reading, without short-circuiting
fn exhaustive_humidity(reference: f64, values: &[f64]) -> Verdict {
    if values.iter().all(|v| (reference - v).abs() <= homesense::HUMIDITY_TOLERANCE) {
        Verdict::Keep
    } else {
        Verdict::Discard
    }
}

proptest! {
    #[test]
    fn humidity_verdict_is_order_independent(
        reference in 0.0f64..=100.0,
        mut values in prop::collection::vec(0.0f64..=100.0, 1..20),
    ) {
        let env = ReferenceEnvironment::new(20.0, reference, 0);
        let forward = HumidityEvaluator::new().evaluate(&env, &lines(&values)).unwrap();

        values.reverse();
        let backward = HumidityEvaluator::new().evaluate(&env, &lines(&values)).unwrap();

        prop_assert_eq!(forward, backward);
        prop_assert_eq!(forward, exhaustive_humidity(reference, &values));
    }

    #[test]
    fn monoxide_verdict_matches_max_deviation(
        reference in -1000i32..1000,
        offsets in prop::collection::vec(-10i32..=10, 1..20),
    ) {
        let env = ReferenceEnvironment::new(20.0, 50.0, reference);
        let values: Vec<i32> = offsets.iter().map(|o| reference + o).collect();
        let verdict = MonoxideEvaluator::new().evaluate(&env, &lines(&values)).unwrap();

        let max_deviation = offsets.iter().map(|o| o.abs()).max().unwrap();
        let expected = if max_deviation > 3 { Verdict::Discard } else { Verdict::Keep };
        prop_assert_eq!(verdict, expected);
    }

    #[test]
    fn monoxide_within_tolerance_keeps(
        reference in -1000i32..1000,
        offsets in prop::collection::vec(-3i32..=3, 1..20),
    ) {
        let env = ReferenceEnvironment::new(20.0, 50.0, reference);
        let values: Vec<i32> = offsets.iter().map(|o| reference + o).collect();
        let verdict = MonoxideEvaluator::new().evaluate(&env, &lines(&values)).unwrap();
        prop_assert_eq!(verdict, Verdict::Keep);
    }

    #[test]
    fn single_thermometer_reading_has_zero_spread(value in -100.0f64..200.0) {
        let (mean, std_dev) = mean_and_std_dev(&[value]);
        prop_assert_eq!(mean, value);
        prop_assert_eq!(std_dev, 0.0);
    }

    #[test]
    fn thermometer_on_target_single_reading_is_ultra_precise(
        reference in -50.0f64..50.0,
        offset in -0.49f64..0.49,
    ) {
        let env = ReferenceEnvironment::new(reference, 50.0, 0);
        let reading = format!("t {}", reference + offset);
        let verdict = ThermometerEvaluator::new().evaluate(&env, &[reading]).unwrap();
        prop_assert_eq!(verdict, Verdict::UltraPrecise);
    }

    #[test]
    fn thermometer_never_fails_on_valid_numbers(
        values in prop::collection::vec(-100.0f64..200.0, 1..30),
    ) {
        let env = ReferenceEnvironment::new(21.0, 50.0, 0);
        prop_assert!(ThermometerEvaluator::new().evaluate(&env, &lines(&values)).is_ok());
    }
}

#[test]
fn thermometer_tier_ceilings_are_strict() {
    assert_eq!(ThermometerEvaluator::classify(0.5, 3.0), Verdict::VeryPrecise);
    assert_eq!(ThermometerEvaluator::classify(0.5, 5.0), Verdict::Precise);
}
