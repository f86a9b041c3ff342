//! Parsing of `WEIGHTxREPS` set specs from the command line.

use anyhow::{bail, Context, Result};

use crate::storage::config::Units;
use crate::workouts::types::ExerciseSet;

/// Parse a set spec like `80x5` or `22.5x8`.
///
/// The weight is interpreted in the configured unit system and stored in
/// kilograms.
pub fn parse_set_spec(spec: &str, units: Units) -> Result<ExerciseSet> {
    let Some((weight, reps)) = spec.split_once(['x', 'X']) else {
        bail!("invalid set '{spec}', expected WEIGHTxREPS (e.g. 80x5)");
    };

    let weight: f64 = weight
        .trim()
        .parse()
        .with_context(|| format!("invalid weight in set '{spec}'"))?;
    let reps: u32 = reps
        .trim()
        .parse()
        .with_context(|| format!("invalid reps in set '{spec}'"))?;

    let weight_kg = match units {
        Units::Metric => weight,
        Units::Imperial => weight / 2.20462,
    };

    Ok(ExerciseSet::new(weight_kg, reps))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metric_spec() {
        let set = parse_set_spec("80x5", Units::Metric).unwrap();
        assert_eq!(set.weight_kg, 80.0);
        assert_eq!(set.reps, 5);

        let set = parse_set_spec("22.5X8", Units::Metric).unwrap();
        assert_eq!(set.weight_kg, 22.5);
        assert_eq!(set.reps, 8);
    }

    #[test]
    fn test_parse_imperial_converts_to_kg() {
        let set = parse_set_spec("220.462x3", Units::Imperial).unwrap();
        assert!((set.weight_kg - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_parse_rejects_malformed_specs() {
        assert!(parse_set_spec("80", Units::Metric).is_err());
        assert!(parse_set_spec("x5", Units::Metric).is_err());
        assert!(parse_set_spec("80x", Units::Metric).is_err());
        assert!(parse_set_spec("80xfive", Units::Metric).is_err());
    }
}
