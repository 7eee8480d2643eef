//! Series and parallel resistor networks.

use crate::calc::CalcError;
use crate::units::parse_resistance_value;

/// Keep only finite, strictly positive resistances.
fn valid_resistances(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .copied()
        .filter(|r| r.is_finite() && *r > 0.0)
        .collect()
}

/// Parse raw input fields; blank or unreadable fields are dropped.
pub fn parse_resistances<S: AsRef<str>>(inputs: &[S]) -> Vec<f64> {
    inputs
        .iter()
        .filter_map(|s| parse_resistance_value(s.as_ref()))
        .collect()
}

/// Rt = R1 + R2 + ... + Rn over the valid entries.
pub fn series_resistance(values: &[f64]) -> Result<f64, CalcError> {
    let valid = valid_resistances(values);
    if valid.is_empty() {
        return Err(CalcError::NoValidInput);
    }
    Ok(valid.iter().sum())
}

/// 1/Rt = 1/R1 + 1/R2 + ... + 1/Rn over the valid entries.
pub fn parallel_resistance(values: &[f64]) -> Result<f64, CalcError> {
    let valid = valid_resistances(values);
    if valid.is_empty() {
        return Err(CalcError::NoValidInput);
    }
    let reciprocal_sum: f64 = valid.iter().map(|r| 1.0 / r).sum();
    Ok(1.0 / reciprocal_sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series() {
        let total = series_resistance(&[220.0, 330.0, 1000.0]).unwrap();
        assert!((total - 1550.0).abs() < 0.01);
    }

    #[test]
    fn test_parallel() {
        let total = parallel_resistance(&[100.0, 100.0]).unwrap();
        assert!((total - 50.0).abs() < 0.01);

        let total = parallel_resistance(&[1000.0, 1000.0, 1000.0]).unwrap();
        assert!((total - 333.33).abs() < 0.01);
    }

    #[test]
    fn test_invalid_entries_are_skipped() {
        let total = series_resistance(&[0.0, -10.0, f64::NAN, 47.0]).unwrap();
        assert_eq!(total, 47.0);
    }

    #[test]
    fn test_no_valid_input() {
        assert_eq!(parallel_resistance(&[]), Err(CalcError::NoValidInput));
        assert_eq!(series_resistance(&[]), Err(CalcError::NoValidInput));
        assert_eq!(parallel_resistance(&[0.0, -1.0]), Err(CalcError::NoValidInput));
    }

    #[test]
    fn test_parse_resistances() {
        let values = parse_resistances(&["4k7", "", "abc", "330"]);
        assert_eq!(values.len(), 2);
        assert!((values[0] - 4700.0).abs() < 1e-9);
    }
}
