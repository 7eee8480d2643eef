//! Capacitive and inductive reactance.

use std::f64::consts::PI;

use crate::calc::{positive_input, CalcError};

/// Xc = 1 / (2πfC), in Ohms.
pub fn capacitive_reactance(frequency: Option<f64>, capacitance: Option<f64>) -> Result<f64, CalcError> {
    let f = positive_input("frequency", frequency)?;
    let c = positive_input("capacitance", capacitance)?;
    Ok(1.0 / (2.0 * PI * f * c))
}

/// XL = 2πfL, in Ohms.
pub fn inductive_reactance(frequency: Option<f64>, inductance: Option<f64>) -> Result<f64, CalcError> {
    let f = positive_input("frequency", frequency)?;
    let l = positive_input("inductance", inductance)?;
    Ok(2.0 * PI * f * l)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacitive_reactance() {
        // 1 kHz through 1 uF is about 159.15 Ω
        let xc = capacitive_reactance(Some(1_000.0), Some(1e-6)).unwrap();
        assert!((xc - 159.15).abs() < 0.01);
    }

    #[test]
    fn test_inductive_reactance() {
        // 50 Hz through 100 mH is about 31.42 Ω
        let xl = inductive_reactance(Some(50.0), Some(0.1)).unwrap();
        assert!((xl - 31.42).abs() < 0.01);
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(capacitive_reactance(Some(0.0), Some(1e-6)).is_err());
        assert!(capacitive_reactance(Some(50.0), None).is_err());
        assert!(inductive_reactance(Some(-1.0), Some(0.1)).is_err());
    }
}
