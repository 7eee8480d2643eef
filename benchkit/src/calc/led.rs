//! Series resistor for driving an LED from a fixed supply.

use serde::{Deserialize, Serialize};

use crate::calc::CalcError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedInput {
    pub supply_voltage: Option<f64>,
    pub forward_voltage: Option<f64>,
    /// LED current in milliamps.
    pub current_ma: Option<f64>,
}

impl Default for LedInput {
    fn default() -> Self {
        Self {
            supply_voltage: Some(5.0),
            forward_voltage: Some(2.0),
            current_ma: Some(20.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedResistor {
    /// Required series resistance in Ohms.
    pub resistance: f64,
    /// Power dissipated in the resistor in Watts.
    pub power: f64,
}

impl LedResistor {
    pub fn resistance_display(&self) -> String {
        format!("{:.2}Ω", self.resistance)
    }

    pub fn power_display(&self) -> String {
        format!("{:.3}W", self.power)
    }
}

/// R = (Vs - Vf) / I and P = (Vs - Vf) * I.
pub fn led_resistor(input: &LedInput) -> Result<LedResistor, CalcError> {
    let (supply, forward, current_ma) =
        match (input.supply_voltage, input.forward_voltage, input.current_ma) {
            (Some(s), Some(f), Some(i)) if s.is_finite() && f.is_finite() && i.is_finite() => {
                (s, f, i)
            }
            _ => {
                return Err(CalcError::InvalidInput(
                    "supply voltage, forward voltage and current are required".to_string(),
                ))
            }
        };

    if current_ma <= 0.0 {
        return Err(CalcError::InvalidInput(
            "LED current must be greater than zero".to_string(),
        ));
    }

    if forward >= supply {
        return Err(CalcError::ForwardVoltageTooHigh { supply, forward });
    }

    let current = current_ma / 1000.0;
    let drop = supply - forward;
    Ok(LedResistor {
        resistance: drop / current,
        power: drop * current,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_led() {
        let result = led_resistor(&LedInput::default()).unwrap();
        assert!((result.resistance - 150.0).abs() < 0.01);
        assert!((result.power - 0.06).abs() < 1e-9);
        assert_eq!(result.resistance_display(), "150.00Ω");
        assert_eq!(result.power_display(), "0.060W");
    }

    #[test]
    fn test_forward_voltage_at_or_above_supply() {
        let input = LedInput {
            supply_voltage: Some(3.0),
            forward_voltage: Some(3.0),
            current_ma: Some(20.0),
        };
        assert!(matches!(
            led_resistor(&input),
            Err(CalcError::ForwardVoltageTooHigh { .. })
        ));

        let input = LedInput {
            forward_voltage: Some(3.3),
            supply_voltage: Some(3.0),
            ..input
        };
        assert!(matches!(
            led_resistor(&input),
            Err(CalcError::ForwardVoltageTooHigh { .. })
        ));
    }

    #[test]
    fn test_invalid_current() {
        let input = LedInput {
            current_ma: Some(0.0),
            ..LedInput::default()
        };
        assert!(matches!(led_resistor(&input), Err(CalcError::InvalidInput(_))));

        let input = LedInput {
            current_ma: None,
            ..LedInput::default()
        };
        assert!(matches!(led_resistor(&input), Err(CalcError::InvalidInput(_))));
    }
}
