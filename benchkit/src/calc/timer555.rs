//! NE555 timing in astable and monostable configurations.

use serde::{Deserialize, Serialize};

use crate::calc::{positive_input, CalcError};

/// ln(2), rounded the way 555 datasheets quote it.
const LN2: f64 = 0.693;
/// ln(3), the monostable pulse constant.
const MONOSTABLE_K: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TimerMode {
    Astable {
        r1: Option<f64>,
        r2: Option<f64>,
        capacitance: Option<f64>,
    },
    Monostable {
        resistance: Option<f64>,
        capacitance: Option<f64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AstableTiming {
    pub frequency_hz: f64,
    pub period_s: f64,
    pub high_s: f64,
    pub low_s: f64,
    pub duty_cycle_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonostableTiming {
    pub pulse_width_s: f64,
}

pub fn astable(r1: Option<f64>, r2: Option<f64>, capacitance: Option<f64>) -> Result<AstableTiming, CalcError> {
    let r1 = positive_input("R1", r1)?;
    let r2 = positive_input("R2", r2)?;
    let c = positive_input("capacitance", capacitance)?;

    let high_s = LN2 * (r1 + r2) * c;
    let low_s = LN2 * r2 * c;
    Ok(AstableTiming {
        frequency_hz: 1.44 / ((r1 + 2.0 * r2) * c),
        period_s: LN2 * (r1 + 2.0 * r2) * c,
        high_s,
        low_s,
        duty_cycle_percent: 100.0 * (r1 + r2) / (r1 + 2.0 * r2),
    })
}

pub fn monostable(resistance: Option<f64>, capacitance: Option<f64>) -> Result<MonostableTiming, CalcError> {
    let r = positive_input("resistance", resistance)?;
    let c = positive_input("capacitance", capacitance)?;
    Ok(MonostableTiming {
        pulse_width_s: MONOSTABLE_K * r * c,
    })
}
