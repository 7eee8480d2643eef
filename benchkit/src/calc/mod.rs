//! Circuit Calculators
//!
//! Closed-form calculators over a handful of scalar inputs. Each calculator is
//! a pure function in its own module; [`Calculation`] ties them together so a
//! caller can pick one by [`CalculatorKind`] and get a uniform [`CalcReport`].
//!
//! Error states are explicit: "no valid input" and domain violations are
//! [`CalcError`] values, never NaN or infinity in a result.

pub mod led;
pub mod network;
pub mod ohms_law;
pub mod reactance;
pub mod timer555;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub use led::{led_resistor, LedInput, LedResistor};
pub use network::{parallel_resistance, parse_resistances, series_resistance};
pub use ohms_law::{solve, ElectricalQuantities, Quantity, Solution, SolveOutcome, SolveTarget};
pub use reactance::{capacitive_reactance, inductive_reactance};
pub use timer555::{astable, monostable, AstableTiming, MonostableTiming, TimerMode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    #[error("Please enter valid resistor values")]
    NoValidInput,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Forward voltage ({forward} V) must be less than supply voltage ({supply} V)")]
    ForwardVoltageTooHigh { supply: f64, forward: f64 },
    #[error("Undefined result: {0}")]
    Undefined(String),
    #[error("Unknown calculator: {0}")]
    UnknownCalculator(String),
}

/// Accept only finite, strictly positive values.
pub(crate) fn positive_input(name: &str, value: Option<f64>) -> Result<f64, CalcError> {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(CalcError::InvalidInput(format!(
            "{} must be a positive number",
            name
        ))),
    }
}

/// Every calculator the toolkit offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CalculatorKind {
    OhmsLaw,
    ResistorParallel,
    ResistorSeries,
    LedResistor,
    CapacitorReactance,
    InductorReactance,
    Timer555,
}

impl CalculatorKind {
    pub const ALL: [CalculatorKind; 7] = [
        CalculatorKind::OhmsLaw,
        CalculatorKind::ResistorParallel,
        CalculatorKind::ResistorSeries,
        CalculatorKind::LedResistor,
        CalculatorKind::CapacitorReactance,
        CalculatorKind::InductorReactance,
        CalculatorKind::Timer555,
    ];

    /// Stable string key.
    pub fn key(&self) -> &'static str {
        match self {
            CalculatorKind::OhmsLaw => "ohmsLaw",
            CalculatorKind::ResistorParallel => "resistorParallel",
            CalculatorKind::ResistorSeries => "resistorSeries",
            CalculatorKind::LedResistor => "ledResistor",
            CalculatorKind::CapacitorReactance => "capacitorReactance",
            CalculatorKind::InductorReactance => "inductorReactance",
            CalculatorKind::Timer555 => "timer555",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CalculatorKind::OhmsLaw => "Ohm's Law",
            CalculatorKind::ResistorParallel => "Resistors in Parallel",
            CalculatorKind::ResistorSeries => "Resistors in Series",
            CalculatorKind::LedResistor => "LED Resistor Calculator",
            CalculatorKind::CapacitorReactance => "Capacitor Reactance",
            CalculatorKind::InductorReactance => "Inductor Reactance",
            CalculatorKind::Timer555 => "555 Timer Calculator",
        }
    }

    pub fn formulas(&self) -> &'static [&'static str] {
        match self {
            CalculatorKind::OhmsLaw => &[
                "V = I × R",
                "I = V ÷ R",
                "R = V ÷ I",
                "P = V × I",
                "P = I² × R",
                "P = V² ÷ R",
            ],
            CalculatorKind::ResistorParallel => &["1/Req = 1/R₁ + 1/R₂ + ... + 1/Rₙ"],
            CalculatorKind::ResistorSeries => &["Req = R₁ + R₂ + ... + Rₙ"],
            CalculatorKind::LedResistor => &[
                "R = (Vsupply - Vforward) / Iled",
                "P = (Vsupply - Vforward) * Iled",
            ],
            CalculatorKind::CapacitorReactance => &["Xc = 1 / (2πfC)"],
            CalculatorKind::InductorReactance => &["XL = 2πfL"],
            CalculatorKind::Timer555 => &[
                "f = 1.44 / ((R1 + 2R2) × C)",
                "t_high = 0.693 × (R1 + R2) × C",
                "t_low = 0.693 × R2 × C",
                "t_pulse = 1.1 × R × C",
            ],
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CalculatorKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalculatorKind::ALL
            .iter()
            .copied()
            .find(|k| k.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalcError::UnknownCalculator(s.to_string()))
    }
}

/// One labelled output value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
    #[serde(skip)]
    pub decimals: usize,
}

impl Reading {
    fn new(label: &'static str, value: f64, unit: &'static str, decimals: usize) -> Self {
        Self {
            label,
            value,
            unit,
            decimals,
        }
    }

    /// The value as displayed, e.g. `"150.00"`.
    pub fn display_value(&self) -> String {
        format!("{:.*}", self.decimals, self.value)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.label, self.display_value(), self.unit)
    }
}

/// Output of any calculator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalcReport {
    pub kind: CalculatorKind,
    pub readings: Vec<Reading>,
    /// Set when nothing could be computed but that is not an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CalcReport {
    fn new(kind: CalculatorKind, readings: Vec<Reading>) -> Self {
        Self {
            kind,
            readings,
            note: None,
        }
    }

    pub fn reading(&self, label: &str) -> Option<&Reading> {
        self.readings.iter().find(|r| r.label == label)
    }
}

/// A calculator together with its inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum Calculation {
    OhmsLaw {
        target: SolveTarget,
        known: ElectricalQuantities,
    },
    ResistorParallel(Vec<f64>),
    ResistorSeries(Vec<f64>),
    LedResistor(LedInput),
    CapacitorReactance {
        frequency: Option<f64>,
        capacitance: Option<f64>,
    },
    InductorReactance {
        frequency: Option<f64>,
        inductance: Option<f64>,
    },
    Timer555(TimerMode),
}

impl Calculation {
    pub fn kind(&self) -> CalculatorKind {
        match self {
            Calculation::OhmsLaw { .. } => CalculatorKind::OhmsLaw,
            Calculation::ResistorParallel(_) => CalculatorKind::ResistorParallel,
            Calculation::ResistorSeries(_) => CalculatorKind::ResistorSeries,
            Calculation::LedResistor(_) => CalculatorKind::LedResistor,
            Calculation::CapacitorReactance { .. } => CalculatorKind::CapacitorReactance,
            Calculation::InductorReactance { .. } => CalculatorKind::InductorReactance,
            Calculation::Timer555(_) => CalculatorKind::Timer555,
        }
    }

    pub fn evaluate(&self) -> Result<CalcReport, CalcError> {
        let kind = self.kind();
        match self {
            Calculation::OhmsLaw { target, known } => {
                let solution = solve(*target, known);
                match solution.outcome {
                    SolveOutcome::Solved { companion, .. } => {
                        let mut readings = Vec::with_capacity(2);
                        for q in [*target, companion] {
                            if let Some(v) = solution.quantities.get(q) {
                                readings.push(Reading::new(q.label(), v, q.unit(), 2));
                            }
                        }
                        Ok(CalcReport::new(kind, readings))
                    }
                    SolveOutcome::Incomplete => Ok(CalcReport {
                        kind,
                        readings: vec![],
                        note: Some(format!("Not enough known values to solve for {}", target)),
                    }),
                    SolveOutcome::DomainError { from } => Err(CalcError::Undefined(format!(
                        "{} cannot be derived from {} and {}",
                        target, from.0, from.1
                    ))),
                }
            }
            Calculation::ResistorParallel(values) => {
                let total = parallel_resistance(values)?;
                Ok(CalcReport::new(
                    kind,
                    vec![Reading::new("Equivalent Parallel Resistance", total, "Ω", 2)],
                ))
            }
            Calculation::ResistorSeries(values) => {
                let total = series_resistance(values)?;
                Ok(CalcReport::new(
                    kind,
                    vec![Reading::new("Equivalent Series Resistance", total, "Ω", 2)],
                ))
            }
            Calculation::LedResistor(input) => {
                let led = led_resistor(input)?;
                Ok(CalcReport::new(
                    kind,
                    vec![
                        Reading::new("Resistor Value", led.resistance, "Ω", 2),
                        Reading::new("Power Dissipation", led.power, "W", 3),
                    ],
                ))
            }
            Calculation::CapacitorReactance {
                frequency,
                capacitance,
            } => {
                let xc = capacitive_reactance(*frequency, *capacitance)?;
                Ok(CalcReport::new(
                    kind,
                    vec![Reading::new("Capacitive Reactance", xc, "Ω", 2)],
                ))
            }
            Calculation::InductorReactance {
                frequency,
                inductance,
            } => {
                let xl = inductive_reactance(*frequency, *inductance)?;
                Ok(CalcReport::new(
                    kind,
                    vec![Reading::new("Inductive Reactance", xl, "Ω", 2)],
                ))
            }
            Calculation::Timer555(TimerMode::Astable {
                r1,
                r2,
                capacitance,
            }) => {
                let t = astable(*r1, *r2, *capacitance)?;
                Ok(CalcReport::new(
                    kind,
                    vec![
                        Reading::new("Frequency", t.frequency_hz, "Hz", 2),
                        Reading::new("Period", t.period_s, "s", 4),
                        Reading::new("Time High", t.high_s, "s", 4),
                        Reading::new("Time Low", t.low_s, "s", 4),
                        Reading::new("Duty Cycle", t.duty_cycle_percent, "%", 2),
                    ],
                ))
            }
            Calculation::Timer555(TimerMode::Monostable {
                resistance,
                capacitance,
            }) => {
                let t = monostable(*resistance, *capacitance)?;
                Ok(CalcReport::new(
                    kind,
                    vec![Reading::new("Pulse Width", t.pulse_width_s, "s", 4)],
                ))
            }
        }
    }
}
