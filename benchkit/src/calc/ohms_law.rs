//! Ohm's Law Solver
//!
//! Derives one unknown electrical quantity (plus one companion quantity) from
//! the ones already known, using V = I·R and P = V·I.
//!
//! For every target there are three candidate input pairs, tried in a fixed
//! order. The first pair whose inputs are both known is used; if its
//! arithmetic is undefined (division by zero, negative magnitude) the solve
//! stops there with [`SolveOutcome::DomainError`] and no later pair is tried.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::calc::CalcError;
use crate::core::{format_optional, parse_quantity};

/// One of the four quantities the solver knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Voltage,
    Current,
    Resistance,
    Power,
}

/// The quantity a solve should (re)compute.
pub type SolveTarget = Quantity;

impl Quantity {
    pub const ALL: [Quantity; 4] = [
        Quantity::Voltage,
        Quantity::Current,
        Quantity::Resistance,
        Quantity::Power,
    ];

    pub fn unit(&self) -> &'static str {
        match self {
            Quantity::Voltage => "V",
            Quantity::Current => "A",
            Quantity::Resistance => "Ω",
            Quantity::Power => "W",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quantity::Voltage => "Voltage",
            Quantity::Current => "Current",
            Quantity::Resistance => "Resistance",
            Quantity::Power => "Power",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

impl FromStr for Quantity {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "voltage" | "v" => Ok(Quantity::Voltage),
            "current" | "i" => Ok(Quantity::Current),
            "resistance" | "r" => Ok(Quantity::Resistance),
            "power" | "p" => Ok(Quantity::Power),
            other => Err(CalcError::InvalidInput(format!(
                "unknown quantity '{}'",
                other
            ))),
        }
    }
}

/// Snapshot of the four quantities. Unknown fields are `None`, never zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ElectricalQuantities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voltage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resistance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<f64>,
}

impl ElectricalQuantities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from raw text fields; unparsable text is unknown.
    pub fn from_inputs(voltage: &str, current: &str, resistance: &str, power: &str) -> Self {
        Self {
            voltage: parse_quantity(voltage),
            current: parse_quantity(current),
            resistance: parse_quantity(resistance),
            power: parse_quantity(power),
        }
    }

    pub fn with(mut self, quantity: Quantity, value: f64) -> Self {
        self.set(quantity, Some(value));
        self
    }

    pub fn get(&self, quantity: Quantity) -> Option<f64> {
        match quantity {
            Quantity::Voltage => self.voltage,
            Quantity::Current => self.current,
            Quantity::Resistance => self.resistance,
            Quantity::Power => self.power,
        }
    }

    pub fn set(&mut self, quantity: Quantity, value: Option<f64>) {
        let slot = match quantity {
            Quantity::Voltage => &mut self.voltage,
            Quantity::Current => &mut self.current,
            Quantity::Resistance => &mut self.resistance,
            Quantity::Power => &mut self.power,
        };
        *slot = value.filter(|v| v.is_finite());
    }

    /// Display text for one field: two decimals, empty when unknown.
    pub fn display(&self, quantity: Quantity) -> String {
        format_optional(self.get(quantity), 2)
    }
}

/// How a solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SolveOutcome {
    /// Target and companion were derived from the `from` pair.
    Solved {
        from: (Quantity, Quantity),
        companion: Quantity,
    },
    /// No input pair for this target was fully known; nothing changed.
    Incomplete,
    /// The selected pair was known but the arithmetic is undefined for it.
    DomainError { from: (Quantity, Quantity) },
}

/// Result of one solve: the new snapshot plus how it was reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub target: SolveTarget,
    pub quantities: ElectricalQuantities,
    pub outcome: SolveOutcome,
}

impl Solution {
    /// Full-precision value of the solved target, if any.
    pub fn value(&self) -> Option<f64> {
        match self.outcome {
            SolveOutcome::Solved { .. } => self.quantities.get(self.target),
            _ => None,
        }
    }

    /// Display text of the target: `"150.00 Ω"`, or empty when unresolved.
    pub fn display(&self) -> String {
        match self.value() {
            Some(v) => format!("{} {}", format_optional(Some(v), 2), self.target.unit()),
            None => String::new(),
        }
    }
}

type Relation = fn(f64, f64) -> (f64, f64);

/// A candidate derivation: from `inputs`, compute (target, companion).
struct Derivation {
    inputs: (Quantity, Quantity),
    companion: Quantity,
    relation: Relation,
}

fn paths_for(target: SolveTarget) -> [Derivation; 3] {
    use Quantity::*;
    match target {
        Voltage => [
            Derivation { inputs: (Current, Resistance), companion: Power, relation: |i, r| (i * r, i * i * r) },
            Derivation { inputs: (Power, Resistance), companion: Current, relation: |p, r| ((p * r).sqrt(), (p / r).sqrt()) },
            Derivation { inputs: (Power, Current), companion: Resistance, relation: |p, i| (p / i, p / (i * i)) },
        ],
        Current => [
            Derivation { inputs: (Voltage, Resistance), companion: Power, relation: |v, r| (v / r, v * v / r) },
            Derivation { inputs: (Power, Resistance), companion: Voltage, relation: |p, r| ((p / r).sqrt(), (p * r).sqrt()) },
            Derivation { inputs: (Power, Voltage), companion: Resistance, relation: |p, v| (p / v, v * v / p) },
        ],
        Resistance => [
            Derivation { inputs: (Voltage, Current), companion: Power, relation: |v, i| (v / i, v * i) },
            Derivation { inputs: (Power, Current), companion: Voltage, relation: |p, i| (p / (i * i), p / i) },
            Derivation { inputs: (Power, Voltage), companion: Current, relation: |p, v| (v * v / p, p / v) },
        ],
        Power => [
            Derivation { inputs: (Voltage, Current), companion: Resistance, relation: |v, i| (v * i, v / i) },
            Derivation { inputs: (Voltage, Resistance), companion: Current, relation: |v, r| (v * v / r, v / r) },
            Derivation { inputs: (Current, Resistance), companion: Voltage, relation: |i, r| (i * i * r, i * r) },
        ],
    }
}

/// Solve for `target` from whatever `known` already holds.
///
/// Pure: the input snapshot is not touched and the same inputs always give
/// the same [`Solution`].
pub fn solve(target: SolveTarget, known: &ElectricalQuantities) -> Solution {
    let mut quantities = *known;

    for path in paths_for(target) {
        let (a, b) = match (known.get(path.inputs.0), known.get(path.inputs.1)) {
            (Some(a), Some(b)) => (a, b),
            _ => continue,
        };

        let (value, companion) = (path.relation)(a, b);
        let valid = a >= 0.0
            && b >= 0.0
            && value.is_finite()
            && companion.is_finite();

        if !valid {
            tracing::debug!(
                "{} from {}/{} is undefined for ({}, {})",
                target,
                path.inputs.0,
                path.inputs.1,
                a,
                b
            );
            quantities.set(target, None);
            return Solution {
                target,
                quantities,
                outcome: SolveOutcome::DomainError { from: path.inputs },
            };
        }

        tracing::debug!("{} solved from {}/{}", target, path.inputs.0, path.inputs.1);
        quantities.set(target, Some(value));
        quantities.set(path.companion, Some(companion));
        return Solution {
            target,
            quantities,
            outcome: SolveOutcome::Solved {
                from: path.inputs,
                companion: path.companion,
            },
        };
    }

    Solution {
        target,
        quantities,
        outcome: SolveOutcome::Incomplete,
    }
}
