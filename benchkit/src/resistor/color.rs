//! The twelve resistor band colors and what each means in every band role.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::resistor::CodecError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandColor {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Grey,
    White,
    Gold,
    Silver,
}

/// Meaning of a color in each band role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandProperties {
    /// Significant digit, absent for gold and silver.
    pub digit: Option<u8>,
    /// Power of ten applied in the multiplier role (-2 for silver .. 9 for white).
    pub exponent: i32,
    /// Tolerance in percent, absent for black, orange, yellow and white.
    pub tolerance_percent: Option<f64>,
}

impl BandProperties {
    pub fn multiplier(&self) -> f64 {
        10f64.powi(self.exponent)
    }
}

impl BandColor {
    pub const ALL: [BandColor; 12] = [
        BandColor::Black,
        BandColor::Brown,
        BandColor::Red,
        BandColor::Orange,
        BandColor::Yellow,
        BandColor::Green,
        BandColor::Blue,
        BandColor::Violet,
        BandColor::Grey,
        BandColor::White,
        BandColor::Gold,
        BandColor::Silver,
    ];

    pub fn properties(&self) -> BandProperties {
        let (digit, exponent, tolerance_percent) = match self {
            BandColor::Black => (Some(0), 0, None),
            BandColor::Brown => (Some(1), 1, Some(1.0)),
            BandColor::Red => (Some(2), 2, Some(2.0)),
            BandColor::Orange => (Some(3), 3, None),
            BandColor::Yellow => (Some(4), 4, None),
            BandColor::Green => (Some(5), 5, Some(0.5)),
            BandColor::Blue => (Some(6), 6, Some(0.25)),
            BandColor::Violet => (Some(7), 7, Some(0.1)),
            BandColor::Grey => (Some(8), 8, Some(0.05)),
            BandColor::White => (Some(9), 9, None),
            BandColor::Gold => (None, -1, Some(5.0)),
            BandColor::Silver => (None, -2, Some(10.0)),
        };
        BandProperties {
            digit,
            exponent,
            tolerance_percent,
        }
    }

    pub fn digit(&self) -> Option<u8> {
        self.properties().digit
    }

    pub fn tolerance_percent(&self) -> Option<f64> {
        self.properties().tolerance_percent
    }

    pub fn name(&self) -> &'static str {
        match self {
            BandColor::Black => "black",
            BandColor::Brown => "brown",
            BandColor::Red => "red",
            BandColor::Orange => "orange",
            BandColor::Yellow => "yellow",
            BandColor::Green => "green",
            BandColor::Blue => "blue",
            BandColor::Violet => "violet",
            BandColor::Grey => "grey",
            BandColor::White => "white",
            BandColor::Gold => "gold",
            BandColor::Silver => "silver",
        }
    }

    /// Color whose digit is `digit` (0-9).
    pub fn from_digit(digit: u8) -> Option<BandColor> {
        BandColor::ALL.iter().copied().find(|c| c.digit() == Some(digit))
    }

    /// Color used as multiplier for 10^exponent.
    pub fn from_exponent(exponent: i32) -> Option<BandColor> {
        BandColor::ALL
            .iter()
            .copied()
            .find(|c| c.properties().exponent == exponent)
    }

    /// First color carrying exactly this tolerance.
    pub fn from_tolerance(percent: f64) -> Option<BandColor> {
        BandColor::ALL
            .iter()
            .copied()
            .find(|c| c.tolerance_percent() == Some(percent))
    }
}

impl fmt::Display for BandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BandColor {
    type Err = CodecError;

    /// Only the twelve table names are accepted (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BandColor::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CodecError::UnknownColor(s.to_string()))
    }
}
