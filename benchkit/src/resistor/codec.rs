//! Resistor Color Code Codec
//!
//! Decodes 4-band and 5-band color sequences into a resistance and tolerance,
//! and encodes a resistance back into bands.
//!
//! ```text
//!   4-band:  [d1][d2][mult][tol]          value = (10·d1 + d2) × mult
//!   5-band:  [d1][d2][d3][mult][tol]      value = (100·d1 + 10·d2 + d3) × mult
//! ```
//!
//! A tolerance band whose color has no tolerance meaning falls back to the
//! ±20% "no band" convention instead of failing.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::resistor::{BandColor, BandMode, CodecError};

/// Tolerance used when the tolerance band carries no tolerance meaning.
pub const DEFAULT_TOLERANCE_PERCENT: f64 = 20.0;

/// Relative slack when deciding whether a value is exactly representable.
const ENCODE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance {
    Percent(f64),
    /// The band had no tolerance mapping; reads as ±20%.
    Unspecified,
}

impl Tolerance {
    pub fn percent(&self) -> f64 {
        match self {
            Tolerance::Percent(p) => *p,
            Tolerance::Unspecified => DEFAULT_TOLERANCE_PERCENT,
        }
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "±{}%", self.percent())
    }
}

impl Serialize for Tolerance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Ordered bands of one resistor, by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResistorEncoding {
    FourBand {
        digit1: BandColor,
        digit2: BandColor,
        multiplier: BandColor,
        tolerance: BandColor,
    },
    FiveBand {
        digit1: BandColor,
        digit2: BandColor,
        digit3: BandColor,
        multiplier: BandColor,
        tolerance: BandColor,
    },
}

/// Result of decoding a band sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedResistance {
    pub ohms: f64,
    pub tolerance: Tolerance,
    /// Human-readable magnitude, e.g. `"4.70kΩ"`.
    pub formatted: String,
}

impl fmt::Display for DecodedResistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.formatted, self.tolerance)
    }
}

fn digit_of(slot: usize, color: BandColor) -> Result<u32, CodecError> {
    color
        .digit()
        .map(u32::from)
        .ok_or(CodecError::NotADigit { slot, color })
}

/// significand × 10^exponent without the float noise of multiplying by 0.1.
fn scale(significand: u32, exponent: i32) -> f64 {
    let s = f64::from(significand);
    if exponent >= 0 {
        s * 10f64.powi(exponent)
    } else {
        s / 10f64.powi(-exponent)
    }
}

impl ResistorEncoding {
    /// Build an encoding from 4 or 5 colors in band order.
    pub fn from_colors(colors: &[BandColor]) -> Result<Self, CodecError> {
        match *colors {
            [digit1, digit2, multiplier, tolerance] => Ok(ResistorEncoding::FourBand {
                digit1,
                digit2,
                multiplier,
                tolerance,
            }),
            [digit1, digit2, digit3, multiplier, tolerance] => Ok(ResistorEncoding::FiveBand {
                digit1,
                digit2,
                digit3,
                multiplier,
                tolerance,
            }),
            _ => Err(CodecError::WrongBandCount(colors.len())),
        }
    }

    pub fn mode(&self) -> BandMode {
        match self {
            ResistorEncoding::FourBand { .. } => BandMode::FourBand,
            ResistorEncoding::FiveBand { .. } => BandMode::FiveBand,
        }
    }

    pub fn colors(&self) -> Vec<BandColor> {
        match *self {
            ResistorEncoding::FourBand {
                digit1,
                digit2,
                multiplier,
                tolerance,
            } => vec![digit1, digit2, multiplier, tolerance],
            ResistorEncoding::FiveBand {
                digit1,
                digit2,
                digit3,
                multiplier,
                tolerance,
            } => vec![digit1, digit2, digit3, multiplier, tolerance],
        }
    }

    pub fn decode(&self) -> Result<DecodedResistance, CodecError> {
        let (significand, multiplier, tolerance) = match *self {
            ResistorEncoding::FourBand {
                digit1,
                digit2,
                multiplier,
                tolerance,
            } => (
                digit_of(1, digit1)? * 10 + digit_of(2, digit2)?,
                multiplier,
                tolerance,
            ),
            ResistorEncoding::FiveBand {
                digit1,
                digit2,
                digit3,
                multiplier,
                tolerance,
            } => (
                digit_of(1, digit1)? * 100 + digit_of(2, digit2)? * 10 + digit_of(3, digit3)?,
                multiplier,
                tolerance,
            ),
        };

        let ohms = scale(significand, multiplier.properties().exponent);
        let tolerance = match tolerance.tolerance_percent() {
            Some(p) => Tolerance::Percent(p),
            None => Tolerance::Unspecified,
        };

        Ok(DecodedResistance {
            ohms,
            tolerance,
            formatted: format_resistance(ohms),
        })
    }
}

/// Convenience: decode a raw color sequence.
pub fn decode(colors: &[BandColor]) -> Result<DecodedResistance, CodecError> {
    ResistorEncoding::from_colors(colors)?.decode()
}

/// Find bands representing `ohms` exactly.
///
/// `tolerance_percent` picks the tolerance band; without it 4-band resistors
/// get gold (5%) and 5-band resistors brown (1%).
pub fn encode(
    ohms: f64,
    mode: BandMode,
    tolerance_percent: Option<f64>,
) -> Result<ResistorEncoding, CodecError> {
    if !ohms.is_finite() || ohms < 0.0 {
        return Err(CodecError::NotEncodable(ohms));
    }

    let tolerance = match tolerance_percent {
        Some(p) => BandColor::from_tolerance(p).ok_or(CodecError::UnknownTolerance(p))?,
        None => match mode {
            BandMode::FourBand => BandColor::Gold,
            BandMode::FiveBand => BandColor::Brown,
        },
    };

    let digits = mode.significant_digits();
    let upper = 10u32.pow(digits);
    let lower = upper / 10;

    let candidates = |exponent: i32| -> Option<u32> {
        let mantissa = if exponent >= 0 {
            ohms / 10f64.powi(exponent)
        } else {
            ohms * 10f64.powi(-exponent)
        };
        let rounded = mantissa.round();
        let exact = (mantissa - rounded).abs() <= ENCODE_EPSILON * rounded.max(1.0);
        (exact && rounded < f64::from(upper)).then_some(rounded as u32)
    };

    // Prefer a leading non-zero digit, then fall back to a leading zero.
    let found = if ohms == 0.0 {
        Some((0, 0))
    } else {
        (-2..=9)
            .rev()
            .find_map(|e| candidates(e).filter(|&m| m >= lower).map(|m| (m, e)))
            .or_else(|| (-2..=9).find_map(|e| candidates(e).filter(|&m| m > 0).map(|m| (m, e))))
    };

    let (significand, exponent) = found.ok_or(CodecError::NotEncodable(ohms))?;
    let multiplier = BandColor::from_exponent(exponent).ok_or(CodecError::NotEncodable(ohms))?;
    let digit = |d: u32| BandColor::from_digit(d as u8).ok_or(CodecError::NotEncodable(ohms));

    tracing::debug!(
        "encoded {} Ω as {} x 10^{} ({} bands)",
        ohms,
        significand,
        exponent,
        mode.band_count()
    );

    Ok(match mode {
        BandMode::FourBand => ResistorEncoding::FourBand {
            digit1: digit(significand / 10)?,
            digit2: digit(significand % 10)?,
            multiplier,
            tolerance,
        },
        BandMode::FiveBand => ResistorEncoding::FiveBand {
            digit1: digit(significand / 100)?,
            digit2: digit(significand / 10 % 10)?,
            digit3: digit(significand % 10)?,
            multiplier,
            tolerance,
        },
    })
}

fn format_scaled(value: f64, suffix: &str) -> String {
    if value.fract() == 0.0 {
        format!("{}{}", value, suffix)
    } else {
        format!("{:.2}{}", value, suffix)
    }
}

/// Render a resistance in Ω, kΩ or MΩ.
///
/// Whole multiples of the unit print without decimals (`"1kΩ"`), anything
/// else with two (`"4.70kΩ"`).
pub fn format_resistance(ohms: f64) -> String {
    if ohms >= 1_000_000.0 {
        format_scaled(ohms / 1_000_000.0, "MΩ")
    } else if ohms >= 1_000.0 {
        format_scaled(ohms / 1_000.0, "kΩ")
    } else {
        format_scaled(ohms, "Ω")
    }
}
