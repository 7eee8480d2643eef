//! Editable band state of the resistor tool.
//!
//! Five slots are always kept so switching 4-band -> 5-band -> 4-band never
//! loses a selection; the mode only decides which slots are read.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::resistor::{BandColor, CodecError, DecodedResistance, ResistorEncoding};
use crate::vision::BandDetection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BandMode {
    #[default]
    #[serde(rename = "4band")]
    FourBand,
    #[serde(rename = "5band")]
    FiveBand,
}

impl BandMode {
    pub fn band_count(&self) -> usize {
        match self {
            BandMode::FourBand => 4,
            BandMode::FiveBand => 5,
        }
    }

    /// Number of digit bands before the multiplier.
    pub fn significant_digits(&self) -> u32 {
        match self {
            BandMode::FourBand => 2,
            BandMode::FiveBand => 3,
        }
    }
}

impl fmt::Display for BandMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BandMode::FourBand => write!(f, "4band"),
            BandMode::FiveBand => write!(f, "5band"),
        }
    }
}

/// One of the five physical band positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandSlot {
    Band1,
    Band2,
    Band3,
    Band4,
    Band5,
}

impl BandSlot {
    pub const ALL: [BandSlot; 5] = [
        BandSlot::Band1,
        BandSlot::Band2,
        BandSlot::Band3,
        BandSlot::Band4,
        BandSlot::Band5,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for BandSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "band{}", self.index() + 1)
    }
}

impl FromStr for BandSlot {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "band1" | "1" => Ok(BandSlot::Band1),
            "band2" | "2" => Ok(BandSlot::Band2),
            "band3" | "3" => Ok(BandSlot::Band3),
            "band4" | "4" => Ok(BandSlot::Band4),
            "band5" | "5" => Ok(BandSlot::Band5),
            _ => Err(CodecError::UnknownSlot(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResistorBands {
    pub mode: BandMode,
    pub bands: [BandColor; 5],
}

impl Default for ResistorBands {
    fn default() -> Self {
        Self {
            mode: BandMode::FourBand,
            bands: [
                BandColor::Brown,
                BandColor::Black,
                BandColor::Red,
                BandColor::Gold,
                BandColor::Brown,
            ],
        }
    }
}

/// Outcome of applying a vision detection to the band state.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MergeReport {
    pub mode: BandMode,
    pub applied: Vec<(BandSlot, BandColor)>,
    /// Slots whose detected name is not one of the twelve colors.
    pub rejected: Vec<(BandSlot, String)>,
}

impl ResistorBands {
    pub fn with_mode(mut self, mode: BandMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_band(mut self, slot: BandSlot, color: BandColor) -> Self {
        self.bands[slot.index()] = color;
        self
    }

    pub fn band(&self, slot: BandSlot) -> BandColor {
        self.bands[slot.index()]
    }

    pub fn reset(self) -> Self {
        Self::default()
    }

    /// Colors read in the current mode, in band order.
    pub fn active(&self) -> &[BandColor] {
        &self.bands[..self.mode.band_count()]
    }

    pub fn encoding(&self) -> Result<ResistorEncoding, CodecError> {
        ResistorEncoding::from_colors(self.active())
    }

    pub fn decode(&self) -> Result<DecodedResistance, CodecError> {
        self.encoding()?.decode()
    }

    /// Apply a detection: a non-empty fifth band selects 5-band mode, anything
    /// else 4-band. Unknown color names leave their slot untouched.
    pub fn merged(&self, detection: &BandDetection) -> (Self, MergeReport) {
        let mode = match detection.band5.as_deref().map(str::trim) {
            Some(b) if !b.is_empty() => BandMode::FiveBand,
            _ => BandMode::FourBand,
        };

        let mut next = self.with_mode(mode);
        let mut report = MergeReport {
            mode,
            ..MergeReport::default()
        };

        for (slot, detected) in BandSlot::ALL.iter().zip(detection.slots()) {
            let Some(name) = detected.map(str::trim).filter(|n| !n.is_empty()) else {
                continue;
            };
            match name.parse::<BandColor>() {
                Ok(color) => {
                    next.bands[slot.index()] = color;
                    report.applied.push((*slot, color));
                }
                Err(_) => {
                    tracing::warn!("ignoring unknown color '{}' detected for {}", name, slot);
                    report.rejected.push((*slot, name.to_string()));
                }
            }
        }

        (next, report)
    }
}
