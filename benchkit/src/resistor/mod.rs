//! Resistor color codes: the color table, the 4/5-band codec and the
//! editable band state of the resistor tool.

pub mod bands;
pub mod codec;
pub mod color;

pub use bands::{BandMode, BandSlot, MergeReport, ResistorBands};
pub use codec::{
    decode, encode, format_resistance, DecodedResistance, ResistorEncoding, Tolerance,
    DEFAULT_TOLERANCE_PERCENT,
};
pub use color::{BandColor, BandProperties};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodecError {
    #[error("Band {slot} is {color}, which has no digit value")]
    NotADigit { slot: usize, color: BandColor },
    #[error("Unknown band color: {0}")]
    UnknownColor(String),
    #[error("Unknown band slot: {0}")]
    UnknownSlot(String),
    #[error("A resistor has 4 or 5 bands, got {0}")]
    WrongBandCount(usize),
    #[error("{0} Ω cannot be represented by the selected band count")]
    NotEncodable(f64),
    #[error("No band color carries a tolerance of {0}%")]
    UnknownTolerance(f64),
}
