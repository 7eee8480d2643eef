//! BenchKit - electronics bench toolkit library
//!
//! Calculators and reference data for everyday bench work: Ohm's law,
//! resistor color codes, series/parallel networks, LED resistors, reactance,
//! 555 timing, IC pinouts, and an optional photo-based component identifier.
//!
//! # Quick Start
//!
//! ```
//! use benchkit::{solve, ElectricalQuantities, Quantity};
//! use benchkit::resistor::{decode, BandColor};
//!
//! let known = ElectricalQuantities::from_inputs("12", "", "", "6");
//! let solution = solve(Quantity::Resistance, &known);
//! assert_eq!(solution.display(), "24.00 Ω");
//!
//! let decoded = decode(&[BandColor::Brown, BandColor::Black, BandColor::Red, BandColor::Gold])
//!     .unwrap();
//! assert_eq!(decoded.to_string(), "1kΩ ±5%");
//! ```
//!
//! # Features
//!
//! - **Ohm's law**: solve V, I, R or P from any two known quantities
//! - **Resistor codes**: 4/5-band decode and encode
//! - **Calculators**: series/parallel, LED resistor, reactance, 555 timer
//! - **Reference**: IC pinouts, datasheet and tutorial catalogs
//! - **Vision**: Gemini-backed band detection and component identification

pub mod calc;
pub mod config;
pub mod core;
pub mod reference;
pub mod resistor;
pub mod search;
pub mod units;
pub mod vision;

// Re-export main types
pub use calc::{
    solve, CalcError, CalcReport, Calculation, CalculatorKind, ElectricalQuantities, Quantity,
    Reading, Solution, SolveOutcome,
};
pub use config::Settings;
pub use core::{format_fixed, parse_quantity, round_to, BenchKitError};
pub use reference::{DatasheetCatalog, IcDatabase, IcLookup, TutorialCatalog};
pub use resistor::{BandColor, BandMode, CodecError, DecodedResistance, ResistorBands};
pub use search::{route_query, ToolRoute};
pub use vision::{ComponentAnalyzer, GeminiClient, ImagePayload, VisionError, VisionProvider};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        solve, BandColor, BandMode, BenchKitError, CalcError, CalcReport, Calculation,
        CalculatorKind, ElectricalQuantities, Quantity, ResistorBands,
    };
}
