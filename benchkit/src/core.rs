//! Shared error type and the numeric boundary used by every calculator.
//! No CLI or network dependencies.

use crate::vision::VisionError;

#[derive(Debug, thiserror::Error)]
pub enum BenchKitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Vision request failed: {0}")]
    Vision(#[from] VisionError),
    #[error("{0}")]
    Other(String),
}

impl From<crate::calc::CalcError> for BenchKitError {
    fn from(e: crate::calc::CalcError) -> Self {
        BenchKitError::Other(e.to_string())
    }
}

impl From<crate::resistor::CodecError> for BenchKitError {
    fn from(e: crate::resistor::CodecError) -> Self {
        BenchKitError::Other(e.to_string())
    }
}

/// Parse a user-entered number.
///
/// Empty, unparsable and non-finite input is unknown (`None`), never zero and
/// never NaN.
pub fn parse_quantity(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Fixed-point rendering for display. Non-finite values render empty.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return String::new();
    }
    format!("{:.*}", decimals, value)
}

/// Format an optional value; unknown renders empty.
pub fn format_optional(value: Option<f64>, decimals: usize) -> String {
    value.map(|v| format_fixed(v, decimals)).unwrap_or_default()
}
