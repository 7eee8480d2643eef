//! Vision boundary: send a component photo to a multimodal model and turn
//! its free-text answer into band colors or a component identification.

pub mod detection;
pub mod gemini;
pub mod prompts;
pub mod provider;
pub mod session;

pub use detection::{
    extract_json_object, parse_band_detection, parse_component_analysis, BandDetection,
    ComponentAnalysis, ComponentIdentification,
};
pub use gemini::GeminiClient;
pub use prompts::VisionPrompt;
pub use provider::{ImagePayload, VisionProvider};
pub use session::{AnalysisSession, AnalysisTicket, ComponentAnalyzer, DetectedBands};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisionError {
    #[error("API request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    ParseError(String),
    #[error("Missing API key")]
    MissingApiKey,
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
