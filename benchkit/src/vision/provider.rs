//! Vision Provider Trait
//!
//! Common interface for multimodal backends, plus the image payload they
//! all accept.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::vision::prompts::VisionPrompt;
use crate::vision::VisionError;

/// Base64-encoded image with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: String,
}

impl ImagePayload {
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: STANDARD.encode(bytes),
        }
    }

    /// Parse a `data:<mime>;base64,<payload>` URL as produced by browsers.
    pub fn from_data_url(url: &str) -> Result<Self, VisionError> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| VisionError::UnsupportedImage("not a data URL".into()))?;
        let (mime_type, data) = rest
            .split_once(";base64,")
            .ok_or_else(|| VisionError::UnsupportedImage("data URL is not base64".into()))?;
        if !mime_type.starts_with("image/") {
            return Err(VisionError::UnsupportedImage(format!(
                "expected an image, got '{}'",
                mime_type
            )));
        }
        STANDARD
            .decode(data)
            .map_err(|e| VisionError::UnsupportedImage(format!("invalid base64: {}", e)))?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }

    /// Read an image file; the MIME type comes from the extension.
    pub fn from_path(path: &Path) -> Result<Self, VisionError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        let mime_type = match ext.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "webp" => "image/webp",
            "gif" => "image/gif",
            "heic" => "image/heic",
            _ => {
                return Err(VisionError::UnsupportedImage(format!(
                    "unknown image extension: {}",
                    path.display()
                )))
            }
        };
        let bytes = std::fs::read(path)?;
        Ok(Self::from_bytes(mime_type, &bytes))
    }
}

/// Common trait for all vision backends
#[async_trait]
pub trait VisionProvider: Send + Sync {
    /// Provider name
    fn name(&self) -> &str;

    /// Whether credentials are present
    fn is_configured(&self) -> bool;

    /// Send one instruction plus image and return the model's text answer.
    async fn generate(
        &self,
        prompt: &VisionPrompt,
        image: &ImagePayload,
    ) -> Result<String, VisionError>;
}
