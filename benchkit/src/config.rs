//! Settings for the vision service.
//!
//! Resolution order: defaults, then an optional JSON file, then environment
//! variables. Nothing outside the vision client reads these values.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::core::BenchKitError;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-exp";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

pub const ENV_API_KEY: &str = "BENCHKIT_GEMINI_API_KEY";
pub const ENV_API_KEY_FALLBACK: &str = "GEMINI_API_KEY";
pub const ENV_MODEL: &str = "BENCHKIT_GEMINI_MODEL";
pub const ENV_BASE_URL: &str = "BENCHKIT_GEMINI_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl Settings {
    /// Defaults, then `path` if given, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, BenchKitError> {
        let settings = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let settings = settings.with_env(|key| std::env::var(key).ok());
        settings.validate()?;
        Ok(settings)
    }

    /// Read a JSON settings file. Missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, BenchKitError> {
        let content = std::fs::read_to_string(path)?;
        let mut settings: Settings = serde_json::from_str(&content)?;
        settings.gemini_api_key = non_empty(settings.gemini_api_key.take());
        settings.validate()?;
        tracing::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Apply overrides from an environment lookup.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) =
            non_empty(lookup(ENV_API_KEY)).or_else(|| non_empty(lookup(ENV_API_KEY_FALLBACK)))
        {
            self.gemini_api_key = Some(key);
        }
        if let Some(model) = non_empty(lookup(ENV_MODEL)) {
            self.gemini_model = model;
        }
        if let Some(url) = non_empty(lookup(ENV_BASE_URL)) {
            self.gemini_base_url = url;
        }
        self
    }

    pub fn validate(&self) -> Result<(), BenchKitError> {
        if self.gemini_model.trim().is_empty() {
            return Err(BenchKitError::Config("gemini_model must not be empty".into()));
        }
        if !(self.gemini_base_url.starts_with("http://")
            || self.gemini_base_url.starts_with("https://"))
        {
            return Err(BenchKitError::Config(format!(
                "gemini_base_url must be an http(s) URL, got '{}'",
                self.gemini_base_url
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(BenchKitError::Config(
                "request_timeout_secs must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn has_api_key(&self) -> bool {
        self.gemini_api_key.is_some()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
