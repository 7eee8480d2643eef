//! Turning model answers into structured results.
//!
//! Models wrap their JSON in prose or code fences, so every parser first
//! pulls out the first balanced `{...}` object.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::search::ToolRoute;
use crate::vision::VisionError;

/// First balanced JSON object in `text`, ignoring braces inside strings.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + i + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Raw band names as reported by the model. `None` for absent or null bands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandDetection {
    pub band1: Option<String>,
    pub band2: Option<String>,
    pub band3: Option<String>,
    pub band4: Option<String>,
    pub band5: Option<String>,
}

impl BandDetection {
    pub fn slots(&self) -> [Option<&str>; 5] {
        [
            self.band1.as_deref(),
            self.band2.as_deref(),
            self.band3.as_deref(),
            self.band4.as_deref(),
            self.band5.as_deref(),
        ]
    }
}

/// Parse a band-detection answer. Non-string band values count as absent.
pub fn parse_band_detection(text: &str) -> Result<BandDetection, VisionError> {
    let json = extract_json_object(text).ok_or_else(|| {
        VisionError::InvalidResponse("Could not parse color detection response".to_string())
    })?;
    let value: Value = serde_json::from_str(json)
        .map_err(|e| VisionError::ParseError(format!("Band detection JSON: {}", e)))?;

    let band = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_str)
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
    };

    Ok(BandDetection {
        band1: band("band1"),
        band2: band("band2"),
        band3: band("band3"),
        band4: band("band4"),
        band5: band("band5"),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentIdentification {
    #[serde(rename = "type")]
    pub component_type: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Free-form; models return either an object or a sentence.
    #[serde(default)]
    pub specifications: Option<Value>,
}

impl ComponentIdentification {
    /// Part number from `specifications.partNumber`, when present.
    pub fn part_number(&self) -> Option<&str> {
        self.specifications
            .as_ref()?
            .get("partNumber")?
            .as_str()
            .filter(|s| !s.trim().is_empty())
    }

    /// Tool to open for this component. Anything not a resistor or IC stays put.
    pub fn route(&self) -> Option<ToolRoute> {
        let kind = self.component_type.to_lowercase();
        if kind.contains("resistor") {
            Some(ToolRoute::ResistorTool)
        } else if kind.contains("ic") || kind.contains("integrated circuit") {
            let query = self
                .name
                .as_deref()
                .filter(|n| !n.trim().is_empty())
                .or_else(|| self.part_number())
                .unwrap_or_default();
            Some(ToolRoute::IcFinder {
                query: query.to_string(),
            })
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComponentAnalysis {
    Identified(ComponentIdentification),
    /// The answer had no usable JSON; the raw text is shown as-is.
    DescriptionOnly { description: String },
}

impl ComponentAnalysis {
    pub fn route(&self) -> Option<ToolRoute> {
        match self {
            ComponentAnalysis::Identified(id) => id.route(),
            ComponentAnalysis::DescriptionOnly { .. } => None,
        }
    }
}

/// Parse an identification answer. Never fails: anything unreadable
/// degrades to the raw text.
pub fn parse_component_analysis(text: &str) -> ComponentAnalysis {
    let identified = extract_json_object(text)
        .and_then(|json| serde_json::from_str::<ComponentIdentification>(json).ok());

    match identified {
        Some(id) => ComponentAnalysis::Identified(id),
        None => {
            tracing::debug!("identification answer has no usable JSON, keeping raw text");
            ComponentAnalysis::DescriptionOnly {
                description: text.to_string(),
            }
        }
    }
}
