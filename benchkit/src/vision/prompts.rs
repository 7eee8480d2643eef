//! Instruction texts sent alongside the image.

/// An instruction plus its output budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisionPrompt {
    pub text: &'static str,
    pub max_output_tokens: u32,
}

pub const BAND_DETECTION: VisionPrompt = VisionPrompt {
    text: r#"Analyze this resistor image and identify the band colors. Return ONLY a JSON object with format: {"band1": "color", "band2": "color", "band3": "color", "band4": "color", "band5": "color"} or null for any band that doesn't exist. Use only these color names: black, brown, red, orange, yellow, green, blue, violet, grey, white, gold, silver"#,
    max_output_tokens: 256,
};

pub const COMPONENT_IDENTIFICATION: VisionPrompt = VisionPrompt {
    text: "Analyze this electronic component image and identify what it is. Provide details about its function, specifications, and common uses. If it's a resistor, identify the color bands. If it's an IC, identify the part number and type. Format your response as JSON with fields: type, name, description, specifications.",
    max_output_tokens: 512,
};

/// Sampling settings shared by every request.
pub const TEMPERATURE: f32 = 0.1;
pub const TOP_K: u32 = 1;
pub const TOP_P: f32 = 1.0;
