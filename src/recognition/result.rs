//! Recognition result returned by the service

use serde::{Deserialize, Serialize};

/// Plate text and confidence for one submitted image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawResult")]
pub struct RecognitionResult {
    /// Recognized plate string
    pub text: String,
    /// Probability in [0, 1]
    pub confidence: f64,
}

/// Response body as sent; `text` wins over `predicted_plate`
#[derive(Deserialize)]
struct RawResult {
    text: Option<String>,
    predicted_plate: Option<String>,
    confidence: f64,
}

impl TryFrom<RawResult> for RecognitionResult {
    type Error = &'static str;

    fn try_from(raw: RawResult) -> Result<Self, Self::Error> {
        let text = raw
            .text
            .or(raw.predicted_plate)
            .ok_or("missing field `text`")?;

        Ok(Self {
            text,
            confidence: raw.confidence,
        })
    }
}

impl RecognitionResult {
    #[cfg(test)]
    pub fn new(text: impl Into<String>, confidence: f64) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }

    /// Confidence rendered for display, e.g. `94.00%`
    pub fn confidence_label(&self) -> String {
        format_confidence(self.confidence)
    }
}

/// Format a probability as a percentage with two decimals
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.2}%", confidence * 100.0)
}
