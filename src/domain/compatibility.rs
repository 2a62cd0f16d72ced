//! Birth-date compatibility result

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Highest score the model may return
pub const MAX_SCORE: u8 = 100;

/// Result of a two-date comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    /// Compatibility score, 0..=100
    #[serde(deserialize_with = "deserialize_score")]
    pub score: u8,
    /// One-sentence conclusion
    pub summary: String,
    /// Personality and harmony analysis
    pub details: String,
    /// Five-element interaction analysis
    pub element_analysis: String,
}

impl CompatibilityResult {
    /// The fixed value substituted for any failed check
    pub fn fallback() -> Self {
        Self {
            score: 0,
            summary: "connection error".to_string(),
            details: "unable to analyze".to_string(),
            element_analysis: String::new(),
        }
    }

    /// Whether this is the fallback value
    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }
}

/// Accepts any JSON number within 0..=100 and rounds it.
///
/// The model declares the score as NUMBER, so `78` and `78.0` both occur.
fn deserialize_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() || raw < 0.0 || raw > f64::from(MAX_SCORE) {
        return Err(D::Error::custom(format!(
            "score {} outside 0..={}",
            raw, MAX_SCORE
        )));
    }
    Ok(raw.round() as u8)
}
