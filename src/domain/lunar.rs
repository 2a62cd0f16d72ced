//! Lunar day details

use serde::{Deserialize, Serialize};

/// `lunar_date` of the fallback value
pub const LUNAR_FALLBACK_DATE: &str = "N/A";

/// Stem-branch year and element of the fallback value
pub const LUNAR_FALLBACK_UNKNOWN: &str = "Unknown";

/// Advice shown when the lookup failed
pub const LUNAR_FALLBACK_ADVICE: &str = "The system is busy right now, please try again later.";

/// Result of a single-date lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarDetails {
    /// Lunar day/month, e.g. "15/01"
    pub lunar_date: String,
    /// Stem-branch year name, e.g. "Giap Thin"
    pub lunar_year: String,
    /// Five-element classification of the day
    pub element: String,
    /// Auspicious time windows
    pub lucky_hours: Vec<String>,
    /// Inauspicious time windows
    pub bad_hours: Vec<String>,
    /// General advice for the day
    pub advice: String,
    /// Recommended activities (expected 3)
    pub auspicious: Vec<String>,
    /// Activities to avoid (expected 3)
    pub inauspicious: Vec<String>,
}

impl LunarDetails {
    /// The fixed value substituted for any failed lookup
    pub fn fallback() -> Self {
        Self {
            lunar_date: LUNAR_FALLBACK_DATE.to_string(),
            lunar_year: LUNAR_FALLBACK_UNKNOWN.to_string(),
            element: LUNAR_FALLBACK_UNKNOWN.to_string(),
            lucky_hours: Vec::new(),
            bad_hours: Vec::new(),
            advice: LUNAR_FALLBACK_ADVICE.to_string(),
            auspicious: Vec::new(),
            inauspicious: Vec::new(),
        }
    }

    /// Whether this is the fallback value
    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }
}
