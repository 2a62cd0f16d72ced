//! Backend error types
//!
//! Failures of a single model call. None of them reach the views: the
//! oracle logs them and substitutes a fallback value.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while calling the generative backend
#[derive(Error, Debug)]
pub enum BackendError {
    /// No API key configured
    #[error("API key is empty")]
    MissingApiKey,

    /// Request could not be sent or the body could not be read
    #[error("Failed to reach Gemini API: {0}")]
    Transport(String),

    /// HTTP 429
    #[error("Gemini API rate limit exceeded (HTTP 429): {0}")]
    RateLimited(String),

    /// Any other non-success HTTP status
    #[error("Gemini API returned error status {code}: {body}")]
    Status {
        /// HTTP status code
        code: u16,
        /// Response body, as far as it could be read
        body: String,
    },

    /// Response body is not a `generateContent` envelope
    #[error("Failed to parse JSON response from Gemini API: {0}")]
    InvalidEnvelope(String),

    /// The prompt was rejected by safety filters
    #[error("Gemini API blocked the prompt: {0}")]
    Blocked(String),

    /// Envelope parsed but carried no candidate
    #[error("Gemini API response contains no candidates")]
    NoCandidates,

    /// Candidate present but its text is empty
    #[error("Gemini API response text is empty")]
    EmptyPayload,

    /// Text could not be parsed into the declared shape
    #[error("Response does not match the declared shape: {0}")]
    ShapeMismatch(#[from] serde_json::Error),

    /// The call did not settle within the configured timeout
    #[error("Gemini API call timed out after {0:?}")]
    Timeout(Duration),
}

impl BackendError {
    /// Short machine-readable kind, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            BackendError::MissingApiKey => "missing_api_key",
            BackendError::Transport(_) => "transport",
            BackendError::RateLimited(_) => "rate_limited",
            BackendError::Status { .. } => "status",
            BackendError::InvalidEnvelope(_) => "invalid_envelope",
            BackendError::Blocked(_) => "blocked",
            BackendError::NoCandidates => "no_candidates",
            BackendError::EmptyPayload => "empty_payload",
            BackendError::ShapeMismatch(_) => "shape_mismatch",
            BackendError::Timeout(_) => "timeout",
        }
    }
}
