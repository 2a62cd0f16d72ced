//! Gemini API client
//!
//! Direct HTTP client for the `generateContent` endpoint.

use async_trait::async_trait;

use crate::config::GeminiConfig;
use crate::gemini::error::BackendError;
use crate::gemini::schema::Schema;
use crate::gemini::types::{GeminiApiRequest, GeminiApiResponse};
use crate::gemini::GenerativeBackend;

/// Gemini REST client
///
/// Cloning is cheap; the inner `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a client with its own connection pool
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    /// Call Gemini with a single-turn prompt
    ///
    /// # Errors
    /// * `MissingApiKey` if no key is configured
    /// * `Transport`, `RateLimited` or `Status` for HTTP-level failures
    /// * `InvalidEnvelope`, `Blocked`, `NoCandidates` or `EmptyPayload` when
    ///   the response carries no usable text
    async fn generate(
        &self,
        prompt: &str,
        schema: Option<&Schema>,
    ) -> Result<String, BackendError> {
        if self.config.api_key.is_empty() {
            return Err(BackendError::MissingApiKey);
        }

        let url = self.endpoint();
        let request_body = GeminiApiRequest::new(prompt, schema);

        tracing::debug!(
            url = %url,
            model = %self.config.model,
            structured = schema.is_some(),
            prompt_len = prompt.len(),
            "Calling Gemini API"
        );

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());

            tracing::error!(
                status_code = status_code,
                error_body = %error_body,
                "Gemini API returned error status"
            );

            if status_code == 429 {
                return Err(BackendError::RateLimited(error_body));
            }
            return Err(BackendError::Status {
                code: status_code,
                body: error_body,
            });
        }

        let response_body = response
            .text()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let parsed: GeminiApiResponse = serde_json::from_str(&response_body).map_err(|e| {
            BackendError::InvalidEnvelope(format!("{} - Response body: {}", e, response_body))
        })?;

        if let Some(reason) = parsed
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_ref())
        {
            return Err(BackendError::Blocked(reason.clone()));
        }

        let text = parsed.first_text().ok_or(BackendError::NoCandidates)?;
        if text.trim().is_empty() {
            return Err(BackendError::EmptyPayload);
        }

        tracing::debug!(
            response_len = text.len(),
            "Successfully received response from Gemini API"
        );

        Ok(text)
    }
}
