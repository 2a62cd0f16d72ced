//! Oracle: the service-access layer
//!
//! Turns each domain request into one backend call and the answer back into
//! a domain value. Every operation is total: transport errors, empty
//! payloads, shape mismatches and timeouts are logged and replaced by the
//! fixed fallback of the request kind.

pub mod prompts;

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::config::GeminiConfig;
use crate::domain::{CompatibilityResult, LunarDetails};
use crate::gemini::{
    BackendError, GeminiClient, GenerativeBackend, Schema, COMPATIBILITY_SCHEMA,
    LUNAR_DETAILS_SCHEMA,
};

/// Reply when the model answered with empty text
pub const ADVICE_NO_ANSWER: &str = "Sorry, I have no answer for that yet.";

/// Reply when the model could not be reached
pub const ADVICE_DISCONNECTED: &str = "I am currently disconnected from the universe.";

/// Default bound on a single backend call
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(30);

/// Entry point for lunar lookups, compatibility checks and advice
///
/// Stateless across calls; clones share the same backend.
#[derive(Clone)]
pub struct Oracle {
    backend: Arc<dyn GenerativeBackend>,
    timeout: Duration,
}

impl std::fmt::Debug for Oracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Oracle")
            .field("backend", &self.backend.name())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Oracle {
    /// Wrap a backend with the default call timeout
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self {
            backend,
            timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Gemini-backed oracle built from configuration
    pub fn from_config(config: &GeminiConfig) -> Self {
        Self::new(Arc::new(GeminiClient::new(config.clone())))
            .with_timeout(Duration::from_secs(config.timeout_secs))
    }

    /// Override the per-call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Look up the lunar details of a calendar date
    ///
    /// Returns `LunarDetails::fallback()` on any failure.
    pub async fn fetch_lunar_details(&self, date: NaiveDate) -> LunarDetails {
        let prompt = prompts::lunar_details_prompt(date);
        match self
            .call_structured::<LunarDetails>(&prompt, &LUNAR_DETAILS_SCHEMA)
            .await
        {
            Ok(details) => details,
            Err(e) => {
                error!(
                    date = %date,
                    kind = e.kind(),
                    error = %e,
                    "Error fetching lunar details"
                );
                LunarDetails::fallback()
            }
        }
    }

    /// Score the compatibility of two birth dates
    ///
    /// Returns `CompatibilityResult::fallback()` on any failure, including a
    /// score outside 0..=100.
    pub async fn check_compatibility(
        &self,
        date1: NaiveDate,
        date2: NaiveDate,
    ) -> CompatibilityResult {
        let prompt = prompts::compatibility_prompt(date1, date2);
        match self
            .call_structured::<CompatibilityResult>(&prompt, &COMPATIBILITY_SCHEMA)
            .await
        {
            Ok(result) => result,
            Err(e) => {
                error!(
                    date1 = %date1,
                    date2 = %date2,
                    kind = e.kind(),
                    error = %e,
                    "Error checking compatibility"
                );
                CompatibilityResult::fallback()
            }
        }
    }

    /// Free-text assistant reply
    ///
    /// An answer with no text (empty, no candidates, blocked) yields
    /// `ADVICE_NO_ANSWER`; any other failure yields `ADVICE_DISCONNECTED`.
    pub async fn get_advice(&self, query: &str) -> String {
        let prompt = prompts::advice_prompt(query);
        match self.call(&prompt, None).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_)
            | Err(
                BackendError::EmptyPayload
                | BackendError::NoCandidates
                | BackendError::Blocked(_),
            ) => ADVICE_NO_ANSWER.to_string(),
            Err(e) => {
                error!(kind = e.kind(), error = %e, "Error getting advice");
                ADVICE_DISCONNECTED.to_string()
            }
        }
    }

    async fn call(&self, prompt: &str, schema: Option<&Schema>) -> Result<String, BackendError> {
        debug!(
            backend = self.backend.name(),
            structured = schema.is_some(),
            "Dispatching oracle request"
        );
        tokio::time::timeout(self.timeout, self.backend.generate(prompt, schema))
            .await
            .map_err(|_| BackendError::Timeout(self.timeout))?
    }

    async fn call_structured<T: DeserializeOwned>(
        &self,
        prompt: &str,
        schema: &Schema,
    ) -> Result<T, BackendError> {
        let text = self.call(prompt, Some(schema)).await?;
        if text.trim().is_empty() {
            return Err(BackendError::EmptyPayload);
        }
        Ok(serde_json::from_str(text.trim())?)
    }
}
