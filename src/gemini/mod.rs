//! Generative backend
//!
//! The `GenerativeBackend` seam and its Gemini REST implementation.

pub mod client;
pub mod error;
pub mod schema;
pub mod types;

use async_trait::async_trait;

pub use client::GeminiClient;
pub use error::BackendError;
pub use schema::{Schema, SchemaType, COMPATIBILITY_SCHEMA, LUNAR_DETAILS_SCHEMA};

/// A hosted text-generation backend
///
/// Implementations hold no per-call state and may be called concurrently.
#[async_trait]
pub trait GenerativeBackend: Send + Sync + 'static {
    /// Human-readable backend name, used in logs
    fn name(&self) -> &str;

    /// Generate text for `prompt`
    ///
    /// When `schema` is given the backend is asked to answer with JSON of
    /// that shape; the returned text is not validated here.
    async fn generate(&self, prompt: &str, schema: Option<&Schema>)
        -> Result<String, BackendError>;
}
