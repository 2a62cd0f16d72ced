//! API module
//!
//! HTTP facade for the UI shell, so the model credential stays server-side.

pub mod handlers;
pub mod utils;

use axum::{
    routing::{get, post},
    Router,
};

use crate::oracle::Oracle;

/// Shared state of the API handlers
#[derive(Debug, Clone)]
pub struct ApiState {
    /// Oracle used by every request
    pub oracle: Oracle,
}

impl ApiState {
    /// Create API state around an oracle
    pub fn new(oracle: Oracle) -> Self {
        Self { oracle }
    }
}

/// All API routes, without middleware
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health_check))
        .route("/api/lunar", post(handlers::lunar_details))
        .route("/api/compatibility", post(handlers::compatibility))
        .route("/api/advice", post(handlers::advice))
        .route("/api/calendar/:year/:month", get(handlers::calendar_month))
        .with_state(state)
}
