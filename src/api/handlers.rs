//! API handlers
//!
//! Thin JSON endpoints over the oracle. Model failures come back as the
//! fallback values with status 200; only malformed input is an error.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::utils::{parse_date, validate_query};
use crate::api::ApiState;
use crate::domain::{month_grid, CalendarDay, CompatibilityResult, LunarDetails};
use crate::error::AppError;

/// Body of `GET /api/health`
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the server is up
    pub status: String,
    /// Crate version
    pub version: String,
    /// Human-readable status line
    pub message: String,
}

/// Body of `POST /api/lunar`
#[derive(Debug, Deserialize)]
pub struct LunarRequest {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
}

/// Body of `POST /api/compatibility`
#[derive(Debug, Deserialize)]
pub struct CompatibilityRequest {
    /// First birth date, `YYYY-MM-DD`
    pub date1: String,
    /// Second birth date, `YYYY-MM-DD`
    pub date2: String,
}

/// Body of `POST /api/advice`
#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    /// Free-text question
    pub query: String,
}

/// Response of `POST /api/advice`
#[derive(Debug, Serialize, Deserialize)]
pub struct AdviceResponse {
    /// Assistant reply
    pub reply: String,
}

/// Liveness probe
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "Backend is healthy".to_string(),
    })
}

/// Lunar details for one date
pub async fn lunar_details(
    State(state): State<ApiState>,
    Json(request): Json<LunarRequest>,
) -> Result<Json<LunarDetails>, AppError> {
    let date = parse_date(&request.date)?;
    let details = state.oracle.fetch_lunar_details(date).await;
    info!(date = %date, fallback = details.is_fallback(), "Lunar details served");
    Ok(Json(details))
}

/// Compatibility of two birth dates
pub async fn compatibility(
    State(state): State<ApiState>,
    Json(request): Json<CompatibilityRequest>,
) -> Result<Json<CompatibilityResult>, AppError> {
    let date1 = parse_date(&request.date1)?;
    let date2 = parse_date(&request.date2)?;
    let result = state.oracle.check_compatibility(date1, date2).await;
    info!(
        score = result.score,
        fallback = result.is_fallback(),
        "Compatibility served"
    );
    Ok(Json(result))
}

/// Assistant reply to a free-text question
pub async fn advice(
    State(state): State<ApiState>,
    Json(request): Json<AdviceRequest>,
) -> Result<Json<AdviceResponse>, AppError> {
    validate_query(&request.query)?;
    let reply = state.oracle.get_advice(&request.query).await;
    Ok(Json(AdviceResponse { reply }))
}

/// Month grid for `year`/`month`
pub async fn calendar_month(
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<Vec<CalendarDay>>, AppError> {
    let today = Local::now().date_naive();
    month_grid(year, month, today)
        .map(Json)
        .ok_or_else(|| AppError::InvalidDate(format!("no such month: {}-{}", year, month)))
}
