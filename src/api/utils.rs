//! API utility functions
//!
//! Input validation shared by the handlers.

use chrono::NaiveDate;

use crate::error::AppError;

/// Maximum query length in characters
pub const MAX_QUERY_LENGTH: usize = 10_000;

/// Parse an ISO `YYYY-MM-DD` calendar date
pub fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| AppError::InvalidDate(format!("'{}': {}", raw, e)))
}

/// Validate an assistant query
///
/// # Returns
/// * `Ok(())` - Query is valid
/// * `Err(AppError)` - Query is empty, whitespace only, or too long
pub fn validate_query(query: &str) -> Result<(), AppError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidQuery("Query cannot be empty".to_string()));
    }
    if trimmed.chars().count() > MAX_QUERY_LENGTH {
        return Err(AppError::InvalidQuery(format!(
            "Query exceeds maximum length of {} characters",
            MAX_QUERY_LENGTH
        )));
    }
    Ok(())
}
