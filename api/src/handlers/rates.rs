//! Rate handlers
//!
//! Endpoints for listing and upserting rate rules.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::domain::entities::RateRule;
use crate::error::AppError;
use crate::AppState;

/// GET /rates
///
/// Every stored rate, in insertion order.
pub async fn list_rates(State(state): State<AppState>) -> Result<Json<Vec<RateRule>>, AppError> {
    let rates = state.pricing_service.list_rates().await?;
    Ok(Json(rates))
}

/// PUT /rates
///
/// Create a rate, or reprice the rate with the same days, times and tz.
pub async fn put_rate(
    State(state): State<AppState>,
    body: Result<Json<RateRule>, JsonRejection>,
) -> Result<(StatusCode, Json<RateRule>), AppError> {
    let Json(rule) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let stored = state.pricing_service.upsert_rate(rule).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}
