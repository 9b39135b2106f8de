//! Price handlers
//!
//! Endpoint for pricing a parking window.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::{PriceQuote, TimeWindow};
use crate::error::AppError;
use crate::AppState;

/// Query params for a price lookup
#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Either `{"price": 1500}` or the bare string `"unavailable"`
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PriceResponse {
    Price { price: u32 },
    Unavailable(&'static str),
}

impl From<PriceQuote> for PriceResponse {
    fn from(quote: PriceQuote) -> Self {
        match quote {
            PriceQuote::Price(price) => PriceResponse::Price { price },
            PriceQuote::Unavailable => PriceResponse::Unavailable("unavailable"),
        }
    }
}

/// GET /price?start=<ISO-8601>&end=<ISO-8601>
///
/// Price for the window, or "unavailable" when no rate covers it.
pub async fn get_price(
    State(state): State<AppState>,
    Query(query): Query<PriceQuery>,
) -> Result<Json<PriceResponse>, AppError> {
    let window = TimeWindow::from_params(query.start.as_deref(), query.end.as_deref())?;
    let quote = state.pricing_service.quote(&window).await?;
    Ok(Json(quote.into()))
}
