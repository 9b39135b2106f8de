//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod price;
pub mod rates;

pub use price::get_price;
pub use rates::{list_rates, put_rate};
