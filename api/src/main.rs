//! Parking Rates API Server
//!
//! Prices a parking window against stored flat rate rules, and manages those rules.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{create_schema, SqliteRateRepository};
use app::{PricingService, SeedOutcome};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pricing_service: Arc<PricingService<SqliteRateRepository>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router over the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Pricing
        .route("/price", get(handlers::get_price))
        // Rate management
        .route("/rates", get(handlers::list_rates).put(handlers::put_rate))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,parking_rates_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Parking Rates API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to SQLite
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    create_schema(&db)
        .await
        .context("Failed to create schema")?;
    tracing::info!("Database connected");

    // Create adapters
    let rate_repo = Arc::new(SqliteRateRepository::new(db));

    // Create application services
    let pricing_service = Arc::new(PricingService::new(rate_repo, config.reference_tz));
    tracing::info!(tz = %pricing_service.reference_tz(), "Pricing in reference timezone");

    // Seed an empty store
    match pricing_service
        .seed_if_empty(&config.rates_file)
        .await
        .with_context(|| format!("Failed to load {}", config.rates_file.display()))?
    {
        SeedOutcome::Loaded(count) => tracing::info!("Loaded {} rates", count),
        SeedOutcome::Skipped => tracing::info!("Using stored rates"),
    }

    let app = router(AppState { pricing_service });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
