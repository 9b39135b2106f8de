//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod pricing_service;
pub mod time_window;

pub use pricing_service::{PriceQuote, PricingService, SeedOutcome};
pub use time_window::TimeWindow;
