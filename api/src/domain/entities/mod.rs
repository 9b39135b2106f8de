//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod rate_rule;

pub use rate_rule::{day_token, RateRule, RateSheet};
