//! SQLite adapters
//!
//! Implementations of repository traits using SeaORM and SQLite.

pub mod rate_repo;
pub mod schema;

#[cfg(test)]
mod integration_tests;

pub use rate_repo::SqliteRateRepository;
pub use schema::create_schema;
