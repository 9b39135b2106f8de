//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., SQLite).

use async_trait::async_trait;

use crate::domain::entities::RateRule;
use crate::error::DomainError;

/// Repository for RateRule entities
///
/// Every listing returns rules in insertion order. Rate lookup resolves
/// overlapping rules by taking the first match, so implementations must
/// keep that order stable across upserts.
#[async_trait]
pub trait RateRepository: Send + Sync {
    /// List every stored rule
    async fn find_all(&self) -> Result<Vec<RateRule>, DomainError>;

    /// Rules whose day list contains `day_token` and whose timezone is exactly `tz`
    async fn find_by_day_and_tz(
        &self,
        day_token: &str,
        tz: &str,
    ) -> Result<Vec<RateRule>, DomainError>;

    /// Insert a rule, or update only the price of the rule sharing its natural key
    async fn upsert(&self, rule: &RateRule) -> Result<(), DomainError>;

    /// Bulk insert, skipping rules whose natural key already exists.
    ///
    /// Returns the number of rows inserted.
    async fn insert_missing(&self, rules: &[RateRule]) -> Result<u64, DomainError>;
}
