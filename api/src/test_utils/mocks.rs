//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::RateRule;
use crate::domain::ports::RateRepository;
use crate::error::DomainError;

fn same_key(a: &RateRule, b: &RateRule) -> bool {
    a.days == b.days && a.times == b.times && a.tz == b.tz
}

// ============================================================================
// In-Memory Rate Repository
// ============================================================================

/// Keeps rules in insertion order, like the SQLite adapter
#[derive(Default)]
pub struct InMemoryRateRepository {
    rates: Arc<RwLock<Vec<RateRule>>>,
}

impl InMemoryRateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with rates for testing, bypassing validation
    pub fn with_rates(self, rates: Vec<RateRule>) -> Self {
        self.rates.write().unwrap().extend(rates);
        self
    }
}

#[async_trait]
impl RateRepository for InMemoryRateRepository {
    async fn find_all(&self) -> Result<Vec<RateRule>, DomainError> {
        Ok(self.rates.read().unwrap().clone())
    }

    async fn find_by_day_and_tz(
        &self,
        day_token: &str,
        tz: &str,
    ) -> Result<Vec<RateRule>, DomainError> {
        let rates = self.rates.read().unwrap();
        Ok(rates
            .iter()
            .filter(|r| r.applies_on(day_token) && r.tz == tz)
            .cloned()
            .collect())
    }

    async fn upsert(&self, rule: &RateRule) -> Result<(), DomainError> {
        let mut rates = self.rates.write().unwrap();
        match rates.iter_mut().find(|r| same_key(r, rule)) {
            Some(existing) => existing.price = rule.price,
            None => rates.push(rule.clone()),
        }
        Ok(())
    }

    async fn insert_missing(&self, rules: &[RateRule]) -> Result<u64, DomainError> {
        let mut rates = self.rates.write().unwrap();
        let mut inserted = 0;
        for rule in rules {
            if !rates.iter().any(|r| same_key(r, rule)) {
                rates.push(rule.clone());
                inserted += 1;
            }
        }
        Ok(inserted)
    }
}

// ============================================================================
// Failing Rate Repository
// ============================================================================

/// Every call fails as if the store were unreachable
pub struct FailingRateRepository;

#[async_trait]
impl RateRepository for FailingRateRepository {
    async fn find_all(&self) -> Result<Vec<RateRule>, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }

    async fn find_by_day_and_tz(
        &self,
        _day_token: &str,
        _tz: &str,
    ) -> Result<Vec<RateRule>, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }

    async fn upsert(&self, _rule: &RateRule) -> Result<(), DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }

    async fn insert_missing(&self, _rules: &[RateRule]) -> Result<u64, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }
}
