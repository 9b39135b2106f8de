//! Pricing service
//!
//! Matches a lookup window against stored rate rules, and manages the rule set.

use std::path::Path;
use std::sync::Arc;

use chrono::{Datelike, Timelike};
use chrono_tz::Tz;

use super::time_window::TimeWindow;
use crate::domain::entities::{day_token, RateRule, RateSheet};
use crate::domain::ports::RateRepository;
use crate::error::{AppError, DomainError, SeedError};

/// Outcome of a price lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceQuote {
    Price(u32),
    Unavailable,
}

/// Outcome of startup seeding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store already held rules; the rate sheet was not read
    Skipped,
    /// Number of rules inserted from the rate sheet
    Loaded(u64),
}

/// Service for pricing lookups and rate management
pub struct PricingService<RR>
where
    RR: RateRepository,
{
    rates: Arc<RR>,
    reference_tz: Tz,
}

impl<RR> PricingService<RR>
where
    RR: RateRepository,
{
    pub fn new(rates: Arc<RR>, reference_tz: Tz) -> Self {
        Self {
            rates,
            reference_tz,
        }
    }

    /// Timezone used to derive weekday and hours, and to select eligible rules
    pub fn reference_tz(&self) -> Tz {
        self.reference_tz
    }

    /// Price a window.
    ///
    /// Weekday and hours are read in the reference timezone. Candidates come
    /// back in store order and the first one whose range covers the window
    /// wins. Candidates with an undecodable range are skipped.
    pub async fn quote(&self, window: &TimeWindow) -> Result<PriceQuote, AppError> {
        if !window.is_priceable() {
            tracing::debug!(hours = window.whole_hours(), "Window outside priceable range");
            return Ok(PriceQuote::Unavailable);
        }

        let start = window.start.with_timezone(&self.reference_tz);
        let end = window.end.with_timezone(&self.reference_tz);
        let token = day_token(start.weekday());

        let candidates = self
            .rates
            .find_by_day_and_tz(token, self.reference_tz.name())
            .await?;

        let quote = match first_covering(&candidates, start.hour(), end.hour()) {
            Some(rule) => PriceQuote::Price(rule.price),
            None => PriceQuote::Unavailable,
        };

        tracing::debug!(
            day = token,
            start_hour = start.hour(),
            end_hour = end.hour(),
            candidates = candidates.len(),
            ?quote,
            "Priced window"
        );

        Ok(quote)
    }

    /// List every stored rule
    pub async fn list_rates(&self) -> Result<Vec<RateRule>, AppError> {
        Ok(self.rates.find_all().await?)
    }

    /// Create a rule, or update the price of the rule with the same days/times/tz
    pub async fn upsert_rate(&self, rule: RateRule) -> Result<RateRule, AppError> {
        validate_rule(&rule)?;
        self.rates.upsert(&rule).await?;
        tracing::info!(rule = %rule, "Rate upserted");
        Ok(rule)
    }

    /// Load the rate sheet at `path` into an empty store.
    ///
    /// A store that already holds rules is left untouched and the file is
    /// not read.
    pub async fn seed_if_empty(&self, path: &Path) -> Result<SeedOutcome, AppError> {
        if !self.rates.find_all().await?.is_empty() {
            tracing::info!("Rates already present, skipping seed");
            return Ok(SeedOutcome::Skipped);
        }

        let sheet = read_rate_sheet(path).await?;
        for rule in &sheet.rates {
            if let Err(e) = rule.hour_range() {
                tracing::warn!(rule = %rule, error = %e, "Seeded rate will never match");
            }
        }

        let inserted = self.rates.insert_missing(&sheet.rates).await?;
        tracing::info!(inserted, path = %path.display(), "Seeded rates");
        Ok(SeedOutcome::Loaded(inserted))
    }
}

/// First rule whose hour range covers `start_hour..=end_hour`
fn first_covering(candidates: &[RateRule], start_hour: u32, end_hour: u32) -> Option<&RateRule> {
    candidates.iter().find(|rule| match rule.hour_range() {
        Ok(range) => range.covers(start_hour, end_hour),
        Err(e) => {
            tracing::warn!(rule = %rule, error = %e, "Skipping rate with malformed times");
            false
        }
    })
}

fn validate_rule(rule: &RateRule) -> Result<(), DomainError> {
    if rule.days.trim().is_empty() {
        return Err(DomainError::Validation("days must not be empty".to_string()));
    }
    if rule.tz.trim().is_empty() {
        return Err(DomainError::Validation("tz must not be empty".to_string()));
    }
    rule.hour_range()
        .map_err(|e| DomainError::Validation(format!("times: {}", e)))?;
    Ok(())
}

async fn read_rate_sheet(path: &Path) -> Result<RateSheet, SeedError> {
    let raw = tokio::fs::read(path).await.map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_slice(&raw)?)
}
