//! SQLite adapter for RateRepository

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, QueryFilter, QueryOrder, Select,
    Set,
};

use crate::domain::entities::RateRule;
use crate::domain::ports::RateRepository;
use crate::entity::rates;
use crate::error::DomainError;

/// SQLite implementation of RateRepository
///
/// Rows are returned in `rowid` order, which is insertion order; an upsert
/// that only changes a price keeps the row where it was.
pub struct SqliteRateRepository {
    db: DatabaseConnection,
}

impl SqliteRateRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn natural_key() -> OnConflict {
        OnConflict::columns([rates::Column::Days, rates::Column::Times, rates::Column::Tz])
    }

    async fn fetch(&self, query: Select<rates::Entity>) -> Result<Vec<RateRule>, DomainError> {
        let results = query
            .order_by(Expr::cust("rowid"), Order::Asc)
            .all(&self.db)
            .await?;

        results.into_iter().map(RateRule::try_from).collect()
    }
}

#[async_trait]
impl RateRepository for SqliteRateRepository {
    async fn find_all(&self) -> Result<Vec<RateRule>, DomainError> {
        self.fetch(rates::Entity::find()).await
    }

    async fn find_by_day_and_tz(
        &self,
        day_token: &str,
        tz: &str,
    ) -> Result<Vec<RateRule>, DomainError> {
        let query = rates::Entity::find()
            .filter(rates::Column::Days.contains(day_token))
            .filter(rates::Column::Tz.eq(tz));

        self.fetch(query).await
    }

    async fn upsert(&self, rule: &RateRule) -> Result<(), DomainError> {
        rates::Entity::insert(active_model(rule))
            .on_conflict(
                Self::natural_key()
                    .update_column(rates::Column::Price)
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(())
    }

    async fn insert_missing(&self, rules: &[RateRule]) -> Result<u64, DomainError> {
        if rules.is_empty() {
            return Ok(0);
        }

        let result = rates::Entity::insert_many(rules.iter().map(active_model))
            .on_conflict(Self::natural_key().do_nothing().to_owned())
            .exec_without_returning(&self.db)
            .await;

        match result {
            Ok(inserted) => Ok(inserted),
            Err(DbErr::RecordNotInserted) => Ok(0),
            Err(e) => Err(e.into()),
        }
    }
}

fn active_model(rule: &RateRule) -> rates::ActiveModel {
    rates::ActiveModel {
        days: Set(rule.days.clone()),
        times: Set(rule.times.clone()),
        tz: Set(rule.tz.clone()),
        price: Set(i64::from(rule.price)),
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<rates::Model> for RateRule {
    type Error = DomainError;

    fn try_from(model: rates::Model) -> Result<Self, Self::Error> {
        let price = u32::try_from(model.price).map_err(|_| {
            DomainError::Database(format!(
                "stored price {} out of range for [{}] {} {}",
                model.price, model.days, model.times, model.tz
            ))
        })?;

        Ok(RateRule {
            days: model.days,
            times: model.times,
            tz: model.tz,
            price,
        })
    }
}
