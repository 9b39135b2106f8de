//! SQLite adapter tests
//!
//! Each test gets its own in-memory database with the schema applied.
//! The pool is pinned to one connection so every query sees the same database.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use super::*;
use crate::domain::ports::RateRepository;
use crate::test_utils::{rate, test_rate, wednesday_rate};

async fn get_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    create_schema(&db).await.expect("Failed to create schema");
    db
}

mod rate_repo_tests {
    use super::*;

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let repo = SqliteRateRepository::new(get_test_db().await);
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn schema_creation_is_idempotent() {
        let db = get_test_db().await;
        create_schema(&db).await.expect("Second create failed");
    }

    #[tokio::test]
    async fn upsert_then_list() {
        let repo = SqliteRateRepository::new(get_test_db().await);

        repo.upsert(&test_rate()).await.unwrap();
        repo.upsert(&wednesday_rate()).await.unwrap();

        let rates = repo.find_all().await.unwrap();
        assert_eq!(rates, vec![test_rate(), wednesday_rate()]);
    }

    #[tokio::test]
    async fn upsert_existing_key_updates_price_only() {
        let repo = SqliteRateRepository::new(get_test_db().await);
        repo.upsert(&test_rate()).await.unwrap();
        repo.upsert(&wednesday_rate()).await.unwrap();

        let mut repriced = test_rate();
        repriced.price = 4000;
        repo.upsert(&repriced).await.unwrap();

        let rates = repo.find_all().await.unwrap();
        assert_eq!(rates.len(), 2);
        // Row keeps its original position
        assert_eq!(rates[0], repriced);
        assert_eq!(rates[1], wednesday_rate());
    }

    #[tokio::test]
    async fn find_by_day_and_tz_filters_on_token_and_zone() {
        let repo = SqliteRateRepository::new(get_test_db().await);
        let mut eastern = wednesday_rate();
        eastern.tz = "America/New_York".to_string();

        repo.insert_missing(&[test_rate(), wednesday_rate(), eastern])
            .await
            .unwrap();

        let wednesday = repo
            .find_by_day_and_tz("we", "America/Chicago")
            .await
            .unwrap();
        assert_eq!(wednesday, vec![wednesday_rate()]);

        let thursday = repo
            .find_by_day_and_tz("th", "America/Chicago")
            .await
            .unwrap();
        assert_eq!(thursday, vec![test_rate()]);

        let saturday = repo
            .find_by_day_and_tz("sa", "America/Chicago")
            .await
            .unwrap();
        assert!(saturday.is_empty());
    }

    #[tokio::test]
    async fn find_by_day_ignores_case_of_day_list() {
        let repo = SqliteRateRepository::new(get_test_db().await);
        let capitalised = rate("Mon,WED", "0600-1800", 1750);
        repo.insert_missing(&[capitalised.clone()]).await.unwrap();

        let found = repo
            .find_by_day_and_tz("we", "America/Chicago")
            .await
            .unwrap();
        assert_eq!(found, vec![capitalised]);
    }

    #[tokio::test]
    async fn find_by_day_keeps_insertion_order() {
        let repo = SqliteRateRepository::new(get_test_db().await);
        let rules = vec![
            rate("wed", "0500-2000", 3000),
            rate("mon,wed,sat", "0100-0500", 1000),
            wednesday_rate(),
        ];
        repo.insert_missing(&rules).await.unwrap();

        let found = repo
            .find_by_day_and_tz("we", "America/Chicago")
            .await
            .unwrap();
        assert_eq!(found, rules);
    }

    #[tokio::test]
    async fn insert_missing_skips_existing_keys() {
        let repo = SqliteRateRepository::new(get_test_db().await);
        repo.upsert(&test_rate()).await.unwrap();

        let mut repriced = test_rate();
        repriced.price = 1;
        let inserted = repo
            .insert_missing(&[repriced, wednesday_rate()])
            .await
            .unwrap();
        assert_eq!(inserted, 1);

        let rates = repo.find_all().await.unwrap();
        assert_eq!(rates, vec![test_rate(), wednesday_rate()]);
    }

    #[tokio::test]
    async fn insert_missing_with_nothing_new() {
        let repo = SqliteRateRepository::new(get_test_db().await);
        repo.upsert(&test_rate()).await.unwrap();

        let inserted = repo.insert_missing(&[test_rate()]).await.unwrap();
        assert_eq!(inserted, 0);

        let inserted = repo.insert_missing(&[]).await.unwrap();
        assert_eq!(inserted, 0);
    }

    #[tokio::test]
    async fn stores_malformed_times_as_is() {
        let repo = SqliteRateRepository::new(get_test_db().await);
        let broken = rate("wed", "09002100", 999);
        repo.insert_missing(&[broken.clone()]).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap(), vec![broken]);
    }
}
