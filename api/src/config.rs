use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use chrono_tz::Tz;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Rate sheet loaded into an empty store at startup
    pub rates_file: PathBuf,
    /// Zone weekday and hours are read in; only rules stored under it are priced
    pub reference_tz: Tz,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let reference_tz = env::var("REFERENCE_TIMEZONE")
            .unwrap_or_else(|_| "America/Chicago".to_string());
        let reference_tz = reference_tz
            .parse::<Tz>()
            .map_err(|e| anyhow!("REFERENCE_TIMEZONE {:?}: {}", reference_tz, e))?;

        let port = match env::var("PORT") {
            Ok(port) => port.parse().context("PORT must be a port number")?,
            Err(_) => 5000,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://rates.db?mode=rwc".to_string()),
            rates_file: env::var("RATES_FILE")
                .unwrap_or_else(|_| "rates.json".to_string())
                .into(),
            reference_tz,
            port,
        })
    }
}
