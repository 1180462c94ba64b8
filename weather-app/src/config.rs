//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use weather_upstream::{DEFAULT_API_URL, UpstreamConfig};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub upstream_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("PORT must be a valid port number: {}", e))?,
            None => DEFAULT_PORT,
        };

        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let upstream_url =
            lookup("OPENWEATHER_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        // A missing key fails each fetch, not startup.
        let api_key = lookup("OPENWEATHER_API_KEY").filter(|key| !key.trim().is_empty());

        let timeout_secs = match lookup("OPENWEATHER_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|e| {
                anyhow::anyhow!("OPENWEATHER_TIMEOUT_SECS must be a whole number: {}", e)
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            port,
            database_url,
            upstream_url,
            api_key,
            timeout_secs,
        })
    }

    /// Settings for the OpenWeather client.
    pub fn upstream(&self) -> UpstreamConfig {
        UpstreamConfig::new(self.upstream_url.clone(), self.api_key.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}
