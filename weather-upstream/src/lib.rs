//! # Weather Upstream
//!
//! HTTP adapter for the OpenWeather current-conditions endpoint.
//!
//! [`OpenWeatherClient`] implements the [`WeatherProvider`] port: one GET per
//! call, no retries, and every failure classified into a [`ProviderError`]
//! at the point where it is detected.
//!
//! # Example
//! ```ignore
//! use weather_upstream::{OpenWeatherClient, UpstreamConfig};
//!
//! let config = UpstreamConfig::new(
//!     "https://api.openweathermap.org/data/2.5/weather",
//!     Some("my-key".to_string()),
//! );
//! let client = OpenWeatherClient::new(config)?;
//! let envelope = client.fetch(&CityName::parse("recife")?).await?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use weather_types::{CityName, ProviderEnvelope, ProviderError, WeatherProvider};

/// Default OpenWeather current-conditions endpoint.
pub const DEFAULT_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Unit system requested from the provider. Temperatures come back in Celsius.
pub const UNITS: &str = "metric";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Connection settings for the upstream provider.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    /// Checked on every call rather than at startup.
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl UpstreamConfig {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the transport timeout applied to each request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Client
// ─────────────────────────────────────────────────────────────────────────────

/// OpenWeather API client.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    config: UpstreamConfig,
    http: Client,
}

impl OpenWeatherClient {
    /// Creates a client with its own connection pool.
    pub fn new(config: UpstreamConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ProviderError::MissingApiKey)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn fetch(&self, city: &CityName) -> Result<ProviderEnvelope, ProviderError> {
        let api_key = self.api_key()?;

        tracing::info!(city = %city, "Querying OpenWeather");

        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[("q", city.as_str()), ("appid", api_key), ("units", UNITS)])
            .send()
            .await
            .map_err(|e| transport_error(city, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(city, e))?;

        if status == StatusCode::NOT_FOUND || provider_code(&body) == Some(404) {
            tracing::warn!(city = %city, %status, "OpenWeather has no match for city");
            return Err(ProviderError::CityNotFound(city.to_string()));
        }

        if !status.is_success() {
            tracing::error!(city = %city, %status, body = %truncate_body(&body), "OpenWeather request failed");
            return Err(ProviderError::Server(format!(
                "status {}: {}",
                status,
                truncate_body(&body)
            )));
        }

        if body.trim().is_empty() {
            tracing::error!(city = %city, "OpenWeather returned an empty body");
            return Err(ProviderError::Server("empty response".into()));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(city = %city, error = %e, "OpenWeather returned a malformed body");
            ProviderError::Server(format!("malformed response: {}", e))
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Classification helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Status fields OpenWeather puts in every body, including error bodies.
#[derive(Debug, Deserialize)]
struct ProviderStatus {
    cod: Option<serde_json::Value>,
}

/// Extracts the provider's own status code. `cod` is a number on success
/// and a string on errors.
fn provider_code(body: &str) -> Option<u16> {
    let status: ProviderStatus = serde_json::from_str(body).ok()?;
    match status.cod? {
        serde_json::Value::Number(n) => n.as_u64().and_then(|c| u16::try_from(c).ok()),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn transport_error(city: &CityName, err: reqwest::Error) -> ProviderError {
    // The request URL carries the API key.
    let err = err.without_url();

    if err.is_connect() || err.is_timeout() {
        tracing::error!(city = %city, error = %err, "Could not reach OpenWeather");
        ProviderError::Connection(err.to_string())
    } else {
        tracing::error!(city = %city, error = %err, "OpenWeather transport error");
        ProviderError::Server(err.to_string())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
