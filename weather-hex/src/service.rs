//! Weather Application Service
//!
//! Orchestrates the fetch-normalize-persist pipeline and the read-only
//! queries through the provider and repository ports.
//! Contains NO infrastructure logic - pure orchestration.

use weather_types::{
    CityName, DomainError, WeatherError, WeatherProvider, WeatherRecord, WeatherRepository,
    normalize,
};

/// Application service for weather operations.
///
/// Generic over `R: WeatherRepository` and `P: WeatherProvider` - the
/// adapters are injected at compile time. The service holds no per-request
/// state; each call runs independently.
pub struct WeatherService<R: WeatherRepository, P: WeatherProvider> {
    repo: R,
    provider: P,
}

impl<R: WeatherRepository, P: WeatherProvider> WeatherService<R, P> {
    /// Creates a new weather service with the given adapters.
    pub fn new(repo: R, provider: P) -> Self {
        Self { repo, provider }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Pipeline
    // ─────────────────────────────────────────────────────────────────────────────

    /// Fetches current weather for a city, persists it, and returns it.
    ///
    /// Validate → Fetch → Normalize → Persist. Any failing stage ends the
    /// pipeline; the returned record is the in-flight one, not a re-read row.
    pub async fn get_weather(&self, city: &str) -> Result<WeatherRecord, WeatherError> {
        let city = CityName::parse(city)?;
        tracing::info!(city = %city, "Fetching current weather");

        let envelope = self.provider.fetch(&city).await?;
        let record = normalize(envelope, &city);

        self.persist(&record).await?;
        Ok(record)
    }

    /// Stores a fetched record. Any storage fault here is a persistence
    /// failure, even though the upstream call already succeeded.
    async fn persist(&self, record: &WeatherRecord) -> Result<(), WeatherError> {
        match self.repo.save(record).await {
            Ok(row) => {
                tracing::info!(id = %row.id, city = %row.city, "Weather record persisted");
                Ok(())
            }
            Err(e) => {
                tracing::error!(city = %record.city, error = %e, "Failed to persist weather record");
                Err(WeatherError::Persistence(format!(
                    "Failed to persist weather data for {}",
                    record.city
                )))
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────────

    /// Lists stored records, newest first.
    pub async fn get_all_weather(
        &self,
        page: u32,
        size: u32,
    ) -> Result<Vec<WeatherRecord>, WeatherError> {
        if size == 0 {
            return Err(DomainError::InvalidPageSize.into());
        }

        let rows = self.repo.list_paged(page, size).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Lists every stored record for a city. No match is an empty list.
    pub async fn get_weather_by_city(&self, city: &str) -> Result<Vec<WeatherRecord>, WeatherError> {
        let city = trimmed(city)?;

        let rows = self.repo.list_by_city(city).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Gets the most recent stored record for a city.
    pub async fn get_latest_weather_by_city(
        &self,
        city: &str,
    ) -> Result<WeatherRecord, WeatherError> {
        let city = trimmed(city)?;

        self.repo
            .latest_by_city(city)
            .await?
            .map(Into::into)
            .ok_or_else(|| WeatherError::NotFound(format!("No weather record found for city {}", city)))
    }
}

fn trimmed(city: &str) -> Result<&str, WeatherError> {
    let city = city.trim();
    if city.is_empty() {
        return Err(DomainError::BlankCity.into());
    }
    Ok(city)
}
