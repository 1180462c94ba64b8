//! Repository port trait.
//!
//! Adapters (Postgres, SQLite, in-memory) implement this trait.

use crate::domain::{StoredWeather, WeatherRecord};
use crate::error::RepoError;

/// Persistence port for weather observations.
///
/// Storage is append-only: there is no update or delete operation.
/// City lookups are case-insensitive exact matches.
#[async_trait::async_trait]
pub trait WeatherRepository: Send + Sync + 'static {
    /// Stores a record under a fresh identifier, keeping its timestamp.
    async fn save(&self, record: &WeatherRecord) -> Result<StoredWeather, RepoError>;

    /// Lists rows newest first. `page` is zero-based.
    async fn list_paged(&self, page: u32, size: u32) -> Result<Vec<StoredWeather>, RepoError>;

    /// Lists every row stored for a city, newest first.
    async fn list_by_city(&self, city: &str) -> Result<Vec<StoredWeather>, RepoError>;

    /// Gets the most recent row for a city, if any.
    async fn latest_by_city(&self, city: &str) -> Result<Option<StoredWeather>, RepoError>;
}
