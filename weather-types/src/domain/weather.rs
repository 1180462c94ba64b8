//! Weather record domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Unique identifier for a stored weather row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct WeatherId(Uuid);

impl WeatherId {
    /// Creates a new random WeatherId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a WeatherId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for WeatherId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WeatherId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for WeatherId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Canonical weather observation, as produced by the normalizer and
/// returned to callers.
///
/// Only `city` and `date_time` are guaranteed; every other field mirrors
/// what the provider actually sent and serializes as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    #[schema(example = "Florianópolis")]
    pub city: String,
    /// ISO 3166 country code
    #[schema(example = "BR")]
    pub country: Option<String>,
    /// Temperature in degrees Celsius
    #[schema(example = 25.3)]
    pub temperature: Option<f64>,
    /// Relative humidity percentage
    #[schema(example = 70.0)]
    pub humidity: Option<f64>,
    /// Wind speed in meters per second
    #[schema(example = 5.2)]
    pub wind_speed: Option<f64>,
    #[schema(example = "céu limpo")]
    pub description: Option<String>,
    /// When this record was produced
    pub date_time: DateTime<Utc>,
}

/// A persisted weather row.
///
/// Rows are append-only: created once per successful pipeline run and
/// never updated.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredWeather {
    pub id: WeatherId,
    pub city: String,
    pub country: Option<String>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub description: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl StoredWeather {
    /// Wraps a record under a freshly assigned identifier.
    pub fn from_record(record: &WeatherRecord) -> Self {
        Self {
            id: WeatherId::new(),
            city: record.city.clone(),
            country: record.country.clone(),
            temperature: record.temperature,
            humidity: record.humidity,
            wind_speed: record.wind_speed,
            description: record.description.clone(),
            recorded_at: record.date_time,
        }
    }

    /// Maps the row back to the canonical shape, dropping the identifier.
    pub fn into_record(self) -> WeatherRecord {
        WeatherRecord {
            city: self.city,
            country: self.country,
            temperature: self.temperature,
            humidity: self.humidity,
            wind_speed: self.wind_speed,
            description: self.description,
            date_time: self.recorded_at,
        }
    }
}

impl From<StoredWeather> for WeatherRecord {
    fn from(row: StoredWeather) -> Self {
        row.into_record()
    }
}
