//! Database row types for SQLite and PostgreSQL.
//!
//! SQLite has no native UUID or timestamp type, so its row stores both as
//! text; PostgreSQL maps them directly.

// ─────────────────────────────────────────────────────────────────────────────
// SQLite
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "sqlite")]
pub use sqlite_row::*;

#[cfg(feature = "sqlite")]
mod sqlite_row {
    use chrono::{DateTime, SecondsFormat, Utc};
    use sqlx::FromRow;

    use weather_types::{RepoError, StoredWeather, WeatherId};

    /// Weather row as stored by SQLite.
    #[derive(FromRow)]
    pub struct SqliteWeatherRow {
        pub id: String,
        pub city: String,
        pub country: Option<String>,
        pub temperature: Option<f64>,
        pub humidity: Option<f64>,
        pub wind_speed: Option<f64>,
        pub description: Option<String>,
        pub recorded_at: String,
    }

    impl SqliteWeatherRow {
        pub fn into_domain(self) -> Result<StoredWeather, RepoError> {
            let id: WeatherId = self
                .id
                .parse()
                .map_err(|e| RepoError::Corrupt(format!("invalid id {}: {}", self.id, e)))?;
            let recorded_at = DateTime::parse_from_rfc3339(&self.recorded_at)
                .map_err(|e| {
                    RepoError::Corrupt(format!("invalid timestamp {}: {}", self.recorded_at, e))
                })?
                .with_timezone(&Utc);

            Ok(StoredWeather {
                id,
                city: self.city,
                country: self.country,
                temperature: self.temperature,
                humidity: self.humidity,
                wind_speed: self.wind_speed,
                description: self.description,
                recorded_at,
            })
        }
    }

    /// Fixed-width RFC 3339 so that text ordering matches time ordering.
    pub fn encode_timestamp(ts: &DateTime<Utc>) -> String {
        ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "postgres")]
pub use pg_row::*;

#[cfg(feature = "postgres")]
mod pg_row {
    use chrono::{DateTime, Utc};
    use sqlx::FromRow;
    use uuid::Uuid;

    use weather_types::{StoredWeather, WeatherId};

    /// Weather row as stored by PostgreSQL.
    #[derive(FromRow)]
    pub struct PgWeatherRow {
        pub id: Uuid,
        pub city: String,
        pub country: Option<String>,
        pub temperature: Option<f64>,
        pub humidity: Option<f64>,
        pub wind_speed: Option<f64>,
        pub description: Option<String>,
        pub recorded_at: DateTime<Utc>,
    }

    impl PgWeatherRow {
        pub fn into_domain(self) -> StoredWeather {
            StoredWeather {
                id: WeatherId::from_uuid(self.id),
                city: self.city,
                country: self.country,
                temperature: self.temperature,
                humidity: self.humidity,
                wind_speed: self.wind_speed,
                description: self.description,
                recorded_at: self.recorded_at,
            }
        }
    }
}
