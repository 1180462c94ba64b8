//! SQLite repository adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

use weather_types::{RepoError, StoredWeather, WeatherRecord, WeatherRepository, lookup_key};

use crate::types::{SqliteWeatherRow, encode_timestamp};

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &SqlitePool, sql: &str, name: &str) -> anyhow::Result<()> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                if let Some(parent) = std::path::Path::new(path).parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // Every connection to an in-memory database sees its own empty
        // database, so pin the pool to a single long-lived connection.
        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePool::connect_with(options).await?
        };

        execute_migration(&pool, include_str!("../migrations/0001_create_weather.sql"), "0001")
            .await?;

        tracing::debug!(url = %database_url, "SQLite weather store ready");
        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl WeatherRepository for SqliteRepo {
    async fn save(&self, record: &WeatherRecord) -> Result<StoredWeather, RepoError> {
        let row = StoredWeather::from_record(record);

        sqlx::query(
            r#"INSERT INTO weather (id, city, city_key, country, temperature, humidity, wind_speed, description, recorded_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(row.id.to_string())
        .bind(&row.city)
        .bind(lookup_key(&row.city))
        .bind(&row.country)
        .bind(row.temperature)
        .bind(row.humidity)
        .bind(row.wind_speed)
        .bind(&row.description)
        .bind(encode_timestamp(&row.recorded_at))
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row)
    }

    async fn list_paged(&self, page: u32, size: u32) -> Result<Vec<StoredWeather>, RepoError> {
        let offset = i64::from(page) * i64::from(size);

        let rows: Vec<SqliteWeatherRow> = sqlx::query_as(
            r#"SELECT id, city, country, temperature, humidity, wind_speed, description, recorded_at
               FROM weather ORDER BY recorded_at DESC LIMIT ? OFFSET ?"#,
        )
        .bind(i64::from(size))
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter().map(SqliteWeatherRow::into_domain).collect()
    }

    async fn list_by_city(&self, city: &str) -> Result<Vec<StoredWeather>, RepoError> {
        let rows: Vec<SqliteWeatherRow> = sqlx::query_as(
            r#"SELECT id, city, country, temperature, humidity, wind_speed, description, recorded_at
               FROM weather WHERE city_key = ? ORDER BY recorded_at DESC"#,
        )
        .bind(lookup_key(city))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter().map(SqliteWeatherRow::into_domain).collect()
    }

    async fn latest_by_city(&self, city: &str) -> Result<Option<StoredWeather>, RepoError> {
        let row: Option<SqliteWeatherRow> = sqlx::query_as(
            r#"SELECT id, city, country, temperature, humidity, wind_speed, description, recorded_at
               FROM weather WHERE city_key = ? ORDER BY recorded_at DESC LIMIT 1"#,
        )
        .bind(lookup_key(city))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(SqliteWeatherRow::into_domain).transpose()
    }
}
