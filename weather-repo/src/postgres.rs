//! PostgreSQL repository adapter.

use async_trait::async_trait;
use sqlx::PgPool;

use weather_types::{RepoError, StoredWeather, WeatherRecord, WeatherRepository, lookup_key};

use crate::types::PgWeatherRow;

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository implementation.
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
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

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        execute_migration(
            &pool,
            include_str!("../migrations/0001_create_weather_pg.sql"),
            "0001",
        )
        .await?;
        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl WeatherRepository for PostgresRepo {
    async fn save(&self, record: &WeatherRecord) -> Result<StoredWeather, RepoError> {
        let row = StoredWeather::from_record(record);

        sqlx::query(
            r#"INSERT INTO weather (id, city, city_key, country, temperature, humidity, wind_speed, description, recorded_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)"#,
        )
        .bind(*row.id.as_uuid())
        .bind(&row.city)
        .bind(lookup_key(&row.city))
        .bind(&row.country)
        .bind(row.temperature)
        .bind(row.humidity)
        .bind(row.wind_speed)
        .bind(&row.description)
        .bind(row.recorded_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row)
    }

    async fn list_paged(&self, page: u32, size: u32) -> Result<Vec<StoredWeather>, RepoError> {
        let offset = i64::from(page) * i64::from(size);

        let rows: Vec<PgWeatherRow> = sqlx::query_as(
            r#"SELECT id, city, country, temperature, humidity, wind_speed, description, recorded_at
               FROM weather ORDER BY recorded_at DESC LIMIT $1 OFFSET $2"#,
        )
        .bind(i64::from(size))
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(PgWeatherRow::into_domain).collect())
    }

    async fn list_by_city(&self, city: &str) -> Result<Vec<StoredWeather>, RepoError> {
        let rows: Vec<PgWeatherRow> = sqlx::query_as(
            r#"SELECT id, city, country, temperature, humidity, wind_speed, description, recorded_at
               FROM weather WHERE city_key = $1 ORDER BY recorded_at DESC"#,
        )
        .bind(lookup_key(city))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(PgWeatherRow::into_domain).collect())
    }

    async fn latest_by_city(&self, city: &str) -> Result<Option<StoredWeather>, RepoError> {
        let row: Option<PgWeatherRow> = sqlx::query_as(
            r#"SELECT id, city, country, temperature, humidity, wind_speed, description, recorded_at
               FROM weather WHERE city_key = $1 ORDER BY recorded_at DESC LIMIT 1"#,
        )
        .bind(lookup_key(city))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.map(PgWeatherRow::into_domain))
    }
}
