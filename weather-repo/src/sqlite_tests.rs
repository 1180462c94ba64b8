//! SQLite repository integration tests.

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};
    use weather_types::{WeatherRecord, WeatherRepository};

    use crate::SqliteRepo;

    async fn setup_repo() -> SqliteRepo {
        SqliteRepo::new("sqlite::memory:").await.unwrap()
    }

    fn record(city: &str, at: DateTime<Utc>) -> WeatherRecord {
        WeatherRecord {
            city: city.to_string(),
            country: Some("BR".to_string()),
            temperature: Some(25.3),
            humidity: Some(70.0),
            wind_speed: Some(5.2),
            description: Some("céu limpo".to_string()),
            date_time: at,
        }
    }

    #[tokio::test]
    async fn test_save_round_trip() {
        let repo = setup_repo().await;
        let original = record("Florianópolis", Utc::now());

        let saved = repo.save(&original).await.unwrap();
        let rows = repo.list_by_city("Florianópolis").await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, saved.id);
        assert_eq!(rows[0].clone().into_record(), original);
    }

    #[tokio::test]
    async fn test_save_keeps_absent_fields_absent() {
        let repo = setup_repo().await;
        let sparse = WeatherRecord {
            city: "Recife".to_string(),
            country: None,
            temperature: None,
            humidity: Some(0.0),
            wind_speed: None,
            description: None,
            date_time: Utc::now(),
        };

        repo.save(&sparse).await.unwrap();
        let row = repo.latest_by_city("recife").await.unwrap().unwrap();

        assert_eq!(row.country, None);
        assert_eq!(row.temperature, None);
        assert_eq!(row.humidity, Some(0.0));
        assert_eq!(row.description, None);
    }

    #[tokio::test]
    async fn test_save_assigns_fresh_ids() {
        let repo = setup_repo().await;
        let r = record("Recife", Utc::now());

        let a = repo.save(&r).await.unwrap();
        let b = repo.save(&r).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(repo.list_by_city("Recife").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_list_by_city_is_case_insensitive() {
        let repo = setup_repo().await;
        repo.save(&record("Florianópolis", Utc::now())).await.unwrap();
        repo.save(&record("FLORIANÓPOLIS", Utc::now())).await.unwrap();
        repo.save(&record("Recife", Utc::now())).await.unwrap();

        let lower = repo.list_by_city("florianópolis").await.unwrap();
        let upper = repo.list_by_city("FLORIANÓPOLIS").await.unwrap();

        assert_eq!(lower.len(), 2);
        let mut lower_ids: Vec<_> = lower.iter().map(|r| r.id.to_string()).collect();
        let mut upper_ids: Vec<_> = upper.iter().map(|r| r.id.to_string()).collect();
        lower_ids.sort();
        upper_ids.sort();
        assert_eq!(lower_ids, upper_ids);
    }

    #[tokio::test]
    async fn test_list_by_city_exact_match_only() {
        let repo = setup_repo().await;
        repo.save(&record("São Paulo", Utc::now())).await.unwrap();

        assert!(repo.list_by_city("São").await.unwrap().is_empty());
        assert!(repo.list_by_city("Nowhere").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_by_city_newest_first() {
        let repo = setup_repo().await;
        let now = Utc::now();

        repo.save(&record("Recife", now - Duration::hours(1))).await.unwrap();
        repo.save(&record("Recife", now)).await.unwrap();

        let rows = repo.list_by_city("recife").await.unwrap();

        assert_eq!(rows.len(), 2);
        assert!(rows[0].recorded_at > rows[1].recorded_at);
    }

    #[tokio::test]
    async fn test_latest_by_city_picks_newest() {
        let repo = setup_repo().await;
        let now = Utc::now();

        repo.save(&record("Recife", now - Duration::hours(2))).await.unwrap();
        let newest = repo.save(&record("Recife", now)).await.unwrap();
        repo.save(&record("Recife", now - Duration::hours(1))).await.unwrap();
        repo.save(&record("Natal", now + Duration::hours(1))).await.unwrap();

        let latest = repo.latest_by_city("RECIFE").await.unwrap().unwrap();

        assert_eq!(latest.id, newest.id);
        assert_eq!(latest.recorded_at, now);
    }

    #[tokio::test]
    async fn test_latest_by_city_none() {
        let repo = setup_repo().await;

        let result = repo.latest_by_city("Atlantis").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_list_paged_newest_first() {
        let repo = setup_repo().await;
        let now = Utc::now();

        for (i, city) in ["A", "B", "C", "D", "E"].iter().enumerate() {
            repo.save(&record(city, now + Duration::minutes(i as i64)))
                .await
                .unwrap();
        }

        let first = repo.list_paged(0, 2).await.unwrap();
        let second = repo.list_paged(1, 2).await.unwrap();
        let third = repo.list_paged(2, 2).await.unwrap();
        let beyond = repo.list_paged(3, 2).await.unwrap();

        let cities = |rows: &[weather_types::StoredWeather]| {
            rows.iter().map(|r| r.city.clone()).collect::<Vec<_>>()
        };
        assert_eq!(cities(&first), vec!["E", "D"]);
        assert_eq!(cities(&second), vec!["C", "B"]);
        assert_eq!(cities(&third), vec!["A"]);
        assert!(beyond.is_empty());
    }

    #[tokio::test]
    async fn test_list_paged_large_size() {
        let repo = setup_repo().await;
        repo.save(&record("Recife", Utc::now())).await.unwrap();

        let rows = repo.list_paged(0, u32::MAX).await.unwrap();

        assert_eq!(rows.len(), 1);
    }
}
