//! # Weather Client SDK
//!
//! A typed Rust client for the Weather API.

use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};

use weather_types::{CityQuery, PageQuery, WeatherRecord};

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Weather API client.
pub struct WeatherClient {
    base_url: String,
    http: Client,
}

impl WeatherClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Fetches current weather for a city; the server stores it too.
    pub async fn current(&self, city: &str) -> Result<WeatherRecord, ClientError> {
        self.get("/weather/current", &city_query(city)).await
    }

    /// Lists one page of stored records, newest first.
    pub async fn all(
        &self,
        page: Option<u32>,
        size: Option<u32>,
    ) -> Result<Vec<WeatherRecord>, ClientError> {
        self.get("/weather/all", &PageQuery { page, size }).await
    }

    /// Lists stored records for a city.
    pub async fn by_city(&self, city: &str) -> Result<Vec<WeatherRecord>, ClientError> {
        self.get("/weather/by-city", &city_query(city)).await
    }

    /// Most recent stored record for a city.
    pub async fn latest(&self, city: &str) -> Result<WeatherRecord, ClientError> {
        self.get("/weather/latest", &city_query(city)).await
    }

    async fn get<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

fn city_query(city: &str) -> CityQuery {
    CityQuery {
        city: Some(city.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn record_json(city: &str) -> serde_json::Value {
        serde_json::json!({
            "city": city,
            "country": "BR",
            "temperature": 25.3,
            "humidity": 70.0,
            "windSpeed": 5.2,
            "description": "céu limpo",
            "dateTime": "2026-10-18T12:00:00Z"
        })
    }

    #[test]
    fn test_client_creation() {
        let client = WeatherClient::new("http://localhost:3000");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = WeatherClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[tokio::test]
    async fn test_current_sends_city() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather/current"))
            .and(query_param("city", "São Paulo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(record_json("São paulo")))
            .expect(1)
            .mount(&server)
            .await;

        let record = WeatherClient::new(server.uri()).current("São Paulo").await.unwrap();

        assert_eq!(record.city, "São paulo");
        assert_eq!(record.wind_speed, Some(5.2));
    }

    #[tokio::test]
    async fn test_all_omits_unset_paging() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather/all"))
            .and(query_param("size", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let records = WeatherClient::new(server.uri()).all(None, Some(5)).await.unwrap();

        assert!(records.is_empty());
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("size=5"));
    }

    #[tokio::test]
    async fn test_api_error_carries_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather/latest"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": "No weather record found for city Recife",
                "code": 404,
                "timestamp": "2026-10-18T12:00:00Z"
            })))
            .mount(&server)
            .await;

        let err = WeatherClient::new(server.uri()).latest("Recife").await.unwrap_err();

        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "No weather record found for city Recife");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "healthy"})))
            .mount(&server)
            .await;

        assert!(WeatherClient::new(server.uri()).health().await.unwrap());
    }
}
