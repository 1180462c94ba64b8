//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use weather_types::{
    CityQuery, ErrorResponse, PageQuery, Severity, WeatherError, WeatherProvider, WeatherRecord,
    WeatherRepository,
};

use crate::WeatherService;

/// Application state shared across handlers.
pub struct AppState<R: WeatherRepository, P: WeatherProvider> {
    pub service: WeatherService<R, P>,
}

/// Wrapper to implement IntoResponse for WeatherError (orphan rule workaround).
#[derive(Debug)]
pub struct ApiError(pub WeatherError);

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        ApiError(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError(WeatherError::InvalidInput(rejection.body_text()))
    }
}

/// Maps a severity to the response status.
pub fn status_for(severity: Severity) -> StatusCode {
    match severity {
        Severity::ClientError => StatusCode::BAD_REQUEST,
        Severity::NotFound => StatusCode::NOT_FOUND,
        Severity::UpstreamUnavailable => StatusCode::BAD_GATEWAY,
        Severity::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let severity = self.0.severity();
        let status = status_for(severity);

        match severity {
            Severity::ClientError | Severity::NotFound => {
                tracing::warn!(kind = self.0.kind(), status = status.as_u16(), "{}", self.0)
            }
            Severity::UpstreamUnavailable | Severity::ServerError => {
                tracing::error!(kind = self.0.kind(), status = status.as_u16(), "{}", self.0)
            }
        }

        let body = ErrorResponse {
            error: self.0.to_string(),
            code: status.as_u16(),
            timestamp: Utc::now(),
        };

        (status, Json(body)).into_response()
    }
}

/// Extracts the `city` parameter, treating a missing one as invalid input.
fn required_city(query: Result<Query<CityQuery>, QueryRejection>) -> Result<String, ApiError> {
    let Query(query) = query?;
    query.city.ok_or_else(|| {
        ApiError(WeatherError::InvalidInput(
            "Query parameter 'city' is required".into(),
        ))
    })
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Fetch, persist and return current weather for a city.
#[tracing::instrument(skip(state))]
pub async fn current_weather<R: WeatherRepository, P: WeatherProvider>(
    State(state): State<Arc<AppState<R, P>>>,
    query: Result<Query<CityQuery>, QueryRejection>,
) -> Result<Json<WeatherRecord>, ApiError> {
    let city = required_city(query)?;
    let record = state.service.get_weather(&city).await?;
    Ok(Json(record))
}

/// List stored records, newest first.
#[tracing::instrument(skip(state))]
pub async fn all_weather<R: WeatherRepository, P: WeatherProvider>(
    State(state): State<Arc<AppState<R, P>>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Vec<WeatherRecord>>, ApiError> {
    let Query(page) = query?;
    let records = state
        .service
        .get_all_weather(page.page(), page.size())
        .await?;
    Ok(Json(records))
}

/// List stored records for a city.
#[tracing::instrument(skip(state))]
pub async fn weather_by_city<R: WeatherRepository, P: WeatherProvider>(
    State(state): State<Arc<AppState<R, P>>>,
    query: Result<Query<CityQuery>, QueryRejection>,
) -> Result<Json<Vec<WeatherRecord>>, ApiError> {
    let city = required_city(query)?;
    let records = state.service.get_weather_by_city(&city).await?;
    Ok(Json(records))
}

/// Most recent stored record for a city.
#[tracing::instrument(skip(state))]
pub async fn latest_weather<R: WeatherRepository, P: WeatherProvider>(
    State(state): State<Arc<AppState<R, P>>>,
    query: Result<Query<CityQuery>, QueryRejection>,
) -> Result<Json<WeatherRecord>, ApiError> {
    let city = required_city(query)?;
    let record = state.service.get_latest_weather_by_city(&city).await?;
    Ok(Json(record))
}
