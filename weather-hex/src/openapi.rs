//! OpenAPI document served through Swagger UI.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use utoipa::OpenApi;

use weather_types::{CityQuery, ErrorResponse, PageQuery, WeatherRecord};

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Fetch current weather for a city, store it and return it
#[utoipa::path(
    get,
    path = "/weather/current",
    tag = "weather",
    params(CityQuery),
    responses(
        (status = 200, description = "Current conditions", body = WeatherRecord),
        (status = 400, description = "Missing or blank city", body = ErrorResponse),
        (status = 404, description = "Provider has no match for the city", body = ErrorResponse),
        (status = 500, description = "Missing API key or storage failure", body = ErrorResponse),
        (status = 502, description = "Provider unreachable or returned an error", body = ErrorResponse)
    )
)]
async fn current_weather() {}

/// List stored records, newest first
#[utoipa::path(
    get,
    path = "/weather/all",
    tag = "weather",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of stored records", body = Vec<WeatherRecord>),
        (status = 400, description = "Invalid page or size", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn all_weather() {}

/// List stored records for a city (case-insensitive)
#[utoipa::path(
    get,
    path = "/weather/by-city",
    tag = "weather",
    params(CityQuery),
    responses(
        (status = 200, description = "Stored records for the city, possibly empty", body = Vec<WeatherRecord>),
        (status = 400, description = "Missing or blank city", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn weather_by_city() {}

/// Most recent stored record for a city
#[utoipa::path(
    get,
    path = "/weather/latest",
    tag = "weather",
    params(CityQuery),
    responses(
        (status = 200, description = "Most recent stored record", body = WeatherRecord),
        (status = 400, description = "Missing or blank city", body = ErrorResponse),
        (status = 404, description = "No record stored for the city", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn latest_weather() {}

/// OpenAPI documentation for the Weather API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Weather Service API",
        version = "1.0.0",
        description = "Fetches current conditions from OpenWeather, stores every observation and serves the history.",
        license(name = "MIT"),
    ),
    paths(
        health,
        current_weather,
        all_weather,
        weather_by_city,
        latest_weather,
    ),
    components(schemas(WeatherRecord, ErrorResponse)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "weather", description = "Current conditions and stored history"),
    )
)]
pub struct ApiDoc;
