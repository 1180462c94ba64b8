//! # Weather Hex
//!
//! Application service layer and HTTP adapter for the weather service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (the fetch-normalize-persist pipeline)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document served through Swagger UI
//!
//! The service is generic over `R: WeatherRepository` and
//! `P: WeatherProvider`, allowing different adapters to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::WeatherService;
