//! # Weather Types
//!
//! Domain types and port traits for the weather service.
//! This crate has ZERO external IO dependencies - only data structures,
//! normalization rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (CityName, WeatherRecord, ProviderEnvelope)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Error taxonomy and severities

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    CityName, ProviderEnvelope, StoredWeather, WeatherId, WeatherRecord, lookup_key, normalize,
    normalize_at,
};
pub use dto::*;
pub use error::{DomainError, ProviderError, RepoError, Severity, WeatherError};
pub use ports::{WeatherProvider, WeatherRepository};
