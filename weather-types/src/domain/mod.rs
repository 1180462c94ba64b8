//! Domain models for the weather service.

pub mod city;
pub mod envelope;
pub mod weather;

pub use city::{CityName, lookup_key};
pub use envelope::{
    Condition, MainMetrics, ProviderEnvelope, SysInfo, Wind, normalize, normalize_at,
};
pub use weather::{StoredWeather, WeatherId, WeatherRecord};
