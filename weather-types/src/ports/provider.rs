//! Upstream weather provider port.
//!
//! Implementations can be HTTP clients, canned providers for tests, etc.

use crate::domain::{CityName, ProviderEnvelope};
use crate::error::ProviderError;

/// Port trait for the upstream current-conditions provider.
#[async_trait::async_trait]
pub trait WeatherProvider: Send + Sync + 'static {
    /// Fetches current conditions for a city.
    ///
    /// Performs exactly one upstream call and returns the raw envelope
    /// without checking which fields are present.
    async fn fetch(&self, city: &CityName) -> Result<ProviderEnvelope, ProviderError>;
}
