//! Data Transfer Objects (DTOs) for requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Page used when the caller does not pass one.
pub const DEFAULT_PAGE: u32 = 0;
/// Page size used when the caller does not pass one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

// ─────────────────────────────────────────────────────────────────────────────
// Query DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Query string carrying a city name.
///
/// The field is optional so that a missing parameter reaches the service
/// and is classified like a blank one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CityQuery {
    /// City name, case-insensitive
    #[param(example = "Florianópolis")]
    pub city: Option<String>,
}

/// Query string for the paginated listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Zero-based page number (default 0)
    #[param(example = 0)]
    pub page: Option<u32>,
    /// Page size, greater than zero (default 10)
    #[param(example = 10)]
    pub size: Option<u32>,
}

impl PageQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn size(&self) -> u32 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Response DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Error body returned for every classified failure.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Descriptive message
    #[schema(example = "City not found or invalid: Atlantis")]
    pub error: String,
    /// HTTP status code
    #[schema(example = 404)]
    pub code: u16,
    /// When the error was produced
    pub timestamp: DateTime<Utc>,
}
