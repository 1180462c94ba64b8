//! Error types for the weather service.
//!
//! Each adapter reports failures in its own vocabulary (`ProviderError`,
//! `RepoError`); the `From` impls below classify them into the closed
//! `WeatherError` taxonomy that the HTTP boundary understands.

/// Domain-level errors (input validation).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("City name cannot be null or blank")]
    BlankCity,

    #[error("Page size must be greater than zero")]
    InvalidPageSize,
}

/// Upstream provider errors.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("OPENWEATHER_API_KEY is not configured")]
    MissingApiKey,

    #[error("Could not connect to the weather provider: {0}")]
    Connection(String),

    #[error("City not found or invalid: {0}")]
    CityNotFound(String),

    #[error("Weather provider error: {0}")]
    Server(String),
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Corrupt row: {0}")]
    Corrupt(String),
}

/// How bad a classified error is, used by the boundary to pick a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    ClientError,
    NotFound,
    UpstreamUnavailable,
    ServerError,
}

/// Application-level errors: the closed taxonomy every failure ends up in.
///
/// The `Display` output is the caller-facing message.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    UpstreamNotFound(String),

    #[error("{0}")]
    UpstreamConnection(String),

    #[error("{0}")]
    UpstreamServer(String),

    #[error("{0}")]
    Persistence(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Unexpected error: {0}")]
    Unclassified(String),
}

impl WeatherError {
    pub fn severity(&self) -> Severity {
        match self {
            WeatherError::InvalidInput(_) => Severity::ClientError,
            WeatherError::UpstreamNotFound(_) | WeatherError::NotFound(_) => Severity::NotFound,
            WeatherError::UpstreamConnection(_) | WeatherError::UpstreamServer(_) => {
                Severity::UpstreamUnavailable
            }
            WeatherError::Configuration(_)
            | WeatherError::Persistence(_)
            | WeatherError::Unclassified(_) => Severity::ServerError,
        }
    }

    /// Stable name of the error kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            WeatherError::InvalidInput(_) => "invalid_input",
            WeatherError::Configuration(_) => "configuration",
            WeatherError::UpstreamNotFound(_) => "upstream_not_found",
            WeatherError::UpstreamConnection(_) => "upstream_connection",
            WeatherError::UpstreamServer(_) => "upstream_server",
            WeatherError::Persistence(_) => "persistence",
            WeatherError::NotFound(_) => "not_found",
            WeatherError::Unclassified(_) => "unclassified",
        }
    }
}

impl From<DomainError> for WeatherError {
    fn from(err: DomainError) -> Self {
        WeatherError::InvalidInput(err.to_string())
    }
}

impl From<ProviderError> for WeatherError {
    fn from(err: ProviderError) -> Self {
        let message = err.to_string();
        match err {
            ProviderError::MissingApiKey => WeatherError::Configuration(message),
            ProviderError::Connection(_) => WeatherError::UpstreamConnection(message),
            ProviderError::CityNotFound(_) => WeatherError::UpstreamNotFound(message),
            ProviderError::Server(_) => WeatherError::UpstreamServer(message),
        }
    }
}

impl From<RepoError> for WeatherError {
    fn from(err: RepoError) -> Self {
        WeatherError::Persistence(err.to_string())
    }
}

impl From<anyhow::Error> for WeatherError {
    fn from(err: anyhow::Error) -> Self {
        WeatherError::Unclassified(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_errors_keep_their_kind() {
        assert!(matches!(
            WeatherError::from(ProviderError::MissingApiKey),
            WeatherError::Configuration(_)
        ));
        assert!(matches!(
            WeatherError::from(ProviderError::Connection("refused".into())),
            WeatherError::UpstreamConnection(_)
        ));
        assert!(matches!(
            WeatherError::from(ProviderError::CityNotFound("Atlantis".into())),
            WeatherError::UpstreamNotFound(_)
        ));
        assert!(matches!(
            WeatherError::from(ProviderError::Server("status 500".into())),
            WeatherError::UpstreamServer(_)
        ));
    }

    #[test]
    fn test_repo_error_is_persistence() {
        let err = WeatherError::from(RepoError::Database("connection reset".into()));
        assert!(matches!(err, WeatherError::Persistence(_)));
        assert_eq!(err.severity(), Severity::ServerError);
    }

    #[test]
    fn test_severities() {
        assert_eq!(
            WeatherError::InvalidInput(String::new()).severity(),
            Severity::ClientError
        );
        assert_eq!(
            WeatherError::Configuration(String::new()).severity(),
            Severity::ServerError
        );
        assert_eq!(
            WeatherError::UpstreamNotFound(String::new()).severity(),
            Severity::NotFound
        );
        assert_eq!(
            WeatherError::UpstreamConnection(String::new()).severity(),
            Severity::UpstreamUnavailable
        );
        assert_eq!(
            WeatherError::UpstreamServer(String::new()).severity(),
            Severity::UpstreamUnavailable
        );
        assert_eq!(
            WeatherError::NotFound(String::new()).severity(),
            Severity::NotFound
        );
        assert_eq!(
            WeatherError::Unclassified(String::new()).severity(),
            Severity::ServerError
        );
    }

    #[test]
    fn test_message_names_city() {
        let err = WeatherError::from(ProviderError::CityNotFound("Atlantis".into()));
        assert!(err.to_string().contains("Atlantis"));
    }

    #[test]
    fn test_anyhow_is_unclassified() {
        let err = WeatherError::from(anyhow::anyhow!("boom"));
        assert!(matches!(err, WeatherError::Unclassified(_)));
        assert_eq!(err.to_string(), "Unexpected error: boom");
    }
}
