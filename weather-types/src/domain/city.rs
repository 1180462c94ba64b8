//! City name handling.

use crate::error::DomainError;

/// A validated, case-normalized city name.
///
/// Construction trims surrounding whitespace and rewrites the casing to
/// "first letter upper, remainder lower", so `"  sÃO PAULO "` becomes
/// `"São paulo"`. A blank input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CityName(String);

impl CityName {
    /// Parses and normalizes a raw city name.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let Some(first) = chars.next() else {
            return Err(DomainError::BlankCity);
        };

        let mut name: String = first.to_uppercase().collect();
        name.push_str(&chars.as_str().to_lowercase());
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CityName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Key used for case-insensitive city lookups.
///
/// Stored alongside every row and computed from the query input, so matching
/// does not depend on the database's own (often ASCII-only) case folding.
pub fn lookup_key(city: &str) -> String {
    city.trim().to_lowercase()
}
