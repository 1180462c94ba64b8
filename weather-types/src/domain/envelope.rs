//! Provider envelope and normalization.
//!
//! The upstream provider returns a loosely-typed document in which any
//! nested group can be missing entirely. Each group is modeled as an
//! `Option` so that "absent" and "zero" stay distinguishable all the way
//! into the canonical record.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::city::CityName;
use super::weather::WeatherRecord;

/// Raw current-conditions response from the weather provider.
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderEnvelope {
    pub name: Option<String>,
    pub main: Option<MainMetrics>,
    pub wind: Option<Wind>,
    pub sys: Option<SysInfo>,
    pub weather: Option<Vec<Condition>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MainMetrics {
    pub temp: Option<f64>,
    pub humidity: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SysInfo {
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub description: Option<String>,
}

/// Normalizes an envelope into a canonical record stamped with the current time.
///
/// The stamp is truncated to microseconds, the finest precision every
/// storage backend keeps.
pub fn normalize(envelope: ProviderEnvelope, requested: &CityName) -> WeatherRecord {
    normalize_at(envelope, requested, Utc::now().trunc_subsecs(6))
}

/// Normalizes an envelope using an explicit generation instant.
///
/// A missing group yields missing fields, never an error. Only the first
/// condition's description is kept. The city falls back to the requested
/// name when the provider omits its own.
pub fn normalize_at(
    envelope: ProviderEnvelope,
    requested: &CityName,
    now: DateTime<Utc>,
) -> WeatherRecord {
    let ProviderEnvelope {
        name,
        main,
        wind,
        sys,
        weather,
    } = envelope;

    let city = name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| requested.as_str().to_string());

    let (temperature, humidity) = main.map_or((None, None), |m| (m.temp, m.humidity));

    WeatherRecord {
        city,
        country: sys.and_then(|s| s.country),
        temperature,
        humidity,
        wind_speed: wind.and_then(|w| w.speed),
        description: weather
            .and_then(|conditions| conditions.into_iter().next())
            .and_then(|c| c.description),
        date_time: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floripa() -> CityName {
        CityName::parse("florianópolis").unwrap()
    }

    #[test]
    fn test_normalize_full_envelope() {
        let json = r#"{
            "coord": {"lon": -48.55, "lat": -27.6},
            "weather": [
                {"id": 800, "main": "Clear", "description": "céu limpo", "icon": "01d"},
                {"id": 801, "main": "Clouds", "description": "nuvens", "icon": "02d"}
            ],
            "main": {"temp": 25.3, "feels_like": 25.9, "humidity": 70},
            "wind": {"speed": 5.2, "deg": 90},
            "sys": {"country": "BR", "sunrise": 1700000000},
            "name": "Florianópolis",
            "cod": 200
        }"#;
        let envelope: ProviderEnvelope = serde_json::from_str(json).unwrap();
        let now = Utc::now();

        let record = normalize_at(envelope, &floripa(), now);

        assert_eq!(record.city, "Florianópolis");
        assert_eq!(record.country.as_deref(), Some("BR"));
        assert_eq!(record.temperature, Some(25.3));
        assert_eq!(record.humidity, Some(70.0));
        assert_eq!(record.wind_speed, Some(5.2));
        assert_eq!(record.description.as_deref(), Some("céu limpo"));
        assert_eq!(record.date_time, now);
    }

    #[test]
    fn test_normalize_all_groups_absent() {
        let envelope: ProviderEnvelope =
            serde_json::from_str(r#"{"name": "Florianópolis"}"#).unwrap();

        let before = Utc::now().trunc_subsecs(6);
        let record = normalize(envelope, &floripa());

        assert_eq!(record.country, None);
        assert_eq!(record.temperature, None);
        assert_eq!(record.humidity, None);
        assert_eq!(record.wind_speed, None);
        assert_eq!(record.description, None);
        assert!(record.date_time >= before);
    }

    #[test]
    fn test_normalize_null_groups_are_absent() {
        let envelope: ProviderEnvelope =
            serde_json::from_str(r#"{"main": null, "wind": null, "sys": null, "weather": null}"#)
                .unwrap();

        let record = normalize(envelope, &floripa());

        assert_eq!(record.temperature, None);
        assert_eq!(record.wind_speed, None);
    }

    #[test]
    fn test_normalize_partial_group() {
        let envelope: ProviderEnvelope =
            serde_json::from_str(r#"{"main": {"humidity": 0}, "sys": {}}"#).unwrap();

        let record = normalize(envelope, &floripa());

        assert_eq!(record.temperature, None);
        assert_eq!(record.humidity, Some(0.0));
        assert_eq!(record.country, None);
    }

    #[test]
    fn test_normalize_empty_condition_list() {
        let envelope = ProviderEnvelope {
            weather: Some(vec![]),
            ..Default::default()
        };

        assert_eq!(normalize(envelope, &floripa()).description, None);
    }

    #[test]
    fn test_normalize_falls_back_to_requested_city() {
        let envelope = ProviderEnvelope {
            name: Some("   ".into()),
            ..Default::default()
        };

        assert_eq!(normalize(envelope, &floripa()).city, "Florianópolis");
        assert_eq!(
            normalize(ProviderEnvelope::default(), &floripa()).city,
            "Florianópolis"
        );
    }

    #[test]
    fn test_normalize_ignores_provider_timestamp() {
        let envelope: ProviderEnvelope =
            serde_json::from_str(r#"{"name": "Recife", "dt": 0}"#).unwrap();
        let now = Utc::now();

        assert_eq!(normalize_at(envelope, &floripa(), now).date_time, now);
    }
}
