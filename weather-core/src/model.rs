use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FetchError;

/// A trimmed, non-empty city query. Validation happens here, before any I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery(String);

impl WeatherQuery {
    pub fn parse(raw: &str) -> Result<Self, FetchError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FetchError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WeatherQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The canonical current-conditions snapshot, produced regardless of which
/// source resolved it.
///
/// Temperatures are stored in Celsius and wind in kph; every other unit is
/// derived at presentation time. Serialized with camelCase names so a custom
/// backend can return this shape directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub location_name: String,
    pub lat: f64,
    pub lon: f64,
    pub temperature_c: f64,
    pub apparent_temperature_c: f64,
    /// Relative humidity percent, 0-100.
    pub humidity: f64,
    pub wind_kph: f64,
    /// Raw upstream weather code, preserved for traceability.
    pub condition_code: u16,
    pub condition_text: String,
    pub icon_id: String,
}

/// Canned pre-normalized record returned by the mock source, for offline
/// demos and tests.
pub fn sample_report() -> WeatherReport {
    WeatherReport {
        location_name: "London".to_string(),
        lat: 51.5074,
        lon: -0.1278,
        temperature_c: 18.3,
        apparent_temperature_c: 17.6,
        humidity: 64.0,
        wind_kph: 14.4,
        condition_code: 2,
        condition_text: "Partly cloudy".to_string(),
        icon_id: "⛅".to_string(),
    }
}
