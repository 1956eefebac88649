use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::WeatherSource;
use crate::error::FetchError;
use crate::model::{WeatherQuery, WeatherReport};
use crate::{codes, units};

const GEOCODING_BASE: &str = "https://geocoding-api.open-meteo.com";
const FORECAST_BASE: &str = "https://api.open-meteo.com";

/// Current-conditions fields requested from the forecast service.
const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,apparent_temperature,weather_code,wind_speed_10m";

/// Two-step resolver against the public Open-Meteo services: geocode the
/// city name to coordinates, then fetch current conditions for them.
#[derive(Debug, Clone)]
pub struct OpenMeteoSource {
    geocoding_base: String,
    forecast_base: String,
    http: Client,
}

impl Default for OpenMeteoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenMeteoSource {
    pub fn new() -> Self {
        Self::with_bases(GEOCODING_BASE, FORECAST_BASE)
    }

    /// Point both services at custom bases; tests use this to target a mock
    /// server.
    pub fn with_bases(geocoding_base: impl Into<String>, forecast_base: impl Into<String>) -> Self {
        Self {
            geocoding_base: geocoding_base.into(),
            forecast_base: forecast_base.into(),
            http: Client::new(),
        }
    }

    async fn geocode(&self, query: &WeatherQuery) -> Result<GeoResult, FetchError> {
        let url = format!("{}/v1/search", self.geocoding_base);
        let res = self
            .http
            .get(&url)
            .query(&[
                ("name", query.as_str()),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(FetchError::http("Geocoding request", status, &body));
        }

        let parsed: GeoResponse = serde_json::from_str(&body)
            .map_err(|_| FetchError::InvalidData("geocoding response was not valid JSON"))?;

        // zero matches is a user-facing condition, not an HTTP failure
        parsed.results.into_iter().next().ok_or(FetchError::NoMatch)
    }

    async fn current_conditions(&self, lat: f64, lon: f64) -> Result<CurrentConditions, FetchError> {
        let url = format!("{}/v1/forecast", self.forecast_base);
        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(FetchError::http("Forecast request", status, &body));
        }

        let parsed: ForecastResponse = serde_json::from_str(&body)
            .map_err(|_| FetchError::InvalidData("forecast response was not valid JSON"))?;
        parsed
            .current
            .ok_or(FetchError::InvalidData("forecast response missing current conditions"))
    }
}

#[derive(Debug, Deserialize)]
struct GeoResult {
    name: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    #[serde(default)]
    results: Vec<GeoResult>,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    apparent_temperature: f64,
    weather_code: u16,
    /// Reported in m/s; normalized to kph at ingestion.
    wind_speed_10m: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<CurrentConditions>,
}

#[async_trait]
impl WeatherSource for OpenMeteoSource {
    async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherReport, FetchError> {
        let place = self.geocode(query).await?;
        debug!(name = %place.name, lat = place.latitude, lon = place.longitude, "geocoded query");

        let current = self.current_conditions(place.latitude, place.longitude).await?;
        let condition = codes::describe(current.weather_code);

        Ok(WeatherReport {
            location_name: place.name,
            lat: place.latitude,
            lon: place.longitude,
            temperature_c: current.temperature_2m,
            apparent_temperature_c: current.apparent_temperature,
            humidity: current.relative_humidity_2m,
            wind_kph: units::ms_to_kph(current.wind_speed_10m),
            condition_code: current.weather_code,
            condition_text: condition.text.to_string(),
            icon_id: condition.icon.to_string(),
        })
    }
}
