use async_trait::async_trait;
use std::fmt::Debug;
use tracing::debug;

use crate::error::FetchError;
use crate::model::{WeatherQuery, WeatherReport};
use crate::settings::{Settings, USE_MOCK_WEATHER};

pub mod backend;
pub mod mock;
pub mod open_meteo;

pub use backend::BackendSource;
pub use mock::MockSource;
pub use open_meteo::OpenMeteoSource;

/// A strategy that resolves a validated query to a normalized report.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherReport, FetchError>;
}

/// Entry point used by the UI layer.
///
/// Validates the raw query, then dispatches to the source selected at
/// construction time: an explicit per-call mock override wins over the
/// `USE_MOCK_WEATHER` flag; a configured backend base wins over the default
/// Open-Meteo two-step. No retries happen here — retry is a user action at
/// the UI layer.
#[derive(Debug)]
pub struct WeatherClient {
    mock: MockSource,
    real: Box<dyn WeatherSource>,
    mock_by_default: bool,
}

impl WeatherClient {
    pub fn new(settings: &Settings) -> Self {
        let real: Box<dyn WeatherSource> = match &settings.backend_base {
            Some(base) => Box::new(BackendSource::new(base.clone())),
            None => Box::new(OpenMeteoSource::new()),
        };
        Self {
            mock: MockSource::default(),
            real,
            mock_by_default: settings.flag_bool(USE_MOCK_WEATHER, false),
        }
    }

    /// Build a client around an explicit source, bypassing settings-based
    /// selection. Used by tests and by callers that already know the
    /// strategy they want.
    pub fn with_source(source: Box<dyn WeatherSource>) -> Self {
        Self {
            mock: MockSource::default(),
            real: source,
            mock_by_default: false,
        }
    }

    /// Fetch current conditions for a free-text city query.
    ///
    /// `use_mock` overrides the resolved feature flag when given; `None`
    /// defers to it.
    pub async fn fetch(
        &self,
        raw_query: &str,
        use_mock: Option<bool>,
    ) -> Result<WeatherReport, FetchError> {
        let query = WeatherQuery::parse(raw_query)?;
        let mock = use_mock.unwrap_or(self.mock_by_default);
        debug!(query = %query, mock, "dispatching weather fetch");
        if mock {
            self.mock.fetch(&query).await
        } else {
            self.real.fetch(&query).await
        }
    }
}
