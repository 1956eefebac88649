use async_trait::async_trait;
use std::time::Duration;

use super::WeatherSource;
use crate::error::FetchError;
use crate::model::{WeatherQuery, WeatherReport, sample_report};

/// Simulated network latency before the fixture resolves.
const MOCK_DELAY: Duration = Duration::from_millis(400);

/// Returns the canned fixture after a fixed delay, unconditionally ignoring
/// the query. Used for offline demos and tests.
#[derive(Debug, Clone)]
pub struct MockSource {
    delay: Duration,
}

impl Default for MockSource {
    fn default() -> Self {
        Self { delay: MOCK_DELAY }
    }
}

impl MockSource {
    /// Override the simulated latency (tests shorten it).
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl WeatherSource for MockSource {
    async fn fetch(&self, _query: &WeatherQuery) -> Result<WeatherReport, FetchError> {
        tokio::time::sleep(self.delay).await;
        Ok(sample_report())
    }
}
