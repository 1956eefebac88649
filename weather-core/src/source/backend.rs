use async_trait::async_trait;
use reqwest::Client;

use super::WeatherSource;
use crate::error::FetchError;
use crate::model::{WeatherQuery, WeatherReport};

/// Passthrough to a custom backend that returns an already-normalized report
/// from `GET {base}/weather?query=<q>`, bypassing the geocode/forecast
/// two-step entirely.
#[derive(Debug, Clone)]
pub struct BackendSource {
    base: String,
    http: Client,
}

impl BackendSource {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherSource for BackendSource {
    async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherReport, FetchError> {
        let url = format!("{}/weather", self.base);
        let res = self
            .http
            .get(&url)
            .query(&[("query", query.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(FetchError::http("Backend request", status, &body));
        }

        let report: WeatherReport = serde_json::from_str(&body)
            .map_err(|_| FetchError::InvalidData("backend response was not a weather report"))?;
        if report.location_name.is_empty() {
            return Err(FetchError::InvalidData("backend response missing locationName"));
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_report;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn passes_the_normalized_body_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("query", "London"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_report()))
            .mount(&server)
            .await;

        let source = BackendSource::new(format!("{}/", server.uri()));
        let query = WeatherQuery::parse("London").expect("non-empty");
        let report = source.fetch(&query).await.expect("backend report");
        assert_eq!(report, sample_report());
    }

    #[tokio::test]
    async fn non_2xx_surfaces_as_http_error_with_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;

        let source = BackendSource::new(server.uri());
        let query = WeatherQuery::parse("London").expect("non-empty");
        let err = source.fetch(&query).await.unwrap_err();
        assert!(matches!(err, FetchError::Http { status, .. } if status.as_u16() == 503));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn body_without_location_name_is_invalid_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"temperatureC": 20.0})),
            )
            .mount(&server)
            .await;

        let source = BackendSource::new(server.uri());
        let query = WeatherQuery::parse("London").expect("non-empty");
        let err = source.fetch(&query).await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidData(_)));
    }
}
