//! The search lifecycle: idle → loading → success | error, with
//! user-initiated retry.

use crate::error::FetchError;
use crate::model::WeatherReport;
use crate::source::WeatherClient;

/// What the UI is showing. Exactly one variant is active at a time; a
/// success can never coexist with an error message.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Success(WeatherReport),
    Error(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

/// Identifies one accepted search. Results carrying a stale ticket are
/// dropped instead of overwriting a newer search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Drives the view lifecycle for one search box.
///
/// A search is only accepted when the trimmed input is non-empty and no
/// fetch is in flight, so overlapping fetches from the same session cannot
/// happen. Entering `Loading` clears the previous record or error.
#[derive(Debug, Default)]
pub struct SearchSession {
    state: ViewState,
    last_query: Option<String>,
    current: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    /// Accept a search and enter `Loading`, or reject it (blank input, or a
    /// fetch already in flight) leaving the state untouched.
    pub fn begin(&mut self, raw: &str) -> Option<Ticket> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || self.state.is_loading() {
            return None;
        }
        self.last_query = Some(trimmed.to_string());
        self.state = ViewState::Loading;
        self.current += 1;
        Some(Ticket(self.current))
    }

    /// Apply a fetch outcome, transitioning to exactly one of `Success` or
    /// `Error`.
    ///
    /// Returns `false` and leaves the state untouched when the result is
    /// stale — its ticket no longer matches the most recent `begin`. An
    /// applied `Error` is the UI's cue to move assistive focus to the error
    /// region.
    pub fn finish(&mut self, ticket: Ticket, result: Result<WeatherReport, FetchError>) -> bool {
        if ticket.0 != self.current || !self.state.is_loading() {
            return false;
        }
        self.state = match result {
            Ok(report) => ViewState::Success(report),
            Err(err) => ViewState::Error(err.to_string()),
        };
        true
    }

    /// Re-issue the last accepted query. No-op when there is none or a fetch
    /// is in flight.
    pub fn retry(&mut self) -> Option<(Ticket, String)> {
        let query = self.last_query.clone()?;
        let ticket = self.begin(&query)?;
        Some((ticket, query))
    }

    /// Run a full search against the client: begin → fetch → finish.
    /// Returns whether the search was accepted.
    pub async fn search(
        &mut self,
        client: &WeatherClient,
        raw: &str,
        use_mock: Option<bool>,
    ) -> bool {
        let Some(ticket) = self.begin(raw) else {
            return false;
        };
        let result = client.fetch(raw, use_mock).await;
        self.finish(ticket, result);
        true
    }

    /// Replay the last query through the client. Returns whether a retry was
    /// issued.
    pub async fn retry_with(&mut self, client: &WeatherClient, use_mock: Option<bool>) -> bool {
        let Some(query) = self.last_query.clone() else {
            return false;
        };
        self.search(client, &query, use_mock).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{WeatherQuery, sample_report};
    use crate::source::{MockSource, WeatherSource};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Stub that records every query it sees and fails with `NoMatch`.
    #[derive(Debug, Clone, Default)]
    struct NoMatchSource {
        seen: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl WeatherSource for NoMatchSource {
        async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherReport, FetchError> {
            self.seen.lock().unwrap().push(query.as_str().to_string());
            Err(FetchError::NoMatch)
        }
    }

    fn mock_client() -> WeatherClient {
        WeatherClient::with_source(Box::new(MockSource::with_delay(Duration::from_millis(1))))
    }

    #[test]
    fn starts_idle_with_no_query() {
        let session = SearchSession::new();
        assert_eq!(*session.state(), ViewState::Idle);
        assert_eq!(session.last_query(), None);
    }

    #[test]
    fn blank_input_is_rejected_without_leaving_idle() {
        let mut session = SearchSession::new();
        assert!(session.begin("   ").is_none());
        assert_eq!(*session.state(), ViewState::Idle);
        assert_eq!(session.last_query(), None);
    }

    #[test]
    fn a_second_begin_while_loading_is_rejected() {
        let mut session = SearchSession::new();
        let first = session.begin("London");
        assert!(first.is_some());
        assert!(session.state().is_loading());

        assert!(session.begin("Paris").is_none());
        // the in-flight query is untouched
        assert_eq!(session.last_query(), Some("London"));
    }

    #[test]
    fn entering_loading_clears_the_previous_outcome() {
        let mut session = SearchSession::new();
        let t = session.begin("London").expect("accepted");
        assert!(session.finish(t, Err(FetchError::NoMatch)));
        assert!(matches!(session.state(), ViewState::Error(_)));

        session.begin("Paris").expect("accepted");
        assert_eq!(*session.state(), ViewState::Loading);
    }

    #[test]
    fn stale_tickets_are_discarded() {
        let mut session = SearchSession::new();
        let stale = session.begin("London").expect("accepted");
        assert!(session.finish(stale, Err(FetchError::NoMatch)));

        let fresh = session.begin("Paris").expect("accepted");
        // a late completion from the London fetch must not win
        assert!(!session.finish(stale, Ok(sample_report())));
        assert_eq!(*session.state(), ViewState::Loading);

        assert!(session.finish(fresh, Ok(sample_report())));
        assert!(matches!(session.state(), ViewState::Success(_)));
    }

    #[test]
    fn retry_without_a_prior_query_is_a_noop() {
        let mut session = SearchSession::new();
        assert!(session.retry().is_none());
        assert_eq!(*session.state(), ViewState::Idle);
    }

    #[tokio::test]
    async fn mock_search_transitions_idle_loading_success() {
        let client = mock_client();
        let mut session = SearchSession::new();
        assert_eq!(*session.state(), ViewState::Idle);

        assert!(session.search(&client, "London", Some(true)).await);
        assert_eq!(*session.state(), ViewState::Success(sample_report()));
        assert_eq!(session.last_query(), Some("London"));
    }

    #[tokio::test]
    async fn search_while_loading_does_not_trigger_a_second_fetch() {
        let client = mock_client();
        let mut session = SearchSession::new();
        session.begin("London").expect("accepted");

        assert!(!session.search(&client, "Paris", Some(true)).await);
        assert_eq!(*session.state(), ViewState::Loading);
    }

    #[tokio::test]
    async fn failed_search_then_retry_replays_the_identical_query() {
        let source = NoMatchSource::default();
        let client = WeatherClient::with_source(Box::new(source.clone()));
        let mut session = SearchSession::new();

        assert!(session.search(&client, "Zzzzz", None).await);
        match session.state() {
            ViewState::Error(message) => assert!(message.contains("No results found")),
            other => panic!("expected error state, got {other:?}"),
        }

        assert!(session.retry_with(&client, None).await);
        assert!(matches!(session.state(), ViewState::Error(_)));
        assert_eq!(session.last_query(), Some("Zzzzz"));
        assert_eq!(*source.seen.lock().unwrap(), vec!["Zzzzz", "Zzzzz"]);
    }
}
