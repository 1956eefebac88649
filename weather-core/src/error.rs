use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the weather pipeline.
///
/// Every variant renders to a single user-facing message; none is retried
/// automatically. Recovery is user-initiated (retry or a fresh search).
#[derive(Debug, Error)]
pub enum FetchError {
    /// Empty or whitespace-only query, rejected before any I/O.
    #[error("Please enter a city name to search.")]
    EmptyQuery,

    /// Non-2xx response from geocoding, forecast, or the custom backend.
    #[error("{context} failed with status {status}: {body}")]
    Http {
        context: &'static str,
        status: StatusCode,
        body: String,
    },

    /// Geocoding succeeded but returned zero matches.
    #[error("No results found for that city. Try another query.")]
    NoMatch,

    /// A 2xx response whose body lacks required fields.
    #[error("Received invalid data: {0}")]
    InvalidData(&'static str),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl FetchError {
    pub(crate) fn http(context: &'static str, status: StatusCode, body: &str) -> Self {
        FetchError::Http {
            context,
            status,
            body: truncate_body(body),
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut cut = MAX;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
