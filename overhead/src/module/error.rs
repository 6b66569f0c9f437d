///! Error taxonomy shared by the public-API clients.

use thiserror::Error;

/// Failure of a single API call, tagged with what was being fetched
/// (`what` is used verbatim in the message, e.g. "coordinates for IP").
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure: DNS, refused connection, timeout.
    #[error("request for {what} failed: {source}")]
    Transport {
        what: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status code.
    #[error("status code {status} when fetching {what}; response: {body}")]
    BadStatus {
        what: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The service answered successfully but the payload did not parse.
    #[error("malformed {what} payload: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// What the failed call was trying to fetch.
    pub fn what(&self) -> &'static str {
        match self {
            FetchError::Transport { what, .. } => what,
            FetchError::BadStatus { what, .. } => what,
            FetchError::Parse { what, .. } => what,
        }
    }
}
