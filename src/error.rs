//! Fetch Errors
//!
//! Every way a breed list request can fail. All variants share one
//! user-facing message; the detail only goes to the log.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The browser rejected the request (offline, CORS, no window)
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {0} ms")]
    Timeout(u32),

    #[error("HTTP error! Status: {0}")]
    Status(u16),

    #[error("invalid JSON: {0}")]
    Parse(String),

    /// JSON parsed but is not the agreed envelope
    #[error("invalid data format from API: {0}")]
    Shape(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

/// The configured limit is filled in by the caller
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(0)
        } else {
            FetchError::Network(err.to_string())
        }
    }
}
