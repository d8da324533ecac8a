//! Breed API Client
//!
//! Outbound HTTP via `reqwest`, which uses the browser `fetch` API on wasm32.

mod breeds;

use std::time::Duration;

use crate::error::FetchError;

pub use breeds::*;

/// Status code and raw body of a finished request
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// GET `url` and read the whole body as text.
///
/// With `timeout_ms > 0` the request is abandoned once it elapses.
pub async fn get_text(
    url: &str,
    headers: &[(&str, &str)],
    timeout_ms: u32,
) -> Result<HttpReply, FetchError> {
    let client = reqwest::Client::new();
    let mut request = client.get(url).header(reqwest::header::ACCEPT, "application/json");
    for (name, value) in headers {
        request = request.header(*name, *value);
    }
    if timeout_ms > 0 {
        request = request.timeout(Duration::from_millis(u64::from(timeout_ms)));
    }

    let response = request.send().await.map_err(|err| with_timeout(err.into(), timeout_ms))?;
    let status = response.status().as_u16();
    let body = response.text().await.map_err(|err| with_timeout(err.into(), timeout_ms))?;

    Ok(HttpReply { status, body })
}

/// Fill in the configured limit on timeout errors
fn with_timeout(err: FetchError, timeout_ms: u32) -> FetchError {
    match err {
        FetchError::Timeout(_) => FetchError::Timeout(timeout_ms),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_carries_configured_limit() {
        assert_eq!(with_timeout(FetchError::Timeout(0), 5000), FetchError::Timeout(5000));
        assert_eq!(
            with_timeout(FetchError::Network("offline".to_string()), 5000),
            FetchError::Network("offline".to_string())
        );
    }
}
