//! HTTP transport abstraction.
//!
//! [`Transport`] is the single network seam of the pipeline. Production code
//! uses [`UreqTransport`]; tests use `MockTransport` (feature `mock`).

use std::time::Duration;

use ureq::Agent;

use crate::error::FetchError;

/// Default HTTP timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// User agent sent with every request (GitHub rejects anonymous clients without one).
const USER_AGENT: &str = concat!("repodocs/", env!("CARGO_PKG_VERSION"));

/// Status and body of a completed HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body decoded as UTF-8.
    pub body: String,
}

/// Blocking HTTP GET.
///
/// Implementations return `Ok` for every response that carries a status,
/// including 4xx/5xx, and [`FetchError::Transport`] when no status was
/// received.
pub trait Transport: Send + Sync {
    /// Perform a single GET request.
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

/// [`Transport`] backed by a [`ureq::Agent`].
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    /// Create a transport whose requests time out after `timeout`.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let transport_error = |e: ureq::Error| FetchError::Transport {
            url: url.to_owned(),
            message: e.to_string(),
        };

        let response = self
            .agent
            .get(url)
            .header("User-Agent", USER_AGENT)
            .call()
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response
            .into_body()
            .read_to_string()
            .map_err(transport_error)?;

        Ok(HttpResponse { status, body })
    }
}
