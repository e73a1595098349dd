//! Mock transport implementation for testing.
//!
//! Provides [`MockTransport`] for exercising the fetch pipeline without
//! network access.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::FetchError;
use crate::transport::{HttpResponse, Transport};

/// Canned outcome for one URL.
#[derive(Debug, Clone)]
enum MockResponse {
    Response(HttpResponse),
    Failure(String),
}

/// Mock transport for testing.
///
/// Serves canned responses keyed by exact URL and records how many times
/// each URL was requested. Unknown URLs answer 404.
///
/// # Example
///
/// ```ignore
/// use repodocs_github::{MockTransport, Transport};
///
/// let transport = MockTransport::new()
///     .with_response("https://example.com/a", 200, "hello")
///     .with_failure("https://example.com/b", "connection refused");
///
/// assert_eq!(transport.get("https://example.com/a").unwrap().body, "hello");
/// assert_eq!(transport.request_count("https://example.com/a"), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: RwLock<HashMap<String, MockResponse>>,
    requests: RwLock<HashMap<String, usize>>,
}

impl MockTransport {
    /// Create a new mock with no canned responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with `status` and `body`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_response(self, url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        self.responses.write().unwrap().insert(
            url.into(),
            MockResponse::Response(HttpResponse {
                status,
                body: body.into(),
            }),
        );
        self
    }

    /// Fail requests to `url` with a transport error.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failure(self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(url.into(), MockResponse::Failure(message.into()));
        self
    }

    /// Replace the canned outcome for `url` after construction.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn set_response(&self, url: impl Into<String>, status: u16, body: impl Into<String>) {
        self.responses.write().unwrap().insert(
            url.into(),
            MockResponse::Response(HttpResponse {
                status,
                body: body.into(),
            }),
        );
    }

    /// Number of requests made for `url`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn request_count(&self, url: &str) -> usize {
        self.requests.read().unwrap().get(url).copied().unwrap_or(0)
    }

    /// Number of requests made for all URLs.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn total_requests(&self) -> usize {
        self.requests.read().unwrap().values().sum()
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        *self
            .requests
            .write()
            .unwrap()
            .entry(url.to_owned())
            .or_insert(0) += 1;

        match self.responses.read().unwrap().get(url) {
            Some(MockResponse::Response(response)) => Ok(response.clone()),
            Some(MockResponse::Failure(message)) => Err(FetchError::Transport {
                url: url.to_owned(),
                message: message.clone(),
            }),
            None => Ok(HttpResponse {
                status: 404,
                body: "404: Not Found".to_owned(),
            }),
        }
    }
}
