//! Error types for GitHub resolution.

/// Why a URL could not be resolved to content.
///
/// None of these are fatal to a run: callers degrade to placeholder content.
/// Failed fetches are never cached, so the next run retries them.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Server answered 404.
    #[error("not found: {url}")]
    NotFound {
        /// Requested URL.
        url: String,
    },

    /// Server answered with a status other than 200 or 404.
    #[error("HTTP error {status} for {url}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// Request failed before a status was received (timeout, DNS, TLS, ...).
    #[error("request to {url} failed: {message}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Transport error description.
        message: String,
    },

    /// Response body is not the expected JSON.
    #[error("invalid JSON from {url}")]
    Parse {
        /// Requested URL.
        url: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Whether the resource is known not to exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
