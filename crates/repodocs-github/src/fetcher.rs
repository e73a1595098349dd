//! Cache-first HTTP fetching.

use std::sync::Arc;

use repodocs_cache::{Cache, CacheExt, cache_key};
use tracing::debug;

use crate::error::FetchError;
use crate::transport::Transport;

/// Fetches URLs through a [`Cache`].
///
/// A cached body is returned without touching the network. Otherwise a single
/// GET is made; only a 200 response is cached. Every other outcome is returned
/// as a [`FetchError`] and leaves the cache untouched, so a later run retries.
pub struct HttpFetcher {
    transport: Arc<dyn Transport>,
    cache: Arc<dyn Cache>,
}

impl HttpFetcher {
    /// Create a fetcher over `transport` backed by `cache`.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, cache: Arc<dyn Cache>) -> Self {
        Self { transport, cache }
    }

    /// Return the body for `url`, from cache when present.
    pub fn get_or_fetch(&self, url: &str) -> Result<String, FetchError> {
        let key = cache_key(url);

        if let Some(body) = self.cache.get_string(&key) {
            debug!("cache hit for {url}");
            return Ok(body);
        }
        debug!("cache miss for {url}");

        let response = self.transport.get(url)?;
        match response.status {
            200 => {
                self.cache.set_string(&key, &response.body);
                Ok(response.body)
            }
            404 => Err(FetchError::NotFound {
                url: url.to_owned(),
            }),
            status => Err(FetchError::Status {
                url: url.to_owned(),
                status,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use repodocs_cache::{FileCache, NullCache};
    use tempfile::TempDir;

    use super::*;
    use crate::MockTransport;

    const URL: &str = "https://raw.githubusercontent.com/octo/demo/main/README.md";

    fn fetcher_with(transport: &Arc<MockTransport>, tmp: &TempDir) -> HttpFetcher {
        let transport: Arc<dyn Transport> = Arc::clone(transport) as Arc<dyn Transport>;
        HttpFetcher::new(transport, Arc::new(FileCache::new(tmp.path().join("cache"))))
    }

    #[test]
    fn test_second_fetch_is_served_from_cache() {
        let tmp = TempDir::new().unwrap();
        let transport = Arc::new(MockTransport::new().with_response(URL, 200, "# Demo\nHello"));
        let fetcher = fetcher_with(&transport, &tmp);

        assert_eq!(fetcher.get_or_fetch(URL).unwrap(), "# Demo\nHello");
        assert_eq!(fetcher.get_or_fetch(URL).unwrap(), "# Demo\nHello");
        assert_eq!(transport.request_count(URL), 1);
    }

    #[test]
    fn test_cache_survives_new_fetcher() {
        let tmp = TempDir::new().unwrap();
        let transport = Arc::new(MockTransport::new().with_response(URL, 200, "cached"));
        fetcher_with(&transport, &tmp).get_or_fetch(URL).unwrap();

        // A later run sees the cached body even if the server changed
        transport.set_response(URL, 200, "changed");
        let fetcher = fetcher_with(&transport, &tmp);
        assert_eq!(fetcher.get_or_fetch(URL).unwrap(), "cached");
        assert_eq!(transport.request_count(URL), 1);
    }

    #[test]
    fn test_not_found_is_not_cached() {
        let tmp = TempDir::new().unwrap();
        let transport = Arc::new(MockTransport::new());
        let fetcher = fetcher_with(&transport, &tmp);

        let err = fetcher.get_or_fetch(URL).unwrap_err();
        assert!(err.is_not_found());

        // Nothing written, so the next call goes to the network again
        transport.set_response(URL, 200, "now present");
        assert_eq!(fetcher.get_or_fetch(URL).unwrap(), "now present");
        assert_eq!(transport.request_count(URL), 2);
    }

    #[test]
    fn test_server_error_is_not_cached() {
        let tmp = TempDir::new().unwrap();
        let transport = Arc::new(MockTransport::new().with_response(URL, 503, "unavailable"));
        let fetcher = fetcher_with(&transport, &tmp);

        let err = fetcher.get_or_fetch(URL).unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 503, .. }));

        let key = cache_key(URL);
        assert!(!tmp.path().join("cache").join(key).exists());
    }

    #[test]
    fn test_transport_failure_is_not_cached() {
        let tmp = TempDir::new().unwrap();
        let transport = Arc::new(MockTransport::new().with_failure(URL, "timed out"));
        let fetcher = fetcher_with(&transport, &tmp);

        let err = fetcher.get_or_fetch(URL).unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
        assert!(err.to_string().contains("timed out"));

        fetcher.get_or_fetch(URL).unwrap_err();
        assert_eq!(transport.request_count(URL), 2);
    }

    #[test]
    fn test_null_cache_always_fetches() {
        let transport = Arc::new(MockTransport::new().with_response(URL, 200, "body"));
        let fetcher = HttpFetcher::new(
            Arc::clone(&transport) as Arc<dyn Transport>,
            Arc::new(NullCache),
        );

        fetcher.get_or_fetch(URL).unwrap();
        fetcher.get_or_fetch(URL).unwrap();
        assert_eq!(transport.request_count(URL), 2);
    }
}
