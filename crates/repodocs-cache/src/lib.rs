//! Response cache for repodocs.
//!
//! Fetched URLs are stored under a content-addressed key (the hex SHA-256 of
//! the URL) so repeated runs never hit the network for a URL that was already
//! fetched successfully. Entries never expire.
//!
//! - [`Cache`]: Key-value store for raw response bodies
//! - [`CacheExt`]: UTF-8 string convenience methods
//! - [`cache_key`]: URL to key mapping
//!
//! # Implementations
//!
//! - [`NullCache`]: No-op implementation (always misses)
//! - [`FileCache`]: Flat directory of key-named files
//!
//! # Example
//!
//! ```
//! use repodocs_cache::{Cache, NullCache, cache_key};
//!
//! let cache = NullCache;
//! let key = cache_key("https://api.github.com/repos/octo/demo");
//! cache.set(&key, b"{}");
//! assert_eq!(cache.get(&key), None); // NullCache always misses
//! ```

mod error;
mod ext;
mod file;
mod key;

pub use error::CacheError;
pub use ext::CacheExt;
pub use file::FileCache;
pub use key::cache_key;

/// Persistent store for fetched response bodies.
///
/// Presence of an entry is definitive: there is no TTL and no revalidation.
/// Writes silently overwrite any previous entry for the same key.
pub trait Cache: Send + Sync {
    /// Retrieve the cached body for `key`, or `None` on miss.
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Store `value` under `key`.
    ///
    /// Failures are logged and swallowed; a failed write only costs a
    /// refetch on the next run.
    fn set(&self, key: &str, value: &[u8]);
}

/// No-op [`Cache`] that never stores or retrieves data.
///
/// Use when caching is disabled.
pub struct NullCache;

impl Cache for NullCache {
    fn get(&self, _key: &str) -> Option<Vec<u8>> {
        None
    }

    fn set(&self, _key: &str, _value: &[u8]) {}
}
