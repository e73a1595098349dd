//! Cache key computation.

use sha2::{Digest, Sha256};

/// Compute the cache key for a URL.
///
/// The key is the lowercase hex SHA-256 of the URL string, so the same URL
/// always maps to the same 64-character key.
#[must_use]
pub fn cache_key(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hex::encode(hasher.finalize())
}
