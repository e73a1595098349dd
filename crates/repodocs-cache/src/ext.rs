//! Extension trait for [`Cache`] with string convenience methods.

use crate::Cache;

/// UTF-8 convenience methods for [`Cache`].
///
/// Implemented for every [`Cache`] through a blanket impl so that
/// implementors only need to handle raw bytes.
pub trait CacheExt: Cache {
    /// Retrieve a cached UTF-8 string.
    ///
    /// Returns `None` on cache miss or invalid UTF-8.
    fn get_string(&self, key: &str) -> Option<String> {
        let bytes = self.get(key)?;
        String::from_utf8(bytes).ok()
    }

    /// Store a string value in the cache.
    fn set_string(&self, key: &str, value: &str) {
        self.set(key, value.as_bytes());
    }
}

impl<C: Cache + ?Sized> CacheExt for C {}
