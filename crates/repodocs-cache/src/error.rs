//! Cache error types.

use std::path::PathBuf;

/// Error from explicit cache maintenance operations.
///
/// Lookups and writes never fail loudly; only [`FileCache::clear`](crate::FileCache::clear)
/// reports errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Failed to list or remove cache entries.
    #[error("failed to clear cache at {}: {source}", path.display())]
    Clear {
        /// Path that could not be read or removed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
