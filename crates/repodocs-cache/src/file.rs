//! File-based cache implementation.
//!
//! [`FileCache`] stores each entry as a single file named by its key inside a
//! flat root directory. The file holds the response body verbatim, with no
//! header, so entries can be inspected with ordinary tools.
//!
//! Entries are never invalidated automatically. [`FileCache::clear`] is the
//! only way to drop them.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{Cache, CacheError};

/// File-based [`Cache`] rooted at a directory on disk.
///
/// Directory layout:
/// ```text
/// {root}/
/// +-- 3f2a...c1        # body of one fetched URL
/// +-- 9b07...e4        # body of another
/// ```
pub struct FileCache {
    root: PathBuf,
}

impl FileCache {
    /// Create a file-based cache at `root`, creating the directory if needed.
    ///
    /// Directory creation errors are logged but never fatal; writes retry the
    /// creation.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        if let Err(e) = fs::create_dir_all(&root) {
            tracing::warn!("failed to create cache directory {}: {e}", root.display());
        }
        Self { root }
    }

    /// Cache root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Remove every cached entry.
    ///
    /// Returns the number of entries removed. A missing root directory counts
    /// as an empty cache.
    pub fn clear(&self) -> Result<usize, CacheError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(source) => {
                return Err(CacheError::Clear {
                    path: self.root.clone(),
                    source,
                });
            }
        };

        let mut removed = 0;
        for entry in entries {
            let entry = entry.map_err(|source| CacheError::Clear {
                path: self.root.clone(),
                source,
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            fs::remove_file(&path).map_err(|source| CacheError::Clear {
                path: path.clone(),
                source,
            })?;
            removed += 1;
        }

        tracing::info!("cleared {removed} cache entries from {}", self.root.display());
        Ok(removed)
    }
}

impl Cache for FileCache {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        fs::read(self.root.join(key)).ok()
    }

    fn set(&self, key: &str, value: &[u8]) {
        if let Err(e) = fs::create_dir_all(&self.root) {
            tracing::warn!("failed to create cache directory {}: {e}", self.root.display());
            return;
        }
        let path = self.root.join(key);
        if let Err(e) = fs::write(&path, value) {
            tracing::warn!("failed to write cache entry {}: {e}", path.display());
        }
    }
}
