//! Error types for index and page handling.

use std::path::PathBuf;

/// Error reading, matching or rewriting the index file.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// Failed to read or write the index file.
    #[error("failed to access index {}: {source}", path.display())]
    Io {
        /// Index file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Link pattern could not be built for the configured host and owner.
    #[error("invalid index link pattern")]
    Pattern(#[from] regex::Error),
}

/// Error writing a documentation page.
///
/// Network and parse problems never surface here; they degrade to placeholder
/// content instead.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// Failed to create the page directory or write the page.
    #[error("failed to write page {}: {source}", path.display())]
    Io {
        /// Directory or file being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
