//! CLI error types.

use repodocs_cache::CacheError;
use repodocs_config::ConfigError;
use repodocs_pages::IndexError;

/// CLI error type.
///
/// Only setup and index problems end up here; per-repository fetch and write
/// failures are reported as warnings and never fail the run.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Index(#[from] IndexError),

    #[error("{0}")]
    Cache(#[from] CacheError),
}
