//! GitHub resolution for repodocs.
//!
//! Resolves repository metadata and README content for a fixed owner, going
//! through a [`Cache`](repodocs_cache::Cache) before touching the network.
//!
//! - [`Transport`]: blocking HTTP GET seam ([`UreqTransport`] in production)
//! - [`HttpFetcher`]: cache-first fetch that never caches failures
//! - [`GitHubClient`]: metadata and README resolvers
//!
//! Failures are reported as [`FetchError`] so callers can tell "not found"
//! from "server error" from "network error" from "malformed response".
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use repodocs_cache::FileCache;
//! use repodocs_config::GitHubConfig;
//! use repodocs_github::{GitHubClient, HttpFetcher, UreqTransport};
//!
//! let config = GitHubConfig::default();
//! let fetcher = HttpFetcher::new(
//!     Arc::new(UreqTransport::new(config.timeout())),
//!     Arc::new(FileCache::new(".repodocs/cache".into())),
//! );
//! let client = GitHubClient::new(fetcher, &config);
//! let repo = client.fetch_repo_info("demo-repo")?;
//! let readme = client.fetch_readme(&repo.name, &repo.default_branch)?;
//! ```

mod client;
mod error;
mod fetcher;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod transport;
mod types;

pub use client::GitHubClient;
pub use error::FetchError;
pub use fetcher::HttpFetcher;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockTransport;
pub use transport::{DEFAULT_TIMEOUT, HttpResponse, Transport, UreqTransport};
pub use types::{RepoDescriptor, Visibility};
