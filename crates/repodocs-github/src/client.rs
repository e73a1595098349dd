//! Repository metadata and README resolution.

use repodocs_config::GitHubConfig;
use tracing::debug;

use crate::error::FetchError;
use crate::fetcher::HttpFetcher;
use crate::types::{RepoDescriptor, RepoResponse};

/// Resolves repositories of a single owner through an [`HttpFetcher`].
pub struct GitHubClient {
    fetcher: HttpFetcher,
    owner: String,
    api_url: String,
    raw_url: String,
}

impl GitHubClient {
    /// Create a client for the owner and endpoints in `config`.
    #[must_use]
    pub fn new(fetcher: HttpFetcher, config: &GitHubConfig) -> Self {
        Self {
            fetcher,
            owner: config.owner.clone(),
            api_url: config.api_url.trim_end_matches('/').to_owned(),
            raw_url: config.raw_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Owner namespace of every repository this client resolves.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Metadata endpoint for `repo`.
    #[must_use]
    pub fn repo_info_url(&self, repo: &str) -> String {
        format!("{}/repos/{}/{}", self.api_url, self.owner, repo)
    }

    /// Raw README URL for `repo` at `branch`.
    #[must_use]
    pub fn readme_url(&self, repo: &str, branch: &str) -> String {
        format!("{}/{}/{}/{}/README.md", self.raw_url, self.owner, repo, branch)
    }

    /// Fetch the metadata descriptor for `repo`.
    pub fn fetch_repo_info(&self, repo: &str) -> Result<RepoDescriptor, FetchError> {
        let url = self.repo_info_url(repo);
        let body = self.fetcher.get_or_fetch(&url)?;
        let response: RepoResponse =
            serde_json::from_str(&body).map_err(|source| FetchError::Parse { url, source })?;
        let descriptor = response.into_descriptor(repo);
        debug!(
            "resolved {repo}: branch={} private={}",
            descriptor.default_branch,
            descriptor.is_private()
        );
        Ok(descriptor)
    }

    /// Fetch the README of `repo` at `branch`.
    ///
    /// Only the named branch is tried.
    pub fn fetch_readme(&self, repo: &str, branch: &str) -> Result<String, FetchError> {
        self.fetcher.get_or_fetch(&self.readme_url(repo, branch))
    }
}
