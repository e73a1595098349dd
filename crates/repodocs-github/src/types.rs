//! GitHub API types.

use serde::Deserialize;

/// Repository visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

/// Repository metadata needed to mirror its README.
///
/// Rebuilt from the (cached) API response on every run; never persisted as a
/// structured record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoDescriptor {
    /// Repository name as listed in the index.
    pub name: String,
    /// Branch the README is read from.
    pub default_branch: String,
    /// Public or private.
    pub visibility: Visibility,
    /// Last push timestamp (ISO-8601), if reported.
    pub pushed_at: Option<String>,
}

impl RepoDescriptor {
    /// Whether the repository is private.
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.visibility == Visibility::Private
    }
}

/// Subset of the `GET /repos/{owner}/{repo}` response.
#[derive(Debug, Deserialize)]
pub(crate) struct RepoResponse {
    #[serde(default = "default_branch")]
    default_branch: String,
    #[serde(default)]
    private: bool,
    #[serde(default)]
    pushed_at: Option<String>,
}

fn default_branch() -> String {
    "main".to_owned()
}

impl RepoResponse {
    /// Build a descriptor for the repository requested as `name`.
    pub(crate) fn into_descriptor(self, name: &str) -> RepoDescriptor {
        RepoDescriptor {
            name: name.to_owned(),
            default_branch: self.default_branch,
            visibility: if self.private {
                Visibility::Private
            } else {
                Visibility::Public
            },
            pushed_at: self.pushed_at,
        }
    }
}
