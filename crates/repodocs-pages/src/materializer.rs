//! Per-repository documentation page generation.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDateTime, Utc};
use repodocs_github::{FetchError, GitHubClient};
use tracing::{info, warn};

use crate::error::PageError;
use crate::slug::slug;
use crate::staleness::{STALE_NOTICE, StalenessPolicy};

/// Placeholder body when metadata is unavailable or the repository is private.
const DOCS_UNAVAILABLE: &str = "Documentation not available.";

/// Placeholder body when the README cannot be fetched.
const README_UNAVAILABLE: &str = "README not available.";

/// Page filename inside each repository directory.
const PAGE_FILENAME: &str = "index.md";

/// Where a page body came from.
#[derive(Debug)]
pub enum PageSource {
    /// README fetched verbatim.
    Readme,
    /// Metadata resolved, README missing or empty.
    ReadmeUnavailable(Option<FetchError>),
    /// Metadata could not be resolved.
    MetadataUnavailable(FetchError),
    /// Repository is private.
    Private,
}

impl PageSource {
    /// Whether the body is placeholder text.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        !matches!(self, Self::Readme)
    }
}

/// A documentation page written to disk.
#[derive(Debug)]
pub struct DocumentationPage {
    /// Repository name.
    pub name: String,
    /// Directory slug under the output directory.
    pub slug: String,
    /// Written file path.
    pub path: PathBuf,
    /// Page content as written (trailing whitespace trimmed, one final newline).
    pub body: String,
    /// Whether the staleness notice was appended.
    pub stale: bool,
    /// Where the body came from.
    pub source: PageSource,
}

/// Counts from materializing a list of repositories.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Pages written.
    pub written: usize,
    /// Pages carrying the staleness notice.
    pub stale: usize,
    /// Pages with placeholder content.
    pub placeholders: usize,
    /// Repositories whose page could not be written.
    pub failed: Vec<(String, PageError)>,
}

/// Writes one `<output_dir>/<slug>/index.md` per repository.
///
/// Network and parse failures never abort: they degrade to placeholder
/// content. Only filesystem errors are returned.
pub struct PageMaterializer<'a> {
    client: &'a GitHubClient,
    output_dir: PathBuf,
    policy: StalenessPolicy,
    now: Option<NaiveDateTime>,
}

impl<'a> PageMaterializer<'a> {
    /// Create a materializer writing under `output_dir`.
    #[must_use]
    pub fn new(client: &'a GitHubClient, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            output_dir: output_dir.into(),
            policy: StalenessPolicy::default(),
            now: None,
        }
    }

    /// Set the staleness policy.
    #[must_use]
    pub fn staleness(mut self, policy: StalenessPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Pin the current time (UTC) used for staleness checks.
    #[must_use]
    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = Some(now);
        self
    }

    /// Output directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Resolve and write the page for `name`.
    pub fn create_page(&self, name: &str) -> Result<DocumentationPage, PageError> {
        let descriptor = self.client.fetch_repo_info(name);

        let now = self.now.unwrap_or_else(|| Utc::now().naive_utc());
        let stale = self.policy.is_stale(descriptor.as_ref().ok(), now);

        let (mut content, source) = match descriptor {
            Err(e) => {
                warn!("metadata for {name} unavailable: {e}");
                (
                    placeholder(name, DOCS_UNAVAILABLE),
                    PageSource::MetadataUnavailable(e),
                )
            }
            Ok(d) if d.is_private() => (placeholder(name, DOCS_UNAVAILABLE), PageSource::Private),
            Ok(d) => match self.client.fetch_readme(name, &d.default_branch) {
                Ok(readme) if !readme.is_empty() => (readme, PageSource::Readme),
                Ok(_) => (
                    placeholder(name, README_UNAVAILABLE),
                    PageSource::ReadmeUnavailable(None),
                ),
                Err(e) => {
                    warn!("README for {name}@{} unavailable: {e}", d.default_branch);
                    (
                        placeholder(name, README_UNAVAILABLE),
                        PageSource::ReadmeUnavailable(Some(e)),
                    )
                }
            },
        };

        if stale {
            content.push_str("\n\n");
            content.push_str(STALE_NOTICE);
        }

        let slug = slug(name);
        let dir = self.output_dir.join(&slug);
        fs::create_dir_all(&dir).map_err(|source| PageError::Io {
            path: dir.clone(),
            source,
        })?;

        let path = dir.join(PAGE_FILENAME);
        let body = format!("{}\n", content.trim_end());
        fs::write(&path, &body).map_err(|source| PageError::Io {
            path: path.clone(),
            source,
        })?;

        info!("wrote {} ({name})", path.display());
        Ok(DocumentationPage {
            name: name.to_owned(),
            slug,
            path,
            body,
            stale,
            source,
        })
    }

    /// Materialize every repository in `names`, in order.
    ///
    /// A failure for one repository is logged and recorded; the rest still run.
    pub fn materialize_all<S: AsRef<str>>(&self, names: &[S]) -> RunSummary {
        let mut summary = RunSummary::default();

        for name in names {
            let name = name.as_ref();
            match self.create_page(name) {
                Ok(page) => {
                    summary.written += 1;
                    if page.stale {
                        summary.stale += 1;
                    }
                    if page.source.is_placeholder() {
                        summary.placeholders += 1;
                    }
                }
                Err(e) => {
                    warn!("failed to write page for {name}: {e}");
                    summary.failed.push((name.to_owned(), e));
                }
            }
        }

        summary
    }
}

/// Placeholder page body under a level-1 heading of the repository name.
fn placeholder(name: &str, message: &str) -> String {
    format!("# {name}\n{message}")
}
