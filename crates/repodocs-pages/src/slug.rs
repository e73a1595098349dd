//! Repository name to directory slug.

/// Filesystem-safe slug for a repository name.
///
/// Lowercases the name and replaces hyphens with underscores.
#[must_use]
pub fn slug(name: &str) -> String {
    name.to_lowercase().replace('-', "_")
}

/// Relative link from the index to the page of `name`.
#[must_use]
pub fn page_link(name: &str) -> String {
    format!("./{}/index.md", slug(name))
}
