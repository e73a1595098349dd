//! Repository index parsing.
//!
//! The index is a human-maintained Markdown page that links every mirrored
//! repository as `[name](https://<host>/<owner>/name)`. Numbered entries of the
//! form `1. **[name](...)**` are additionally recognized by the link
//! synchronizer.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::IndexError;

/// Link patterns of an index for a single host and owner.
#[derive(Debug)]
pub struct RepoIndex {
    /// `[name](https://host/owner/...)` anywhere in the text.
    link: Regex,
    /// Numbered entry line with a bolded owner link.
    pub(crate) entry: Regex,
}

impl RepoIndex {
    /// Build the patterns for links to `https://{host}/{owner}/...`.
    pub fn new(host: &str, owner: &str) -> Result<Self, IndexError> {
        let target = format!(
            r"https://{}/{}/[^)]+",
            regex::escape(host),
            regex::escape(owner)
        );
        let link = Regex::new(&format!(r"\[([^\]]+)\]\({target}\)"))?;
        let entry = Regex::new(&format!(
            r"^(\s*\d+\.\s+\*\*\[([^\]]+)\]\({target}\)\*\*.*)"
        ))?;
        Ok(Self { link, entry })
    }

    /// Repository names linked in `text`, in file order.
    ///
    /// Duplicates are kept: a name linked twice is returned twice.
    pub fn repo_names(&self, text: &str) -> Vec<String> {
        self.link
            .captures_iter(text)
            .map(|caps| caps[1].to_owned())
            .collect()
    }

    /// Read the index at `path` and return its repository names.
    pub fn read_repo_names(&self, path: &Path) -> Result<Vec<String>, IndexError> {
        let text = read_index(path)?;
        Ok(self.repo_names(&text))
    }
}

/// Read the full index file.
pub(crate) fn read_index(path: &Path) -> Result<String, IndexError> {
    fs::read_to_string(path).map_err(|source| IndexError::Io {
        path: path.to_path_buf(),
        source,
    })
}
