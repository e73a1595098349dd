//! Documentation link synchronization for the index.
//!
//! Every numbered repository entry in the index must be followed by a
//! documentation link to its generated page:
//!
//! ```text
//! 1. **[demo-repo](https://github.com/owner/demo-repo)** - description
//!         1. [documentation](./demo_repo/index.md)
//! ```
//!
//! The inserted line reuses the entry's own numeral, not a sub-numbering.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::IndexError;
use crate::index::{RepoIndex, read_index};
use crate::slug::page_link;

/// Prefix of accidentally pasted shell prompt lines.
const SHELL_PROMPT_PREFIX: &str = "root@";

/// Indentation of inserted documentation lines.
const DOC_LINK_INDENT: &str = "        ";

/// Result of synchronizing index text.
#[derive(Debug, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Rewritten index text, newline-terminated.
    pub text: String,
    /// Report of what changed.
    pub report: SyncReport,
}

/// What a synchronization pass changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    /// Documentation link lines inserted.
    pub links_inserted: usize,
    /// Shell prompt lines removed.
    pub prompt_lines_dropped: usize,
}

impl SyncReport {
    /// Whether the pass changed anything.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.links_inserted == 0 && self.prompt_lines_dropped == 0
    }
}

impl RepoIndex {
    /// Insert missing documentation links and drop shell prompt lines.
    ///
    /// Running this on its own output inserts nothing.
    pub fn sync_text(&self, text: &str) -> SyncOutcome {
        let lines: Vec<&str> = text.lines().collect();
        let mut out: Vec<String> = Vec::with_capacity(lines.len());
        let mut report = SyncReport::default();

        for (i, line) in lines.iter().enumerate() {
            if let Some(caps) = self.entry.captures(line) {
                out.push((*line).to_owned());

                let link = page_link(&caps[2]);
                let next_line = lines.get(i + 1).copied().unwrap_or("");
                if !next_line.contains(&link) {
                    let numeral = line.trim().split('.').next().unwrap_or_default();
                    out.push(format!(
                        "{DOC_LINK_INDENT}{numeral}. [documentation]({link})"
                    ));
                    report.links_inserted += 1;
                }
            } else if line.starts_with(SHELL_PROMPT_PREFIX) {
                report.prompt_lines_dropped += 1;
            } else {
                out.push((*line).to_owned());
            }
        }

        let mut text = out.join("\n");
        text.push('\n');
        SyncOutcome { text, report }
    }

    /// Synchronize the index file at `path` in place.
    ///
    /// The whole file is rewritten from the reconstructed lines.
    pub fn synchronize(&self, path: &Path) -> Result<SyncReport, IndexError> {
        let text = read_index(path)?;
        let outcome = self.sync_text(&text);

        fs::write(path, &outcome.text).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            "synchronized {}: {} links inserted, {} prompt lines dropped",
            path.display(),
            outcome.report.links_inserted,
            outcome.report.prompt_lines_dropped
        );
        Ok(outcome.report)
    }
}
