//! Documentation pages for mirrored repositories.
//!
//! - [`RepoIndex`]: parses repository links out of the Markdown index and
//!   keeps its documentation links in sync
//! - [`PageMaterializer`]: writes one `<slug>/index.md` page per repository,
//!   with placeholder content and a staleness notice where appropriate
//! - [`StalenessPolicy`]: decides when the staleness notice is appended
//!
//! # Example
//!
//! ```ignore
//! use repodocs_pages::{PageMaterializer, RepoIndex};
//!
//! let index = RepoIndex::new("github.com", "octo")?;
//! index.synchronize(Path::new("docs/repositories/index.md"))?;
//!
//! let names = index.read_repo_names(Path::new("docs/repositories/index.md"))?;
//! let summary = PageMaterializer::new(&client, "docs/repositories").materialize_all(&names);
//! ```

mod error;
mod index;
mod materializer;
mod slug;
mod staleness;
mod sync;

pub use error::{IndexError, PageError};
pub use index::RepoIndex;
pub use materializer::{DocumentationPage, PageMaterializer, PageSource, RunSummary};
pub use slug::{page_link, slug};
pub use staleness::{STALE_NOTICE, StalenessPolicy, parse_pushed_at};
pub use sync::{SyncOutcome, SyncReport};
