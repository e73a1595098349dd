//! CLI command implementations.

mod cache;
mod generate;
mod run;
mod sync_index;

use std::path::PathBuf;

use clap::Args;
use repodocs_config::{CliSettings, Config};

pub(crate) use cache::CacheCommand;
pub(crate) use generate::GenerateArgs;
pub(crate) use run::RunArgs;
pub(crate) use sync_index::SyncIndexArgs;

use crate::error::CliError;

/// Options shared by every command that reads the index or talks to GitHub.
#[derive(Args, Debug, Default)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover repodocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// GitHub account whose repositories are mirrored (overrides config).
    #[arg(long, env = "REPODOCS_OWNER")]
    owner: Option<String>,

    /// Markdown index listing the repositories (overrides config).
    #[arg(short, long)]
    index_file: Option<PathBuf>,

    /// Directory receiving the generated pages (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// HTTP timeout in seconds (overrides config).
    #[arg(long)]
    timeout: Option<u64>,

    /// Disable the response cache.
    #[arg(long)]
    no_cache: bool,
}

impl SourceArgs {
    /// Load the configuration with these arguments layered on top.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            owner: self.owner.clone(),
            index_file: self.index_file.clone(),
            output_dir: self.output_dir.clone(),
            cache_enabled: self.no_cache.then_some(false),
            timeout_secs: self.timeout,
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}
