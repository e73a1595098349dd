//! `repodocs cache` subcommand group.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use repodocs_cache::FileCache;
use repodocs_config::Config;

use crate::error::CliError;
use crate::output::Output;

/// Response cache commands.
#[derive(Subcommand)]
pub(crate) enum CacheCommand {
    /// Delete every cached response.
    Clear(ClearArgs),
}

impl CacheCommand {
    /// Execute the cache subcommand.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        match self {
            Self::Clear(args) => args.execute(),
        }
    }
}

/// Arguments for the cache clear command.
#[derive(Args)]
pub(crate) struct ClearArgs {
    /// Path to configuration file (default: auto-discover repodocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ClearArgs {
    fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;
        let cache = FileCache::new(config.cache_resolved.dir);

        let removed = cache.clear()?;
        output.success(&format!(
            "Removed {removed} cached response(s) from {}",
            cache.root().display()
        ));
        Ok(())
    }
}
