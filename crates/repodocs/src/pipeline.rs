//! Fetch, cache and materialize pipeline shared by the commands.

use std::sync::Arc;

use repodocs_cache::{Cache, FileCache, NullCache};
use repodocs_config::Config;
use repodocs_github::{GitHubClient, HttpFetcher, Transport, UreqTransport};
use repodocs_pages::{PageMaterializer, RepoIndex, RunSummary, StalenessPolicy, SyncReport};

use crate::error::CliError;

/// Everything one run needs, constructed once from the loaded config.
///
/// The cache lives here and is handed down to the resolvers; nothing else
/// opens it.
pub(crate) struct Pipeline {
    config: Config,
    client: GitHubClient,
    index: RepoIndex,
}

impl Pipeline {
    /// Build the pipeline with the production HTTP transport.
    pub(crate) fn new(config: Config) -> Result<Self, CliError> {
        let transport = Arc::new(UreqTransport::new(config.github.timeout()));
        Self::with_transport(config, transport)
    }

    /// Build the pipeline over an explicit transport.
    pub(crate) fn with_transport(
        config: Config,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, CliError> {
        let cache: Arc<dyn Cache> = if config.cache_resolved.enabled {
            Arc::new(FileCache::new(config.cache_resolved.dir.clone()))
        } else {
            tracing::info!("response cache disabled");
            Arc::new(NullCache)
        };

        let client = GitHubClient::new(HttpFetcher::new(transport, cache), &config.github);
        let index = RepoIndex::new(&config.github.host, &config.github.owner)?;

        Ok(Self {
            config,
            client,
            index,
        })
    }

    /// Loaded configuration.
    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    /// Insert missing documentation links into the index file.
    pub(crate) fn sync_index(&self) -> Result<SyncReport, CliError> {
        Ok(self
            .index
            .synchronize(&self.config.docs_resolved.index_file)?)
    }

    /// Write one page per repository listed in the index, in index order.
    pub(crate) fn generate(&self) -> Result<(Vec<String>, RunSummary), CliError> {
        let names = self
            .index
            .read_repo_names(&self.config.docs_resolved.index_file)?;

        let summary = PageMaterializer::new(&self.client, &self.config.docs_resolved.output_dir)
            .staleness(StalenessPolicy::from(&self.config.staleness))
            .materialize_all(&names);

        Ok((names, summary))
    }
}
