//! `repodocs sync-index` command implementation.

use clap::Args;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;
use crate::pipeline::Pipeline;

/// Arguments for the sync-index command.
#[derive(Args)]
pub(crate) struct SyncIndexArgs {
    #[command(flatten)]
    source: SourceArgs,
}

impl SyncIndexArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let pipeline = Pipeline::new(self.source.load_config()?)?;

        sync_index(&pipeline, &output)
    }
}

/// Synchronize the index and print what changed.
pub(super) fn sync_index(pipeline: &Pipeline, output: &Output) -> Result<(), CliError> {
    let report = pipeline.sync_index()?;
    let index_file = &pipeline.config().docs_resolved.index_file;

    if report.is_noop() {
        output.info(&format!("{} is up to date", index_file.display()));
        return Ok(());
    }

    output.success(&format!("Updated {}", index_file.display()));
    output.item("links inserted", &report.links_inserted.to_string());
    if report.prompt_lines_dropped > 0 {
        output.item(
            "prompt lines dropped",
            &report.prompt_lines_dropped.to_string(),
        );
    }
    Ok(())
}
