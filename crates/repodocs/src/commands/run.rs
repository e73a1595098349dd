//! `repodocs run` command implementation.

use clap::Args;

use super::SourceArgs;
use super::generate::generate;
use super::sync_index::sync_index;
use crate::error::CliError;
use crate::output::Output;
use crate::pipeline::Pipeline;

/// Arguments for the run command.
#[derive(Args)]
pub(crate) struct RunArgs {
    #[command(flatten)]
    source: SourceArgs,
}

impl RunArgs {
    /// Synchronize the index, then generate every page.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let pipeline = Pipeline::new(self.source.load_config()?)?;

        output.highlight("Synchronizing index");
        sync_index(&pipeline, &output)?;

        output.highlight("Generating pages");
        generate(&pipeline, &output)
    }
}
