//! `repodocs generate` command implementation.

use clap::Args;
use repodocs_pages::RunSummary;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;
use crate::pipeline::Pipeline;

/// Arguments for the generate command.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    #[command(flatten)]
    source: SourceArgs,
}

impl GenerateArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let pipeline = Pipeline::new(self.source.load_config()?)?;

        generate(&pipeline, &output)
    }
}

/// Write all pages and print a summary.
pub(super) fn generate(pipeline: &Pipeline, output: &Output) -> Result<(), CliError> {
    let config = pipeline.config();
    output.info(&format!(
        "Index: {}",
        config.docs_resolved.index_file.display()
    ));
    output.info(&format!(
        "Output: {}",
        config.docs_resolved.output_dir.display()
    ));

    let (names, summary) = pipeline.generate()?;
    if names.is_empty() {
        output.warning(&format!(
            "No repositories of {} found in the index",
            config.github.owner
        ));
        return Ok(());
    }

    report(&summary, output);
    Ok(())
}

fn report(summary: &RunSummary, output: &Output) {
    for (name, err) in &summary.failed {
        output.warning(&format!("Skipped {name}: {err}"));
    }

    output.success(&format!("Generated {} page(s)", summary.written));
    if summary.placeholders > 0 {
        output.item("placeholders", &summary.placeholders.to_string());
    }
    if summary.stale > 0 {
        output.item("stale", &summary.stale.to_string());
    }
}
