//! repodocs CLI - mirror GitHub READMEs into documentation pages.
//!
//! Provides commands for:
//! - `generate`: Write one page per repository listed in the index
//! - `sync-index`: Insert missing documentation links into the index
//! - `run`: `sync-index` followed by `generate`
//! - `cache clear`: Delete cached GitHub responses

mod commands;
mod error;
mod output;
mod pipeline;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CacheCommand, GenerateArgs, RunArgs, SyncIndexArgs};
use output::Output;

/// repodocs - mirror GitHub READMEs into documentation pages.
#[derive(Parser)]
#[command(name = "repodocs", version, about)]
struct Cli {
    /// Enable verbose output (show INFO logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate documentation pages from repository READMEs.
    Generate(GenerateArgs),
    /// Insert missing documentation links into the index.
    SyncIndex(SyncIndexArgs),
    /// Synchronize the index, then generate pages.
    Run(RunArgs),
    /// Response cache commands.
    #[command(subcommand)]
    Cache(CacheCommand),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Generate(args) => args.execute(),
        Commands::SyncIndex(args) => args.execute(),
        Commands::Run(args) => args.execute(),
        Commands::Cache(cmd) => cmd.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
