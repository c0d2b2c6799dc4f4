//! docsplit CLI
//!
//! Main entry point for the docsplit command-line tool.
//! Splits concatenated multi-document blobs into per-document files and
//! verifies completed splits.

mod commands;

use clap::{Parser, Subcommand};
use commands::{SplitCommand, VerifyCommand};
use docsplit_core::{config::AppConfig, logging};
use std::path::PathBuf;

/// docsplit - split concatenated multi-document blobs into valid documents
#[derive(Parser, Debug)]
#[command(name = "docsplit")]
#[command(about = "Split concatenated multi-document blobs into valid documents", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file (default: .docsplit.yaml)
    #[arg(short, long, global = true, env = "DOCSPLIT_CONFIG")]
    config: Option<PathBuf>,

    /// Declaration-line prefix that opens each embedded document
    #[arg(short, long, global = true, env = "DOCSPLIT_PREFIX")]
    prefix: Option<String>,

    /// Directory to place artifacts in (default: beside each source)
    #[arg(short, long, global = true, env = "DOCSPLIT_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split blobs into per-document artifacts
    Split(SplitCommand),

    /// Verify a completed split against its source blob
    Verify(VerifyCommand),
}

fn main() -> anyhow::Result<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration; an explicit --config wins over the
    // environment and the implicit .docsplit.yaml
    let config = AppConfig::load_with(cli.config)?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.prefix,
        cli.output_dir,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::debug!("Prefix: {:?}", config.prefix);
    tracing::debug!("Output dir: {:?}", config.output_dir);

    let command_name = match &cli.command {
        Commands::Split(_) => "split",
        Commands::Verify(_) => "verify",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    let result = match cli.command {
        Commands::Split(cmd) => cmd.execute(&config),
        Commands::Verify(cmd) => cmd.execute(&config),
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result?;
    Ok(())
}
