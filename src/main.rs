//! Tally CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{KeyArg, OutputFormat, RunOptions};

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Group synonymous names and total their frequencies", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the synonym graph and print each component's total frequency
    Run {
        /// TOML or JSON data set (defaults to the built-in sample)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// How each component picks the name it is reported under
        #[arg(short, long, value_enum, default_value_t = KeyArg::FirstVisited)]
        key: KeyArg,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Create names referenced only by synonyms with frequency 0 instead of failing
        #[arg(long)]
        create_missing: bool,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the result
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "tally={0},tally_core={0}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Tally v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Run {
            input,
            key,
            format,
            create_missing,
        } => commands::run(RunOptions {
            input,
            key,
            format,
            create_missing,
        }),
        Commands::Version => {
            println!("Tally v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
