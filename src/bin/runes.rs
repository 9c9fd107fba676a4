//! runes: generate Foundry tests from Echidna reproducers
//!
//! ## Example Usage
//!
//! ```bash
//! # Newest batch of reproducers from an Echidna corpus
//! runes generate echidna/reproducers -o test/replays/
//!
//! # A single reproducer with the basic template
//! runes generate echidna/reproducers/123.txt -t basic --contract-name VaultReplay
//!
//! # Built-in templates
//! runes templates
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod runes_cli;

use runes_cli::{generate::GenerateCmd, templates::TemplatesCmd};

#[derive(Parser)]
#[command(
    name = "runes",
    author,
    version,
    about = "Generate Foundry tests from Echidna reproducers",
    long_about = "Converts the reproducer files Echidna writes for failing properties into a \
                  Foundry test contract that replays each call sequence."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (debug logging)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Foundry test file from reproducer files
    Generate(GenerateCmd),

    /// List the built-in templates
    Templates(TemplatesCmd),
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "debug"
    } else {
        "warn,runes=info,runes_core=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let Cli {
        command,
        json,
        verbose,
    } = Cli::parse();

    init_tracing(verbose);

    match command {
        Commands::Generate(cmd) => cmd.execute(json),
        Commands::Templates(cmd) => cmd.execute(json),
    }
}
