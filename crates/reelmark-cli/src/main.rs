//! # reelmark CLI Entry Point
//!
//! Assembles subcommands, wires the studio from environment plus flags,
//! and dispatches to handler modules.

use std::path::PathBuf;

use clap::Parser;

use reelmark_studio::{Studio, StudioConfig};

/// Reelmark: AI video generation with ledger-backed provenance.
///
/// Generates content records, persists their metadata, and registers,
/// verifies, and transfers content hashes on the configured ledger
/// backend.
#[derive(Parser, Debug)]
#[command(name = "reelmark", version, about)]
struct Cli {
    /// Root directory for content and metadata storage.
    #[arg(long, global = true)]
    storage_root: Option<PathBuf>,

    /// Ledger network name.
    #[arg(long, global = true)]
    network: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Generate a content record and store its metadata.
    Generate(reelmark_cli::generate::GenerateArgs),
    /// Register a stored record's content hash on the ledger.
    Register(reelmark_cli::register::RegisterArgs),
    /// Verify a content hash against the ledger.
    Verify(reelmark_cli::verify::VerifyArgs),
    /// Resolve the current owner of a content hash.
    Owner(reelmark_cli::owner::OwnerArgs),
    /// Transfer ownership of a content hash.
    Transfer(reelmark_cli::transfer::TransferArgs),
    /// Show storage statistics.
    Stats(reelmark_cli::stats::StatsArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = StudioConfig::from_env()?;
    if let Some(storage_root) = cli.storage_root {
        config.storage_root = storage_root;
    }
    if let Some(network) = cli.network {
        config.ledger.network = network;
    }
    let studio = Studio::new(config);

    match cli.command {
        Commands::Generate(args) => reelmark_cli::generate::run(args, &studio),
        Commands::Register(args) => reelmark_cli::register::run(args, &studio),
        Commands::Verify(args) => reelmark_cli::verify::run(args, &studio),
        Commands::Owner(args) => reelmark_cli::owner::run(args, &studio),
        Commands::Transfer(args) => reelmark_cli::transfer::run(args, &studio),
        Commands::Stats(args) => reelmark_cli::stats::run(args, &studio),
    }
}
