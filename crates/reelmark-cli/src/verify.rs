//! # Verify Subcommand
//!
//! Verify a content hash against the ledger.

use anyhow::Result;
use clap::Args;

use reelmark_core::ContentHash;
use reelmark_studio::Studio;

/// Arguments for the verify subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Content hash to verify: 64 hex characters.
    #[arg(long)]
    pub hash: String,
}

/// Verify the hash and print the result as JSON.
pub fn run(args: VerifyArgs, studio: &Studio) -> Result<()> {
    let hash = ContentHash::parse(&args.hash)?;
    let verification = studio.verify_video(&hash)?;
    println!("{}", serde_json::to_string_pretty(&verification)?);
    Ok(())
}
