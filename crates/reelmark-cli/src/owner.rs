//! # Owner Subcommand
//!
//! Resolve the current owner of a content hash.

use anyhow::Result;
use clap::Args;

use reelmark_core::ContentHash;
use reelmark_studio::Studio;

/// Arguments for the owner subcommand.
#[derive(Args, Debug)]
pub struct OwnerArgs {
    /// Content hash to look up: 64 hex characters.
    #[arg(long)]
    pub hash: String,
}

/// Print the owner address for the hash.
pub fn run(args: OwnerArgs, studio: &Studio) -> Result<()> {
    let hash = ContentHash::parse(&args.hash)?;
    let owner = studio.video_ownership(&hash)?;
    println!("{owner}");
    Ok(())
}
