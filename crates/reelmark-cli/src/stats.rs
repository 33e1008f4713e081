//! # Stats Subcommand
//!
//! Show storage statistics.

use anyhow::Result;
use clap::Args;

use reelmark_studio::Studio;

/// Arguments for the stats subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {}

/// Print storage statistics as JSON.
pub fn run(_args: StatsArgs, studio: &Studio) -> Result<()> {
    let stats = studio.store().stats()?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
