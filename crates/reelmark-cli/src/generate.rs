//! # Generate Subcommand
//!
//! Generate a content record and store its metadata.

use anyhow::Result;
use clap::Args;

use reelmark_gen::{
    GenerationRequest, DEFAULT_DURATION_SECS, DEFAULT_FPS, DEFAULT_RESOLUTION, DEFAULT_STYLE,
};
use reelmark_studio::Studio;

use crate::meta::parse_key_values;

/// Arguments for the generate subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Text description of the video to generate.
    #[arg(long)]
    pub prompt: String,

    /// Duration in seconds.
    #[arg(long, default_value_t = DEFAULT_DURATION_SECS)]
    pub duration: u32,

    /// Visual style preset.
    #[arg(long, default_value = DEFAULT_STYLE)]
    pub style: String,

    /// Output resolution label.
    #[arg(long, default_value = DEFAULT_RESOLUTION)]
    pub resolution: String,

    /// Frames per second.
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Additional generation parameters as KEY=VALUE pairs.
    #[arg(long = "meta", value_name = "KEY=VALUE")]
    pub meta: Vec<String>,
}

/// Run the generation pipeline and print the resulting record.
pub fn run(args: GenerateArgs, studio: &Studio) -> Result<()> {
    let request = GenerationRequest {
        prompt: args.prompt,
        duration: args.duration,
        style: args.style,
        resolution: args.resolution,
        fps: args.fps,
        extra: parse_key_values(&args.meta)?,
    };
    let record = studio.generate_video(&request)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
