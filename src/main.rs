//! Renders one second of a basic waveform to a 16-bit mono wave file.
//!
//! ```bash
//! wavesynth sine 440.0 0.5
//! ```
//!
//! writes `mysound.wav` to the working directory. Set `RUST_LOG=debug` for more detail.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::Rng;
use tracing_subscriber::EnvFilter;
use wavesynth::{
    constants::{DEFAULT_BITS_PER_SAMPLE, DEFAULT_OUTPUT},
    SynthParams, Waveform,
};

/// Renders one second of a basic waveform to a 16-bit mono wave file
#[derive(Parser, Debug)]
#[command(name = "wavesynth")]
#[command(version)]
struct Cli {
    /// Wave form: sine, square, saw, triangle or noise
    wave: Waveform,

    /// Frequency in Hz (20 to 20000 is audible)
    #[arg(allow_negative_numbers = true)]
    frequency: f32,

    /// Peak amplitude, from 0.0 (silence) to 1.0 (full volume)
    #[arg(allow_negative_numbers = true)]
    amplitude: f32,

    /// Where to write the wave file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    run(&Cli::parse(), &mut rand::thread_rng())
}

/// Renders the requested clip, writes it and logs its peak values.
fn run<R: Rng + ?Sized>(cli: &Cli, rng: &mut R) -> Result<()> {
    let params = SynthParams::new(cli.wave, cli.frequency, cli.amplitude);
    let mut clip = params.render(rng);

    clip.write_wav(&cli.output, DEFAULT_BITS_PER_SAMPLE)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    let (min, max) = clip.analyze_peaks();
    tracing::info!(min, max, "peak sample values");

    Ok(())
}
