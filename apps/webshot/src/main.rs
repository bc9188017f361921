//! Webshot - capture the virtual desktop and save it as a WebP file
//!
//! One pipeline, run once per invocation: capture every display into the
//! virtual-screen bounding box, encode the result as WebP (lossy or
//! lossless), write it to disk. Any failure aborts the run with exit code 1.

mod cli;
mod output;

use std::path::PathBuf;

use anyhow::Context;
use encoder::{EncoderConfig, ImageEncoder, WebpEncoder};
use tracing::info;

use crate::cli::CliArgs;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        eprintln!("Failed to save screenshot.");
        std::process::exit(1);
    }

    println!("Saved screenshot successfully.");
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = CliArgs::parse(std::env::args().skip(1))?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(output::default_filename(chrono::Local::now())));
    let quality = args.quality.unwrap_or(80);

    println!("Output: {}", output.display());
    println!("Quality: {}", quality);
    println!("Lossless: {}", if args.lossless { "yes" } else { "no" });

    let config = EncoderConfig {
        quality: quality as f32,
        lossless: args.lossless,
        ..Default::default()
    };
    let encoder = WebpEncoder::new(config).context("invalid encoder configuration")?;

    let mut backend = capture::create_capture().context("screen capture unavailable")?;
    let frame =
        capture::capture_virtual_screen(backend.as_mut()).context("screen capture failed")?;
    info!(
        "Captured virtual screen: {}x{}",
        frame.width, frame.height
    );

    let image = encoder.encode(&frame).context("WebP encoding failed")?;
    info!(
        "Encoded {} bytes in {} us",
        image.data.len(),
        image.encode_time_us
    );

    output::write_image(&output, &image.data)
        .with_context(|| format!("cannot write output file {}", output.display()))?;

    Ok(())
}
