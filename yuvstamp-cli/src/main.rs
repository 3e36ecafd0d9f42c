use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use yuvstamp_bitmap::load_bitmap;
use yuvstamp_compositor::{process, rgb_to_planar420, PipelineConfig};

/// Stamp a BMP image onto the center of every frame of a raw planar
/// 4:2:0 video stream.
#[derive(Parser, Debug)]
#[command(name = "yuvstamp", version)]
struct Cli {
    /// Input raw 4:2:0 video file.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Overlay image (24-bit uncompressed BMP).
    #[arg(long)]
    overlay: PathBuf,

    /// Output raw 4:2:0 video file.
    #[arg(long)]
    out: PathBuf,

    /// Frame width in luma samples (must be even).
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Frame height in luma samples (must be even).
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Number of frames to process.
    #[arg(long, default_value_t = 500)]
    frames: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let image = load_bitmap(&cli.overlay)
        .with_context(|| format!("failed to load overlay bitmap {}", cli.overlay.display()))?;
    let overlay = rgb_to_planar420(&image).context("overlay image is not 4:2:0 convertible")?;

    let input = BufReader::new(
        File::open(&cli.in_path)
            .with_context(|| format!("failed to open input video {}", cli.in_path.display()))?,
    );
    let output = BufWriter::new(
        File::create(&cli.out)
            .with_context(|| format!("failed to create output video {}", cli.out.display()))?,
    );

    let config = PipelineConfig {
        width: cli.width,
        height: cli.height,
        frame_count: cli.frames,
    };
    let stats = process(input, output, &overlay, &config)?;

    println!(
        "Processing complete: {} frames, {} bytes written",
        stats.frames_processed, stats.bytes_written
    );
    Ok(())
}
