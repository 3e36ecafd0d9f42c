//! Sequential frame-processing pipeline
//!
//! Reads fixed-size frames from the input stream, stamps the overlay
//! onto each one and writes the result to the output stream. Strictly
//! single-threaded and single-pass: one frame allocation is reused for
//! the whole run and no I/O is buffered or reordered here.

use crate::overlay::{ensure_fits, overlay_centered, OverlayError};
use std::io::{Read, Write};
use thiserror::Error;
use yuvstamp_video::{
    FrameGeometry, FrameReader, FrameWriter, GeometryError, PlanarFrame, StreamError,
};

/// Configuration for one pipeline run
///
/// All geometry flows through this struct; there is no process-wide
/// state. The defaults mirror the 1080p/500-frame capture setup this
/// tool was built around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Video frame width in luma samples, must be even
    pub width: u32,
    /// Video frame height in luma samples, must be even
    pub height: u32,
    /// Number of frames to read, composite and write
    pub frame_count: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            frame_count: 500,
        }
    }
}

/// Pipeline failure modes
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Overlay(#[from] OverlayError),

    #[error(transparent)]
    Stream(#[from] StreamError),
}

/// Counters for a completed pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub frames_processed: u64,
    pub bytes_written: u64,
}

/// Run the overlay pipeline over `config.frame_count` frames
///
/// Geometry and overlay fit are validated before the first read, so a
/// misconfigured run fails without touching either stream. A short
/// read surfaces as `StreamError::TruncatedStream` naming the frame
/// that came up short; any write failure is fatal.
pub fn process<R: Read, W: Write>(
    input: R,
    output: W,
    overlay: &PlanarFrame,
    config: &PipelineConfig,
) -> Result<PipelineStats, PipelineError> {
    let geometry = FrameGeometry::new(config.width, config.height)?;
    ensure_fits(geometry, overlay.geometry())?;

    let mut reader = FrameReader::new(input);
    let mut writer = FrameWriter::new(output);
    let mut frame = PlanarFrame::new(geometry);

    for _ in 0..config.frame_count {
        reader.read_frame(&mut frame)?;
        overlay_centered(&mut frame, overlay)?;
        writer.write_frame(&frame)?;

        if writer.frames_written() % 100 == 0 {
            log::debug!("composited {} frames", writer.frames_written());
        }
    }
    writer.flush()?;

    let stats = PipelineStats {
        frames_processed: writer.frames_written(),
        bytes_written: writer.bytes_written(),
    };
    log::info!(
        "composited {} frames, {} bytes written",
        stats.frames_processed,
        stats.bytes_written
    );
    Ok(stats)
}
