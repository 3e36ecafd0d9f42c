//! Sequential raw 4:2:0 stream I/O
//!
//! Raw video files carry no container or per-frame framing: frames are
//! packed back-to-back, each one a contiguous Y plane followed by the
//! U and V planes. Reading and writing are strictly sequential and
//! single-pass; there is no seeking.

use crate::frame::PlanarFrame;
use std::io::{self, Read, Write};
use thiserror::Error;

/// Errors from raw stream reads and writes
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("stream I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("input stream truncated in {plane} plane of frame {frame_index}")]
    TruncatedStream { frame_index: u64, plane: &'static str },
}

/// Sequential reader for headerless planar 4:2:0 streams
pub struct FrameReader<R> {
    inner: R,
    frames_read: u64,
}

impl<R: Read> FrameReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            frames_read: 0,
        }
    }

    /// Number of complete frames read so far
    pub fn frames_read(&self) -> u64 {
        self.frames_read
    }

    /// Read the next frame into `frame`, plane by plane
    ///
    /// A short read (end of stream mid-frame) is reported as
    /// `TruncatedStream` with the frame index and the plane that came
    /// up short; the frame contents are unspecified in that case.
    pub fn read_frame(&mut self, frame: &mut PlanarFrame) -> Result<(), StreamError> {
        let frame_index = self.frames_read;
        Self::fill_plane(&mut self.inner, &mut frame.y, "luma", frame_index)?;
        Self::fill_plane(&mut self.inner, &mut frame.u, "U chroma", frame_index)?;
        Self::fill_plane(&mut self.inner, &mut frame.v, "V chroma", frame_index)?;
        self.frames_read += 1;
        Ok(())
    }

    fn fill_plane(
        inner: &mut R,
        plane_buf: &mut [u8],
        plane: &'static str,
        frame_index: u64,
    ) -> Result<(), StreamError> {
        inner.read_exact(plane_buf).map_err(|err| {
            if err.kind() == io::ErrorKind::UnexpectedEof {
                StreamError::TruncatedStream { frame_index, plane }
            } else {
                StreamError::Io(err)
            }
        })
    }
}

/// Sequential writer for headerless planar 4:2:0 streams
pub struct FrameWriter<W> {
    inner: W,
    frames_written: u64,
    bytes_written: u64,
}

impl<W: Write> FrameWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            frames_written: 0,
            bytes_written: 0,
        }
    }

    /// Number of frames written so far
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Number of bytes written so far
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Write one frame, planes in Y, U, V order
    pub fn write_frame(&mut self, frame: &PlanarFrame) -> Result<(), StreamError> {
        self.inner.write_all(&frame.y)?;
        self.inner.write_all(&frame.u)?;
        self.inner.write_all(&frame.v)?;
        self.frames_written += 1;
        self.bytes_written += frame.geometry().frame_size() as u64;
        Ok(())
    }

    /// Flush the underlying stream
    pub fn flush(&mut self) -> Result<(), StreamError> {
        self.inner.flush()?;
        Ok(())
    }
}
