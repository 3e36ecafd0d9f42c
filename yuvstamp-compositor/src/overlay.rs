//! Centered in-place frame overlay

use thiserror::Error;
use yuvstamp_video::{FrameGeometry, PlanarFrame};

/// Overlay placement errors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OverlayError {
    #[error(
        "overlay {overlay_width}x{overlay_height} does not fit in \
         frame {frame_width}x{frame_height}"
    )]
    TooLarge {
        frame_width: u32,
        frame_height: u32,
        overlay_width: u32,
        overlay_height: u32,
    },
}

/// Check that an overlay fits inside a frame
pub fn ensure_fits(frame: FrameGeometry, overlay: FrameGeometry) -> Result<(), OverlayError> {
    if overlay.width() > frame.width() || overlay.height() > frame.height() {
        return Err(OverlayError::TooLarge {
            frame_width: frame.width(),
            frame_height: frame.height(),
            overlay_width: overlay.width(),
            overlay_height: overlay.height(),
        });
    }
    Ok(())
}

/// Offsets that center `overlay` inside `frame`, in luma samples
///
/// Integer division truncates, so an odd size difference biases the
/// overlay one sample toward the top-left.
pub fn centered_offsets(frame: FrameGeometry, overlay: FrameGeometry) -> (u32, u32) {
    (
        (frame.width() - overlay.width()) / 2,
        (frame.height() - overlay.height()) / 2,
    )
}

/// Stamp `overlay` onto the center of `frame`, in place
///
/// Hard replacement only: every frame sample under the overlay
/// footprint takes the overlay's value, everything outside is left
/// untouched. Chroma placement follows the luma offset halved, kept as
/// per-sample index math because an odd luma offset maps overlay
/// chroma onto frame chroma sites shifted half a block toward the
/// top-left rather than onto a plain sub-rectangle.
pub fn overlay_centered(frame: &mut PlanarFrame, overlay: &PlanarFrame) -> Result<(), OverlayError> {
    ensure_fits(frame.geometry(), overlay.geometry())?;
    let (x_offset, y_offset) = centered_offsets(frame.geometry(), overlay.geometry());
    let x_offset = x_offset as usize;
    let y_offset = y_offset as usize;

    let frame_width = frame.width() as usize;
    let overlay_width = overlay.width() as usize;
    let overlay_height = overlay.height() as usize;

    // Luma: whole rows at the offset position
    for j in 0..overlay_height {
        let src = &overlay.y[j * overlay_width..(j + 1) * overlay_width];
        let dst_start = (j + y_offset) * frame_width + x_offset;
        frame.y[dst_start..dst_start + overlay_width].copy_from_slice(src);
    }

    // Chroma: one sample per 2x2 luma block, original index mapping
    let frame_chroma_width = frame.geometry().chroma_width() as usize;
    let overlay_chroma_width = overlay.geometry().chroma_width() as usize;
    for j in (0..overlay_height).step_by(2) {
        for i in (0..overlay_width).step_by(2) {
            let dst = ((j + y_offset) / 2) * frame_chroma_width + (i + x_offset) / 2;
            let src = (j / 2) * overlay_chroma_width + i / 2;
            frame.u[dst] = overlay.u[src];
            frame.v[dst] = overlay.v[src];
        }
    }

    Ok(())
}
