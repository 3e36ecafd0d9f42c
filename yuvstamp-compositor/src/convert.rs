//! BGR to planar YUV 4:2:0 colorspace conversion

use yuvstamp_bitmap::RgbImage;
use yuvstamp_video::{FrameGeometry, GeometryError, PlanarFrame};

/// Truncate a conversion result to an 8-bit sample
///
/// The reference formulas are defined with truncation toward zero,
/// never rounding; keeping the cast behind one name makes the policy a
/// single testable decision point. Every reachable formula output lies
/// in [0, 255.5), so the cast neither wraps nor saturates.
#[inline]
fn truncate_sample(value: f64) -> u8 {
    value as u8
}

/// Luma component: Y = 0.299R + 0.587G + 0.114B, truncated
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    truncate_sample(0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64)
}

/// U chroma component: U = -0.169R - 0.331G + 0.5B + 128, truncated
#[inline]
pub fn chroma_u(r: u8, g: u8, b: u8) -> u8 {
    truncate_sample(-0.169 * r as f64 - 0.331 * g as f64 + 0.5 * b as f64 + 128.0)
}

/// V chroma component: V = 0.5R - 0.419G - 0.081B + 128, truncated
#[inline]
pub fn chroma_v(r: u8, g: u8, b: u8) -> u8 {
    truncate_sample(0.5 * r as f64 - 0.419 * g as f64 - 0.081 * b as f64 + 128.0)
}

/// Convert an interleaved BGR image to a planar 4:2:0 frame
///
/// Luma is written for every pixel. Chroma is sampled only where both
/// coordinates are even, one U/V pair per 2x2 luma block with top-left
/// siting. Odd image dimensions are rejected rather than producing
/// misaligned chroma planes.
pub fn rgb_to_planar420(image: &RgbImage) -> Result<PlanarFrame, GeometryError> {
    let geometry = FrameGeometry::new(image.width(), image.height())?;
    let mut frame = PlanarFrame::new(geometry);

    let width = geometry.width() as usize;
    let height = geometry.height() as usize;
    let chroma_width = geometry.chroma_width() as usize;

    for j in 0..height {
        for i in 0..width {
            let (r, g, b) = image.pixel(i as u32, j as u32);

            frame.y[j * width + i] = luma(r, g, b);

            if i % 2 == 0 && j % 2 == 0 {
                let uv_index = (j / 2) * chroma_width + i / 2;
                frame.u[uv_index] = chroma_u(r, g, b);
                frame.v[uv_index] = chroma_v(r, g, b);
            }
        }
    }

    Ok(frame)
}
