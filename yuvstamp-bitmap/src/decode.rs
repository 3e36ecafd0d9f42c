//! BMP header parsing and pixel-array decoding

use crate::image::RgbImage;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Combined size of BITMAPFILEHEADER and BITMAPINFOHEADER
pub const HEADER_LEN: usize = 54;

const MAGIC: [u8; 2] = *b"BM";

// Little-endian field offsets within the 54-byte header
const OFFSET_WIDTH: usize = 18;
const OFFSET_HEIGHT: usize = 22;
const OFFSET_BITS_PER_PIXEL: usize = 28;
const OFFSET_COMPRESSION: usize = 30;

/// BI_RGB, the only compression mode supported
const COMPRESSION_NONE: u32 = 0;

/// Bitmap decoding errors
#[derive(Debug, Error)]
pub enum BitmapError {
    #[error("failed to read bitmap file: {0}")]
    Io(#[from] std::io::Error),

    #[error("file too short for the 54-byte BMP header ({len} bytes)")]
    TruncatedHeader { len: usize },

    #[error("not a BMP file: bad magic {found:?}")]
    BadMagic { found: [u8; 2] },

    #[error("unsupported bit depth {bits_per_pixel}, only 24-bit BGR is supported")]
    UnsupportedBitDepth { bits_per_pixel: u16 },

    #[error("unsupported compression mode {compression}, only uncompressed BI_RGB is supported")]
    UnsupportedCompression { compression: u32 },

    #[error("invalid bitmap dimensions {width}x{height}")]
    BadDimensions { width: i32, height: i32 },

    #[error("pixel array truncated: expected {expected} bytes, found {found}")]
    TruncatedPixelData { expected: usize, found: usize },
}

/// Load and decode a BMP file from disk
pub fn load_bitmap<P: AsRef<Path>>(path: P) -> Result<RgbImage, BitmapError> {
    let bytes = fs::read(path)?;
    decode_bitmap(&bytes)
}

/// Decode an in-memory BMP file
///
/// Validates the header (magic, bit depth, compression, dimensions)
/// before touching the pixel array, then mirrors the bottom-up rows so
/// that row 0 of the result is the top scanline. Row padding is kept
/// in the buffer; the returned image carries the stride.
pub fn decode_bitmap(bytes: &[u8]) -> Result<RgbImage, BitmapError> {
    if bytes.len() < HEADER_LEN {
        return Err(BitmapError::TruncatedHeader { len: bytes.len() });
    }

    let found = [bytes[0], bytes[1]];
    if found != MAGIC {
        return Err(BitmapError::BadMagic { found });
    }

    let width = read_i32_le(bytes, OFFSET_WIDTH);
    let height = read_i32_le(bytes, OFFSET_HEIGHT);
    let bits_per_pixel = read_u16_le(bytes, OFFSET_BITS_PER_PIXEL);
    let compression = read_u32_le(bytes, OFFSET_COMPRESSION);

    if bits_per_pixel != 24 {
        return Err(BitmapError::UnsupportedBitDepth { bits_per_pixel });
    }
    if compression != COMPRESSION_NONE {
        return Err(BitmapError::UnsupportedCompression { compression });
    }
    // Negative height would mean top-down row order, which the raw
    // pipeline does not produce or accept.
    if width <= 0 || height <= 0 {
        return Err(BitmapError::BadDimensions { width, height });
    }

    let width = width as u32;
    let height = height as u32;

    // Rows are padded up to the next multiple of 4 bytes
    let stride = (width as usize * 3 + 3) & !3;
    let expected = stride * height as usize;

    let pixel_array = &bytes[HEADER_LEN..];
    if pixel_array.len() < expected {
        return Err(BitmapError::TruncatedPixelData {
            expected,
            found: pixel_array.len(),
        });
    }

    // BMP stores the bottom scanline first; mirror rows so row 0 is
    // the top scanline.
    let mut data = vec![0u8; expected];
    for row in 0..height as usize {
        let src = &pixel_array[row * stride..(row + 1) * stride];
        let dst_row = height as usize - 1 - row;
        data[dst_row * stride..(dst_row + 1) * stride].copy_from_slice(src);
    }

    log::debug!("decoded {}x{} bitmap, stride {} bytes", width, height, stride);

    Ok(RgbImage::from_raw(width, height, stride, data))
}

fn read_u16_le(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn read_i32_le(bytes: &[u8], offset: usize) -> i32 {
    read_u32_le(bytes, offset) as i32
}
