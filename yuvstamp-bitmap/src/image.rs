//! Interleaved RGB image buffer as loaded from a bitmap

/// A decoded 24-bit image, top-to-bottom, 3 bytes per pixel
///
/// The buffer keeps the bitmap's BGR byte order and its 4-byte row
/// padding; `stride` is the distance between rows in bytes, and
/// [`RgbImage::pixel`] hides both details from callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<u8>,
}

impl RgbImage {
    /// Wrap a raw BGR buffer
    ///
    /// `data` must hold exactly `stride * height` bytes with row 0 as
    /// the top scanline.
    pub fn from_raw(width: u32, height: u32, stride: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), stride * height as usize);
        Self {
            width,
            height,
            stride,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes, including any alignment padding
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Raw BGR buffer, including row padding
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Sample the pixel at (x, y), returned as (R, G, B)
    ///
    /// (0, 0) is the top-left corner.
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let base = y as usize * self.stride + x as usize * 3;
        // Stored byte order is B, G, R
        (self.data[base + 2], self.data[base + 1], self.data[base])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_swaps_bgr_to_rgb() {
        // One pixel stored as B=10, G=20, R=30
        let image = RgbImage::from_raw(1, 1, 4, vec![10, 20, 30, 0]);
        assert_eq!(image.pixel(0, 0), (30, 20, 10));
    }

    #[test]
    fn test_pixel_indexing_is_stride_aware() {
        // 2x2 image with stride 8 (two padding bytes per row)
        let mut data = vec![0u8; 16];
        // Row 1, pixel 1 stored at stride-aware offset 8 + 3
        data[8 + 3] = 1; // B
        data[8 + 4] = 2; // G
        data[8 + 5] = 3; // R
        let image = RgbImage::from_raw(2, 2, 8, data);

        assert_eq!(image.pixel(1, 1), (3, 2, 1));
        assert_eq!(image.pixel(0, 0), (0, 0, 0));
    }
}
