//! Frame geometry for planar 4:2:0 video

use thiserror::Error;

/// Geometry validation errors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("frame dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    #[error("frame dimensions must be even for 4:2:0 subsampling, got {width}x{height}")]
    OddDimension { width: u32, height: u32 },
}

/// Validated dimensions of a planar 4:2:0 frame
///
/// Width and height are in luma samples. Construction rejects zero or
/// odd dimensions: 4:2:0 stores one chroma sample per 2x2 luma block,
/// so odd dimensions have no exact chroma plane size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGeometry {
    width: u32,
    height: u32,
}

impl FrameGeometry {
    /// Create a validated geometry
    pub fn new(width: u32, height: u32) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::ZeroDimension { width, height });
        }
        if width % 2 != 0 || height % 2 != 0 {
            return Err(GeometryError::OddDimension { width, height });
        }
        Ok(Self { width, height })
    }

    /// Frame width in luma samples
    pub fn width(self) -> u32 {
        self.width
    }

    /// Frame height in luma samples
    pub fn height(self) -> u32 {
        self.height
    }

    /// Luma plane size in bytes (width * height)
    pub fn luma_plane_size(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Chroma plane width in samples (half the luma width)
    pub fn chroma_width(self) -> u32 {
        self.width / 2
    }

    /// Chroma plane height in samples (half the luma height)
    pub fn chroma_height(self) -> u32 {
        self.height / 2
    }

    /// Size of one chroma plane in bytes
    pub fn chroma_plane_size(self) -> usize {
        (self.chroma_width() as usize) * (self.chroma_height() as usize)
    }

    /// Total frame size in bytes: one luma plane plus two chroma planes
    pub fn frame_size(self) -> usize {
        self.luma_plane_size() + 2 * self.chroma_plane_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_sizes() {
        let geometry = FrameGeometry::new(1920, 1080).unwrap();
        assert_eq!(geometry.luma_plane_size(), 1920 * 1080);
        assert_eq!(geometry.chroma_width(), 960);
        assert_eq!(geometry.chroma_height(), 540);
        assert_eq!(geometry.chroma_plane_size(), 960 * 540);
        assert_eq!(geometry.frame_size(), 1920 * 1080 + 2 * 960 * 540);
    }

    #[test]
    fn test_chroma_is_quarter_resolution() {
        let geometry = FrameGeometry::new(512, 512).unwrap();
        assert_eq!(
            geometry.chroma_plane_size() * 4,
            geometry.luma_plane_size(),
            "Each chroma plane covers one sample per 2x2 luma block"
        );
    }

    #[test]
    fn test_odd_dimensions_rejected() {
        assert_eq!(
            FrameGeometry::new(511, 512),
            Err(GeometryError::OddDimension {
                width: 511,
                height: 512
            })
        );
        assert_eq!(
            FrameGeometry::new(512, 511),
            Err(GeometryError::OddDimension {
                width: 512,
                height: 511
            })
        );
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            FrameGeometry::new(0, 1080),
            Err(GeometryError::ZeroDimension { .. })
        ));
        assert!(matches!(
            FrameGeometry::new(1920, 0),
            Err(GeometryError::ZeroDimension { .. })
        ));
    }
}
