//! Planar 4:2:0 frame storage

use crate::types::FrameGeometry;

/// A single planar 4:2:0 frame
///
/// Owns its three sample planes: one full-resolution luma plane and
/// two quarter-resolution chroma planes. Plane lengths always match
/// the geometry; the geometry itself is immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanarFrame {
    geometry: FrameGeometry,

    /// Luma plane, width * height bytes, row-major
    pub y: Vec<u8>,
    /// U chroma plane, (width/2) * (height/2) bytes
    pub u: Vec<u8>,
    /// V chroma plane, (width/2) * (height/2) bytes
    pub v: Vec<u8>,
}

impl PlanarFrame {
    /// Allocate a zeroed frame for the given geometry
    pub fn new(geometry: FrameGeometry) -> Self {
        Self {
            geometry,
            y: vec![0; geometry.luma_plane_size()],
            u: vec![0; geometry.chroma_plane_size()],
            v: vec![0; geometry.chroma_plane_size()],
        }
    }

    /// Frame geometry
    pub fn geometry(&self) -> FrameGeometry {
        self.geometry
    }

    /// Frame width in luma samples
    pub fn width(&self) -> u32 {
        self.geometry.width()
    }

    /// Frame height in luma samples
    pub fn height(&self) -> u32 {
        self.geometry.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_plane_sizes() {
        let geometry = FrameGeometry::new(640, 480).unwrap();
        let frame = PlanarFrame::new(geometry);

        assert_eq!(frame.y.len(), 640 * 480);
        assert_eq!(frame.u.len(), 320 * 240);
        assert_eq!(frame.v.len(), 320 * 240);
    }

    #[test]
    fn test_new_frame_is_zeroed() {
        let geometry = FrameGeometry::new(16, 16).unwrap();
        let frame = PlanarFrame::new(geometry);

        assert!(frame.y.iter().all(|&s| s == 0));
        assert!(frame.u.iter().all(|&s| s == 0));
        assert!(frame.v.iter().all(|&s| s == 0));
    }
}
