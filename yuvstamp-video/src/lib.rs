//! Raw planar video model and stream I/O
//!
//! Provides the planar 4:2:0 frame representation shared by the whole
//! pipeline, plus sequential readers/writers for headerless raw video
//! streams (frames packed back-to-back, Y then U then V per frame).

pub mod frame;
pub mod stream;
pub mod types;

pub use frame::*;
pub use stream::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_size_1080p() {
        let geometry = FrameGeometry::new(1920, 1080).unwrap();
        assert_eq!(geometry.frame_size(), 1920 * 1080 * 3 / 2);
    }
}
