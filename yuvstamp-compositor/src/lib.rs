//! Bitmap-over-video compositing
//!
//! Converts a decoded bitmap to planar 4:2:0 and stamps it onto the
//! center of every frame of a raw video stream. The pipeline is a
//! strictly sequential single pass: one overlay frame is produced up
//! front, then each video frame is read, composited in place and
//! written back out.

pub mod convert;
pub mod overlay;
pub mod pipeline;

pub use convert::*;
pub use overlay::*;
pub use pipeline::*;
