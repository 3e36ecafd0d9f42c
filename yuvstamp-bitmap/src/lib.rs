//! BMP decoding for the overlay image
//!
//! Supports exactly the layout the overlay pipeline consumes: 24-bit
//! uncompressed BGR with the standard 54-byte header and bottom-up row
//! order. Anything else is rejected up front with a named error
//! instead of being silently misread.

pub mod decode;
pub mod image;

pub use decode::*;
pub use image::*;
