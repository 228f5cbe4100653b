//! Streaming reader for ScanNet `.sens` capture files.
//!
//! A `.sens` file is a little-endian dump of a sensor header followed by a list of RGB-D frames.
//! Each frame carries a camera-to-world pose, a color and a depth timestamp and the compressed
//! color and depth images. This crate only decodes the header and the per frame metadata, the
//! image payloads are seeked over and never decompressed.

mod error;
mod header;
mod reader;

#[cfg(test)]
mod test_utils;

pub use error::{SensError, SensResult};
pub use header::{ColorCompression, DepthCompression, SensHeader};
pub use reader::{SensFrame, SensReader};

/// The only file version written by the ScanNet capture tools.
pub const SENS_VERSION: u32 = 4;

/// Row-major 4x4 matrix as stored in the file.
pub type Mat4f = [[f32; 4]; 4];
