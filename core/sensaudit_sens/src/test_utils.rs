use std::path::Path;

use crate::{Mat4f, SENS_VERSION};

pub fn identity() -> Mat4f {
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

struct FixtureFrame {
    pose: Mat4f,
    color_timestamp: u64,
    depth_timestamp: u64,
    color_size: u64,
    depth_size: u64,
}

/// Writes `.sens` files byte by byte so the decoder is checked against the raw layout.
pub struct SensFixture {
    version: u32,
    frames: Vec<FixtureFrame>,
    announced: Option<u64>,
    truncate_by: usize,
}

impl SensFixture {
    pub fn new() -> Self {
        Self {
            version: SENS_VERSION,
            frames: Vec::new(),
            announced: None,
            truncate_by: 0,
        }
    }

    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn frame(
        mut self,
        pose: Mat4f,
        color_timestamp: u64,
        depth_timestamp: u64,
        color_size: u64,
        depth_size: u64,
    ) -> Self {
        self.frames.push(FixtureFrame {
            pose,
            color_timestamp,
            depth_timestamp,
            color_size,
            depth_size,
        });
        self
    }

    pub fn announce_frames(mut self, count: u64) -> Self {
        self.announced = Some(count);
        self
    }

    pub fn truncate_by(mut self, bytes: usize) -> Self {
        self.truncate_by = bytes;
        self
    }

    pub fn write(self, path: &Path) {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&self.version.to_le_bytes());
        let name = b"StructureSensor";
        bytes.extend_from_slice(&(name.len() as u64).to_le_bytes());
        bytes.extend_from_slice(name);
        for _ in 0..4 {
            push_matrix(&mut bytes, &identity());
        }
        bytes.extend_from_slice(&2i32.to_le_bytes()); // jpeg
        bytes.extend_from_slice(&1i32.to_le_bytes()); // zlib
        for dim in [1296u32, 968, 640, 480] {
            bytes.extend_from_slice(&dim.to_le_bytes());
        }
        bytes.extend_from_slice(&1000f32.to_le_bytes());
        let count = self.announced.unwrap_or(self.frames.len() as u64);
        bytes.extend_from_slice(&count.to_le_bytes());

        for frame in &self.frames {
            push_matrix(&mut bytes, &frame.pose);
            bytes.extend_from_slice(&frame.color_timestamp.to_le_bytes());
            bytes.extend_from_slice(&frame.depth_timestamp.to_le_bytes());
            bytes.extend_from_slice(&frame.color_size.to_le_bytes());
            bytes.extend_from_slice(&frame.depth_size.to_le_bytes());
            bytes.resize(bytes.len() + (frame.color_size + frame.depth_size) as usize, 0xAB);
        }
        bytes.truncate(bytes.len() - self.truncate_by);
        std::fs::write(path, bytes).unwrap();
    }
}

fn push_matrix(bytes: &mut Vec<u8>, m: &Mat4f) {
    for row in m {
        for v in row {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
    }
}
