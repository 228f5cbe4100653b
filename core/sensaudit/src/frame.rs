use std::convert::Infallible;

use sensaudit_sens::{SensError, SensFrame, SensReader};

/// Row-major 4x4 homogeneous transform. Row 3 is the homogeneous row.
pub type Mat4 = [[f32; 4]; 4];

/// What the audit needs to know about one recorded RGB-D frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameRecord {
    pub depth_timestamp: u64,
    pub color_timestamp: u64,
    pub camera_to_world: Mat4,
}

impl From<SensFrame> for FrameRecord {
    fn from(frame: SensFrame) -> Self {
        Self {
            depth_timestamp: frame.depth_timestamp,
            color_timestamp: frame.color_timestamp,
            camera_to_world: frame.camera_to_world,
        }
    }
}

/// An ordered, finite and non restartable supply of frames for one sequence.
pub trait FrameSource {
    type Error;

    /// Yields the next frame in recording order, `Ok(None)` once the sequence is exhausted.
    fn next_frame(&mut self) -> Result<Option<FrameRecord>, Self::Error>;
}

impl FrameSource for SensReader {
    type Error = SensError;

    fn next_frame(&mut self) -> Result<Option<FrameRecord>, SensError> {
        Ok(SensReader::next_frame(self)?.map(FrameRecord::from))
    }
}

/// Frames already in memory, mostly useful to embed the audit or to test it.
#[derive(Debug, Clone)]
pub struct MemoryFrameSource {
    frames: std::vec::IntoIter<FrameRecord>,
}

impl From<Vec<FrameRecord>> for MemoryFrameSource {
    fn from(frames: Vec<FrameRecord>) -> Self {
        Self {
            frames: frames.into_iter(),
        }
    }
}

impl FromIterator<FrameRecord> for MemoryFrameSource {
    fn from_iter<T: IntoIterator<Item = FrameRecord>>(iter: T) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl FrameSource for MemoryFrameSource {
    type Error = Infallible;

    fn next_frame(&mut self) -> Result<Option<FrameRecord>, Infallible> {
        Ok(self.frames.next())
    }
}
