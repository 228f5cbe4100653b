use crate::{is_legal_pose, FrameRecord, FrameSource, Mat4, SequenceHealth, TimestampTracker};

/// A frame whose camera-to-world transform failed the pose check.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IllegalPose {
    pub frame: u64,
    pub camera_to_world: Mat4,
}

/// Accumulates the verdict of one sequence, one frame at a time.
#[derive(Clone, Debug, Default)]
pub struct SequenceAnalyzer {
    depth: TimestampTracker,
    color: TimestampTracker,
    frames: u64,
    illegal_poses: u64,
}

impl SequenceAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next frame of the sequence. Returns the pose diagnostic if its transform is
    /// illegal.
    pub fn observe(&mut self, frame: &FrameRecord) -> Option<IllegalPose> {
        let index = self.frames;
        self.frames += 1;
        self.depth.record(frame.depth_timestamp);
        self.color.record(frame.color_timestamp);

        if is_legal_pose(&frame.camera_to_world) {
            return None;
        }
        self.illegal_poses += 1;
        Some(IllegalPose {
            frame: index,
            camera_to_world: frame.camera_to_world,
        })
    }

    pub fn finish(self) -> SequenceHealth {
        SequenceHealth {
            total_frames: self.frames,
            illegal_pose_count: self.illegal_poses,
            depth_status: self.depth.status(),
            color_status: self.color.status(),
        }
    }
}

/// Drains `source` once and returns the health of the sequence.
///
/// When `verbose` is set, `on_illegal` is called for every frame with an illegal pose, in frame
/// order. A source error aborts the pass: no partial verdict is produced.
pub fn analyze<S>(
    source: &mut S,
    verbose: bool,
    mut on_illegal: impl FnMut(&IllegalPose),
) -> Result<SequenceHealth, S::Error>
where
    S: FrameSource + ?Sized,
{
    let mut analyzer = SequenceAnalyzer::new();
    while let Some(frame) = source.next_frame()? {
        if let Some(illegal) = analyzer.observe(&frame) {
            if verbose {
                on_illegal(&illegal);
            }
        }
    }
    Ok(analyzer.finish())
}
