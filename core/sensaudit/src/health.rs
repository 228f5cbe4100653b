use serde::{Deserialize, Serialize};

use crate::TimestampStatus;

/// Verdict of a full pass over one sequence.
///
/// Built once by [`crate::SequenceAnalyzer`], `illegal_pose_count <= total_frames` always holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceHealth {
    pub total_frames: u64,
    pub illegal_pose_count: u64,
    pub depth_status: TimestampStatus,
    pub color_status: TimestampStatus,
}

impl SequenceHealth {
    pub fn is_pose_valid(&self) -> bool {
        self.illegal_pose_count == 0
    }

    pub fn is_timestamp_valid(&self) -> bool {
        self.depth_status == TimestampStatus::Good && self.color_status == TimestampStatus::Good
    }

    pub fn is_healthy(&self) -> bool {
        self.is_pose_valid() && self.is_timestamp_valid()
    }
}

/// Dataset wide counters, folded one scene at a time.
///
/// Every counter is a plain sum or count so the result does not depend on the order the scenes
/// are folded in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetReport {
    /// Scenes without their `<scene>/<scene>.sens` file.
    pub missing_sequences: u64,
    /// Scenes whose sequence file could not be decoded.
    pub failed_sequences: u64,
    pub total_frames: u64,
    pub total_illegal_poses: u64,
    pub pose_valid_sequences: u64,
    pub timestamp_valid_sequences: u64,
    pub healthy_sequences: u64,
    pub sequences_processed: u64,
}

impl DatasetReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one analyzed sequence.
    pub fn fold(self, health: &SequenceHealth) -> Self {
        Self {
            total_frames: self.total_frames + health.total_frames,
            total_illegal_poses: self.total_illegal_poses + health.illegal_pose_count,
            pose_valid_sequences: self.pose_valid_sequences + u64::from(health.is_pose_valid()),
            timestamp_valid_sequences: self.timestamp_valid_sequences
                + u64::from(health.is_timestamp_valid()),
            healthy_sequences: self.healthy_sequences + u64::from(health.is_healthy()),
            sequences_processed: self.sequences_processed + 1,
            ..self
        }
    }

    pub fn with_missing(self) -> Self {
        Self {
            missing_sequences: self.missing_sequences + 1,
            ..self
        }
    }

    pub fn with_failed(self) -> Self {
        Self {
            failed_sequences: self.failed_sequences + 1,
            ..self
        }
    }

    /// Frames whose pose passed the check.
    pub fn total_legal_poses(&self) -> u64 {
        self.total_frames.saturating_sub(self.total_illegal_poses)
    }
}
