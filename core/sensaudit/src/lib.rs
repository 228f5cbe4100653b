//! Integrity audit of recorded RGB-D capture sequences.
//!
//! A sequence is healthy when its depth and color timestamps are available and never go back in
//! time, and when every camera-to-world pose is a proper homogeneous transform. The audit runs on
//! a single `.sens` file or on a whole ScanNet `scans` directory, in which case the verdicts of
//! every scene are folded into a [`DatasetReport`].

mod analyzer;
pub mod cli;
mod error;
mod frame;
mod health;
mod pose;
mod report;
mod scanner;
mod timestamp;

pub use analyzer::{analyze, IllegalPose, SequenceAnalyzer};
pub use error::{AuditError, AuditResult};
pub use frame::{FrameRecord, FrameSource, Mat4, MemoryFrameSource};
pub use health::{DatasetReport, SequenceHealth};
pub use pose::{is_legal_pose, HOMOGENEOUS_ROW};
pub use report::{write_json, Reporter, TextReporter};
pub use scanner::{
    audit_scene, audit_sequence, list_scenes, open_sequence, scan, scan_dataset, sequence_path,
    ScanOptions, ScanOutcome, ScanTarget, SceneOutcome, DATASET_ROOT_NAME, SEQUENCE_EXTENSION,
};
pub use timestamp::{TimestampStatus, TimestampTracker};
