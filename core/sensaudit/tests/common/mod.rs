#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use sensaudit::Mat4;

pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

pub fn skewed() -> Mat4 {
    let mut m = IDENTITY;
    m[3][3] = 0.999_999;
    m
}

/// One frame as `(depth timestamp, color timestamp, pose)`.
pub type Frame = (u64, u64, Mat4);

pub fn good_frames(count: u64) -> Vec<Frame> {
    (1..=count).map(|t| (t * 33, t * 33 + 1, IDENTITY)).collect()
}

/// Serializes a version 4 `.sens` file, with a few bytes of fake image payload per frame.
pub fn sens_bytes(frames: &[Frame]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&4u32.to_le_bytes());
    let name = b"StructureSensor";
    bytes.extend_from_slice(&(name.len() as u64).to_le_bytes());
    bytes.extend_from_slice(name);
    for _ in 0..4 {
        push_matrix(&mut bytes, &IDENTITY);
    }
    bytes.extend_from_slice(&2i32.to_le_bytes());
    bytes.extend_from_slice(&1i32.to_le_bytes());
    for dim in [1296u32, 968, 640, 480] {
        bytes.extend_from_slice(&dim.to_le_bytes());
    }
    bytes.extend_from_slice(&1000f32.to_le_bytes());
    bytes.extend_from_slice(&(frames.len() as u64).to_le_bytes());
    for (depth, color, pose) in frames {
        push_matrix(&mut bytes, pose);
        bytes.extend_from_slice(&color.to_le_bytes());
        bytes.extend_from_slice(&depth.to_le_bytes());
        bytes.extend_from_slice(&6u64.to_le_bytes());
        bytes.extend_from_slice(&4u64.to_le_bytes());
        bytes.extend_from_slice(&[0xFF; 10]);
    }
    bytes
}

pub fn write_sens(path: &Path, frames: &[Frame]) {
    fs::write(path, sens_bytes(frames)).unwrap();
}

fn push_matrix(bytes: &mut Vec<u8>, m: &Mat4) {
    for v in m.iter().flatten() {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
}

/// Builds a `scans` directory inside `parent`.
pub struct Dataset {
    root: PathBuf,
}

impl Dataset {
    pub fn new(parent: &Path) -> Self {
        let root = parent.join("scans");
        fs::create_dir_all(&root).unwrap();
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// A scene directory holding `<scene>/<scene>.sens`.
    pub fn scene(&self, name: &str, frames: &[Frame]) -> PathBuf {
        let dir = self.empty_scene(name);
        let path = dir.join(format!("{name}.sens"));
        write_sens(&path, frames);
        path
    }

    /// A scene directory without its sequence file.
    pub fn empty_scene(&self, name: &str) -> PathBuf {
        let dir = self.root.join(name);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// A scene whose sequence file is not a valid `.sens` file.
    pub fn corrupted_scene(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let dir = self.empty_scene(name);
        let path = dir.join(format!("{name}.sens"));
        fs::write(&path, bytes).unwrap();
        path
    }
}

/// Reporter keeping a trace of the events it receives.
#[derive(Default)]
pub struct Recorder {
    pub events: Vec<String>,
}

impl sensaudit::Reporter for Recorder {
    fn sequence_header(
        &mut self,
        path: &Path,
        _header: &dyn std::fmt::Display,
    ) -> std::io::Result<()> {
        self.events.push(format!("header {}", name(path)));
        Ok(())
    }

    fn illegal_pose(&mut self, pose: &sensaudit::IllegalPose) -> std::io::Result<()> {
        self.events.push(format!("illegal {}", pose.frame));
        Ok(())
    }

    fn sequence_summary(&mut self, health: &sensaudit::SequenceHealth) -> std::io::Result<()> {
        self.events.push(format!(
            "summary {}/{}",
            health.illegal_pose_count, health.total_frames
        ));
        Ok(())
    }

    fn scene_started(&mut self, sequence: &Path) -> std::io::Result<()> {
        self.events.push(format!("start {}", name(sequence)));
        Ok(())
    }

    fn scene_missing(&mut self, sequence: &Path) -> std::io::Result<()> {
        self.events.push(format!("missing {}", name(sequence)));
        Ok(())
    }

    fn scene_failed(
        &mut self,
        sequence: &Path,
        _error: &sensaudit::AuditError,
    ) -> std::io::Result<()> {
        self.events.push(format!("failed {}", name(sequence)));
        Ok(())
    }

    fn dataset_report(&mut self, report: &sensaudit::DatasetReport) -> std::io::Result<()> {
        self.events
            .push(format!("report {}", report.sequences_processed));
        Ok(())
    }
}

fn name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
