use std::fmt::Display;
use std::fs::File;
use std::io::{self, Stdout, Write};
use std::path::Path;

use serde::Serialize;

use crate::{AuditError, AuditResult, DatasetReport, IllegalPose, SequenceHealth};

const GREEN: &str = "\x1B[32m";
const RED: &str = "\x1B[31m";
const RESET: &str = "\x1B[0m";

/// Receives the results of an audit as they are produced.
pub trait Reporter {
    /// The decoded header of a sequence opened in single sequence mode.
    fn sequence_header(&mut self, path: &Path, header: &dyn Display) -> io::Result<()>;

    fn illegal_pose(&mut self, pose: &IllegalPose) -> io::Result<()>;

    fn sequence_summary(&mut self, health: &SequenceHealth) -> io::Result<()>;

    fn scene_started(&mut self, sequence: &Path) -> io::Result<()>;

    fn scene_missing(&mut self, sequence: &Path) -> io::Result<()>;

    fn scene_failed(&mut self, sequence: &Path, error: &AuditError) -> io::Result<()>;

    fn dataset_report(&mut self, report: &DatasetReport) -> io::Result<()>;
}

/// Plain text rendering, optionally with green/red yes/no verdicts.
pub struct TextReporter<W: Write> {
    out: W,
    highlight: bool,
}

impl TextReporter<Stdout> {
    pub fn stdout(highlight: bool) -> Self {
        Self::new(io::stdout(), highlight)
    }
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W, highlight: bool) -> Self {
        Self { out, highlight }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn verdict(&self, ok: bool, detail: &str) -> String {
        let word = if ok { "yes" } else { "no" };
        let sep = if detail.is_empty() { "" } else { " " };
        if self.highlight {
            let color = if ok { GREEN } else { RED };
            format!("{color}{word}{sep}{detail}{RESET}")
        } else {
            format!("{word}{sep}{detail}")
        }
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn sequence_header(&mut self, path: &Path, header: &dyn Display) -> io::Result<()> {
        writeln!(self.out, "Loaded {}", path.display())?;
        writeln!(self.out, "{header}")?;
        writeln!(self.out)
    }

    fn illegal_pose(&mut self, pose: &IllegalPose) -> io::Result<()> {
        let rows: Vec<String> = pose
            .camera_to_world
            .iter()
            .map(|row| format!("[{}, {}, {}, {}]", row[0], row[1], row[2], row[3]))
            .collect();
        writeln!(
            self.out,
            "Found illegal transformation at frame {}: [{}]",
            pose.frame,
            rows.join(", ")
        )
    }

    fn sequence_summary(&mut self, health: &SequenceHealth) -> io::Result<()> {
        let depth = health.depth_status;
        let color = health.color_status;
        let poses = format!("{}/{}", health.illegal_pose_count, health.total_frames);
        let lines = [
            ("Depth timestamps are monotonic", depth.is_monotonic(), ""),
            ("RGB   timestamps are monotonic", color.is_monotonic(), ""),
            ("Depth timestamps are available", depth.is_available(), ""),
            ("RGB   timestamps are available", color.is_available(), ""),
            ("All  camera  poses  were legal", health.is_pose_valid(), poses.as_str()),
        ];
        for (label, ok, detail) in lines {
            let verdict = self.verdict(ok, detail);
            writeln!(self.out, "{label}: {verdict}")?;
        }
        writeln!(self.out)
    }

    fn scene_started(&mut self, sequence: &Path) -> io::Result<()> {
        writeln!(self.out, "Processing {}", sequence.display())
    }

    fn scene_missing(&mut self, _sequence: &Path) -> io::Result<()> {
        writeln!(self.out, "file missing, ignored.")?;
        writeln!(self.out)
    }

    fn scene_failed(&mut self, _sequence: &Path, error: &AuditError) -> io::Result<()> {
        writeln!(self.out, "file unreadable, ignored: {error}")?;
        writeln!(self.out)
    }

    fn dataset_report(&mut self, report: &DatasetReport) -> io::Result<()> {
        let total = report.sequences_processed;
        writeln!(self.out, "======================")?;
        writeln!(self.out, "====    Report    ====")?;
        writeln!(self.out, "======================")?;
        writeln!(self.out, "No .sens file inside: {}", report.missing_sequences)?;
        writeln!(self.out, "Unreadable .sens file: {}", report.failed_sequences)?;
        writeln!(self.out, "Total Pose Number: {}", report.total_frames)?;
        writeln!(self.out, "Total Valid Pose Number: {}", report.total_legal_poses())?;
        writeln!(self.out, "Total Invalid Pose Number: {}", report.total_illegal_poses)?;
        writeln!(
            self.out,
            "Total Valid Pose Seq Number: {} / {total}",
            report.pose_valid_sequences
        )?;
        writeln!(
            self.out,
            "Total Valid Timestamp Seq Number: {} / {total}",
            report.timestamp_valid_sequences
        )?;
        writeln!(self.out, "Total Healthy Seq Number: {} / {total}", report.healthy_sequences)?;
        self.out.flush()
    }
}

/// Writes any audit result as pretty printed JSON.
pub fn write_json<T: Serialize>(result: &T, path: &Path) -> AuditResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, result)?;
    Ok(())
}
