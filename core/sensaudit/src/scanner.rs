use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use sensaudit_sens::SensReader;
use serde::{Deserialize, Serialize};

use crate::{analyze, AuditError, AuditResult, DatasetReport, Reporter, SequenceHealth};

/// Final path component designating a dataset root.
pub const DATASET_ROOT_NAME: &str = "scans";

/// Extension of a capture sequence file.
pub const SEQUENCE_EXTENSION: &str = "sens";

/// What the user pointed the audit at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanTarget {
    /// A `scans` directory holding one directory per scene.
    DatasetRoot(PathBuf),
    /// A single `.sens` file.
    Sequence(PathBuf),
}

impl ScanTarget {
    /// Picks the scan mode from the last component of `input`. A trailing separator is ignored.
    pub fn classify(input: &Path) -> AuditResult<Self> {
        if input.file_name().is_some_and(|name| name == DATASET_ROOT_NAME) {
            Ok(ScanTarget::DatasetRoot(input.to_path_buf()))
        } else if input.extension().is_some_and(|ext| ext == SEQUENCE_EXTENSION) {
            Ok(ScanTarget::Sequence(input.to_path_buf()))
        } else {
            Err(AuditError::InvalidInput(input.to_path_buf()))
        }
    }
}

/// Exactly one of the two results, depending on the scan mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanOutcome {
    Sequence(SequenceHealth),
    Dataset(DatasetReport),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// Scenes analysed concurrently in dataset mode. 1 scans sequentially, 0 uses one worker per
    /// CPU.
    pub jobs: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { jobs: 1 }
    }
}

/// How one scene of a dataset ended up.
#[derive(Debug)]
pub enum SceneOutcome {
    Missing,
    Failed(AuditError),
    Analyzed(SequenceHealth),
}

/// Where the sequence of a scene directory is expected: `<scene>/<scene>.sens`.
pub fn sequence_path(scene_dir: &Path) -> Option<PathBuf> {
    let scene = scene_dir.file_name()?;
    let mut file_name = scene.to_os_string();
    file_name.push(".");
    file_name.push(SEQUENCE_EXTENSION);
    Some(scene_dir.join(file_name))
}

/// Opens a sequence file, the decoding errors become [`AuditError::SequenceRead`].
pub fn open_sequence(path: &Path) -> AuditResult<SensReader> {
    if !path.is_file() {
        return Err(AuditError::MissingSequenceFile(path.to_path_buf()));
    }
    SensReader::open(path).map_err(|source| AuditError::SequenceRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Audits `input`, either a single sequence or a whole dataset root.
pub fn scan(
    input: &Path,
    options: &ScanOptions,
    reporter: &mut dyn Reporter,
) -> AuditResult<ScanOutcome> {
    match ScanTarget::classify(input)? {
        ScanTarget::Sequence(path) => {
            info!("Auditing single sequence {}", path.display());
            audit_sequence(&path, reporter).map(ScanOutcome::Sequence)
        }
        ScanTarget::DatasetRoot(root) => {
            info!("Auditing dataset root {}", root.display());
            scan_dataset(&root, options, reporter).map(ScanOutcome::Dataset)
        }
    }
}

/// Single sequence mode: header, every illegal pose and the summary go to the reporter.
pub fn audit_sequence(path: &Path, reporter: &mut dyn Reporter) -> AuditResult<SequenceHealth> {
    let mut sequence = open_sequence(path)?;
    reporter.sequence_header(path, sequence.header())?;

    let mut reported = Ok(());
    let health = analyze(&mut sequence, true, |pose| {
        if reported.is_ok() {
            reported = reporter.illegal_pose(pose);
        }
    })
    .map_err(|source| AuditError::SequenceRead {
        path: path.to_path_buf(),
        source,
    })?;
    reported?;

    reporter.sequence_summary(&health)?;
    Ok(health)
}

/// Lists the scene directories of a dataset root, ordered by name. Symlinked scene directories
/// count as scenes.
pub fn list_scenes(root: &Path) -> AuditResult<Vec<PathBuf>> {
    let mut scenes = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        if path.is_dir() {
            scenes.push(path);
        } else {
            debug!("Skipping {}, not a scene directory", path.display());
        }
    }
    scenes.sort();
    Ok(scenes)
}

/// Analyses one scene without reporting anything. Never fails: a missing or unreadable
/// sequence is an outcome of its own.
pub fn audit_scene(sequence: &Path) -> SceneOutcome {
    if !sequence.is_file() {
        return SceneOutcome::Missing;
    }
    let result = open_sequence(sequence).and_then(|mut reader| {
        analyze(&mut reader, false, |_| {}).map_err(|source| AuditError::SequenceRead {
            path: sequence.to_path_buf(),
            source,
        })
    });
    match result {
        Ok(health) => SceneOutcome::Analyzed(health),
        Err(e) => SceneOutcome::Failed(e),
    }
}

/// Dataset mode: every scene is audited, reported and folded into the report in name order.
///
/// A scene whose sequence cannot be decoded is counted as failed and the scan goes on with the
/// next one. This departs from a fail-fast audit, which would abort the whole batch on the first
/// unreadable file: here a corrupted file never does.
pub fn scan_dataset(
    root: &Path,
    options: &ScanOptions,
    reporter: &mut dyn Reporter,
) -> AuditResult<DatasetReport> {
    let sequences: Vec<PathBuf> = list_scenes(root)?
        .iter()
        .filter_map(|scene| sequence_path(scene))
        .collect();
    debug!("Found {} scenes in {}", sequences.len(), root.display());

    let mut report = DatasetReport::new();
    if options.jobs == 1 {
        for sequence in &sequences {
            reporter.scene_started(sequence)?;
            let outcome = audit_scene(sequence);
            report = record_scene(report, sequence, &outcome, reporter)?;
        }
    } else {
        let pool = ThreadPoolBuilder::new().num_threads(options.jobs).build()?;
        debug!("Auditing scenes on {} workers", pool.current_num_threads());
        let outcomes: Vec<SceneOutcome> =
            pool.install(|| sequences.par_iter().map(|s| audit_scene(s)).collect());
        for (sequence, outcome) in sequences.iter().zip(&outcomes) {
            reporter.scene_started(sequence)?;
            report = record_scene(report, sequence, outcome, reporter)?;
        }
    }

    reporter.dataset_report(&report)?;
    Ok(report)
}

fn record_scene(
    report: DatasetReport,
    sequence: &Path,
    outcome: &SceneOutcome,
    reporter: &mut dyn Reporter,
) -> AuditResult<DatasetReport> {
    match outcome {
        SceneOutcome::Missing => {
            info!("No sequence file at {}", sequence.display());
            reporter.scene_missing(sequence)?;
            Ok(report.with_missing())
        }
        SceneOutcome::Failed(e) => {
            warn!("{e}");
            reporter.scene_failed(sequence, e)?;
            Ok(report.with_failed())
        }
        SceneOutcome::Analyzed(health) => {
            reporter.sequence_summary(health)?;
            Ok(report.fold(health))
        }
    }
}
