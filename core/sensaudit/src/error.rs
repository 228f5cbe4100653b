use std::path::PathBuf;

use sensaudit_sens::SensError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Wrong input name '{}': expected a `scans` dataset root or a .sens file", .0.display())]
    InvalidInput(PathBuf),

    #[error("Sequence file '{}' is missing", .0.display())]
    MissingSequenceFile(PathBuf),

    #[error("Failed to read sequence '{}': {source}", .path.display())]
    SequenceRead {
        path: PathBuf,
        #[source]
        source: SensError,
    },

    #[error("Could not start the worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize the report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AuditResult<T> = Result<T, AuditError>;
