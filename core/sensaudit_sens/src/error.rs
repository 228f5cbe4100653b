use bincode::error::DecodeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SensError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed .sens data: {0}")]
    Decode(#[from] DecodeError),

    #[error("Unsupported .sens version {0} (only version 4 is supported)")]
    UnsupportedVersion(u32),

    #[error("File ends in the middle of frame {frame}")]
    Truncated { frame: u64 },
}

pub type SensResult<T> = Result<T, SensError>;
