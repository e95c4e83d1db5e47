//! Driver-level errors.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use sbi_fmt::SquashError;

/// The external goimports run failed.
#[derive(Debug, thiserror::Error)]
pub enum GoimportsError {
    #[error("goimports: failed to start {}: {source}", path.display())]
    Spawn { path: PathBuf, source: io::Error },
    #[error("goimports: {0}")]
    Io(#[from] io::Error),
    #[error("goimports: {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
}

/// Why one file, or the post-pass, failed.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("error reading file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("error writing file {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Squash(#[from] SquashError),
    #[error(transparent)]
    Goimports(#[from] GoimportsError),
}

impl DriverError {
    /// Expected outcomes that leave the content unchanged.
    pub fn is_pass_through(&self) -> bool {
        matches!(self, DriverError::Squash(err) if err.is_pass_through())
    }
}
