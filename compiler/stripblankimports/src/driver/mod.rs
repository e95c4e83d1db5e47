//! Stdout and write-back drivers.
//!
//! Files are processed in parallel with rayon. Every per-file failure is
//! logged here; nothing is fatal to the batch.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::pipeline::{BatchPass, Pipeline, Stage, StageFailure};
use crate::DriverError;

/// Per-run file counts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Every stage succeeded.
    pub transformed: usize,
    /// Left unchanged on purpose: nothing to squash.
    pub passed_through: usize,
    /// Unreadable, unparsable, or otherwise failed.
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Transformed(_) => self.transformed += 1,
            Outcome::PassedThrough(_) => self.passed_through += 1,
            Outcome::Failed(_) => self.failed += 1,
        }
    }
}

/// What happened to one file.
enum Outcome {
    Transformed(Vec<u8>),
    PassedThrough(Vec<u8>),
    /// Content still worth emitting, if any.
    Failed(Option<Vec<u8>>),
}

impl Outcome {
    fn content(&self) -> Option<&[u8]> {
        match self {
            Outcome::Transformed(c) | Outcome::PassedThrough(c) => Some(c),
            Outcome::Failed(c) => c.as_deref(),
        }
    }
}

/// Run `pipeline` over each file and print the results to `out` in
/// argument order.
///
/// A file whose pipeline fails is still printed as the failing stage's
/// input. Unreadable files are skipped.
pub fn run_stdout(
    paths: &[PathBuf],
    pipeline: &Pipeline,
    out: &mut impl Write,
) -> io::Result<RunSummary> {
    let outcomes: Vec<Outcome> = paths
        .par_iter()
        .map(|path| {
            let content = match read(path) {
                Ok(content) => content,
                Err(err) => {
                    log_failure(path, &err);
                    return Outcome::Failed(None);
                }
            };
            match pipeline.run(content) {
                Ok(output) => {
                    tracing::info!(path = %path.display(), "processed");
                    Outcome::Transformed(output)
                }
                Err(StageFailure { content, error }) => {
                    log_failure(path, &error);
                    if error.is_pass_through() {
                        Outcome::PassedThrough(content)
                    } else {
                        Outcome::Failed(Some(content))
                    }
                }
            }
        })
        .collect();

    let mut summary = RunSummary::default();
    for outcome in &outcomes {
        summary.record(outcome);
        if let Some(content) = outcome.content() {
            out.write_all(content)?;
        }
    }
    out.flush()?;
    Ok(summary)
}

/// Rewrite each file with `stage`, then run `post` over all paths once.
///
/// Files whose stage fails are left untouched. A post-pass failure is
/// logged and does not change the summary.
pub fn run_write_back(paths: &[PathBuf], stage: &dyn Stage, post: &dyn BatchPass) -> RunSummary {
    let outcomes: Vec<Outcome> = paths
        .par_iter()
        .map(|path| match write_back_one(path, stage) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "rewritten");
                Outcome::Transformed(Vec::new())
            }
            Err(err) => {
                log_failure(path, &err);
                if err.is_pass_through() {
                    Outcome::PassedThrough(Vec::new())
                } else {
                    Outcome::Failed(None)
                }
            }
        })
        .collect();

    let mut summary = RunSummary::default();
    for outcome in &outcomes {
        summary.record(outcome);
    }

    if let Err(err) = post.run(paths) {
        tracing::warn!(error = %err, "post-pass failed");
    }
    summary
}

fn write_back_one(path: &Path, stage: &dyn Stage) -> Result<(), DriverError> {
    let content = read(path)?;
    let output = stage.apply(&content)?;
    std::fs::write(path, output).map_err(|source| DriverError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn read(path: &Path) -> Result<Vec<u8>, DriverError> {
    std::fs::read(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn log_failure(path: &Path, err: &DriverError) {
    if err.is_pass_through() {
        tracing::debug!(path = %path.display(), reason = %err, "passing file through");
    } else {
        tracing::warn!(path = %path.display(), error = %err, "error processing file");
    }
}
