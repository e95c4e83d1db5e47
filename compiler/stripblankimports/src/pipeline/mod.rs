//! Per-file transform stages.
//!
//! A [`Pipeline`] runs its stages in order, feeding each one the previous
//! stage's output. When a stage fails, the content it was given comes back
//! with the error, so a caller can still emit whatever the earlier stages
//! produced.

use std::path::PathBuf;

use sbi_fmt::Squasher;

use crate::DriverError;

/// One content-to-content transform.
pub trait Stage: Send + Sync {
    fn apply(&self, content: &[u8]) -> Result<Vec<u8>, DriverError>;
}

impl<F> Stage for F
where
    F: Fn(&[u8]) -> Result<Vec<u8>, DriverError> + Send + Sync,
{
    fn apply(&self, content: &[u8]) -> Result<Vec<u8>, DriverError> {
        self(content)
    }
}

/// A pass run once over every path after write-back.
pub trait BatchPass {
    fn run(&self, paths: &[PathBuf]) -> Result<(), DriverError>;
}

/// The import block squasher as a stage.
#[derive(Copy, Clone, Debug, Default)]
pub struct SquashStage(Squasher);

impl Stage for SquashStage {
    fn apply(&self, content: &[u8]) -> Result<Vec<u8>, DriverError> {
        Ok(self.0.transform(content)?)
    }
}

/// A failed run: the failing stage's input and its error.
#[derive(Debug)]
pub struct StageFailure {
    pub content: Vec<u8>,
    pub error: DriverError,
}

/// Stages applied in order.
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage.
    #[must_use]
    pub fn stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Run every stage, stopping at the first failure.
    pub fn run(&self, content: Vec<u8>) -> Result<Vec<u8>, StageFailure> {
        self.stages
            .iter()
            .try_fold(content, |content, stage| match stage.apply(&content) {
                Ok(out) => Ok(out),
                Err(error) => Err(StageFailure { content, error }),
            })
    }
}
