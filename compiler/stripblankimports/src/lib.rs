//! stripblankimports: squash Go import blocks, then hand them to goimports.
//!
//! Removing every blank line from an import block first lets goimports
//! rebuild its own grouping from scratch instead of keeping whatever
//! groups a file already had.
//!
//! - [`cli`]: command line definition
//! - [`pipeline`]: ordered per-file stages with pass-through on failure
//! - [`goimports`]: the external goimports post-pass
//! - [`driver`]: stdout and write-back modes over many files

pub mod cli;
pub mod driver;
mod error;
pub mod goimports;
pub mod pipeline;
mod tracing_setup;

pub use cli::Cli;
pub use driver::{run_stdout, run_write_back, RunSummary};
pub use error::{DriverError, GoimportsError};
pub use goimports::Goimports;
pub use pipeline::{BatchPass, Pipeline, SquashStage, Stage, StageFailure};
pub use tracing_setup::init_tracing;
