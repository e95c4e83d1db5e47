//! The goimports post-pass.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use crate::pipeline::{BatchPass, Stage};
use crate::{DriverError, GoimportsError};

/// An external goimports executable and its `-local` setting.
#[derive(Clone, Debug)]
pub struct Goimports {
    path: PathBuf,
    local: String,
}

impl Goimports {
    pub fn new(path: impl Into<PathBuf>, local: impl Into<String>) -> Self {
        Goimports {
            path: path.into(),
            local: local.into(),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.path);
        cmd.arg("-local").arg(&self.local);
        cmd
    }

    /// Pipe `content` through goimports and return what it prints.
    #[tracing::instrument(level = "debug", skip_all, fields(len = content.len()))]
    pub fn format_stdin(&self, content: &[u8]) -> Result<Vec<u8>, GoimportsError> {
        let mut child = self
            .command()
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| self.spawn_error(source))?;

        let stdin = child.stdin.take();
        // Stdin is fed from a second thread while stdout is drained.
        let (written, output) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(content),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(std::io::Error::other("stdin writer panicked")));
            (written, output)
        });

        let output = check(output?)?;
        written?;
        Ok(output.stdout)
    }

    /// Run `goimports -local LOCAL -w` over `paths` in one invocation.
    #[tracing::instrument(level = "debug", skip_all, fields(files = paths.len()))]
    pub fn write_back(&self, paths: &[PathBuf]) -> Result<(), GoimportsError> {
        let output = self
            .command()
            .arg("-w")
            .args(paths)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| self.spawn_error(source))?;
        check(output)?;
        Ok(())
    }

    fn spawn_error(&self, source: std::io::Error) -> GoimportsError {
        GoimportsError::Spawn {
            path: self.path.clone(),
            source,
        }
    }
}

fn check(output: Output) -> Result<Output, GoimportsError> {
    if output.status.success() {
        return Ok(output);
    }
    Err(GoimportsError::Failed {
        status: output.status,
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}

impl Stage for Goimports {
    fn apply(&self, content: &[u8]) -> Result<Vec<u8>, DriverError> {
        Ok(self.format_stdin(content)?)
    }
}

impl BatchPass for Goimports {
    fn run(&self, paths: &[PathBuf]) -> Result<(), DriverError> {
        Ok(self.write_back(paths)?)
    }
}

#[cfg(test)]
mod tests;
