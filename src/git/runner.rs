//! Git command execution

use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

// Timeout constants
const GIT_OPERATION_TIMEOUT_SECS: u64 = 180; // 3 minutes per repository

/// Failure of a single git invocation
#[derive(Debug, Error)]
pub enum CommandError {
    /// Git exited non-zero. Carries the captured stderr text, or a generic
    /// exit-status message when stderr was empty.
    #[error("{0}")]
    Failed(String),
    /// The git binary could not be spawned
    #[error("failed to run git: {0}")]
    Io(#[from] std::io::Error),
    /// The invocation exceeded the per-command timeout
    #[error("git operation timed out after {0} seconds")]
    TimedOut(u64),
}

impl CommandError {
    /// Diagnostic text for per-repository failure notices
    pub fn detail(&self) -> String {
        self.to_string()
    }
}

/// Executes git invocations against a working directory.
///
/// The trait seam lets status resolution and batch operations run against a
/// scripted runner in tests instead of spawning processes.
#[async_trait]
pub trait GitRunner: Send + Sync {
    /// Runs `git <args>` with the working directory set to `dir`.
    /// Returns trimmed stdout on success.
    async fn run(&self, dir: &Path, args: &[&str]) -> Result<String, CommandError>;
}

/// Runs the system `git` binary, one process per call, with a timeout.
/// No retries; the caller decides how to interpret a failure.
pub struct SystemGit {
    timeout: Duration,
}

impl SystemGit {
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(GIT_OPERATION_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GitRunner for SystemGit {
    async fn run(&self, dir: &Path, args: &[&str]) -> Result<String, CommandError> {
        let result = tokio::time::timeout(
            self.timeout,
            Command::new("git").args(args).current_dir(dir).output(),
        )
        .await;

        let output = match result {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => return Err(CommandError::Io(e)),
            Err(_) => return Err(CommandError::TimedOut(self.timeout.as_secs())),
        };

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let detail = if stderr.is_empty() {
                format!("git exited unsuccessfully ({})", output.status)
            } else {
                stderr
            };
            Err(CommandError::Failed(detail))
        }
    }
}
