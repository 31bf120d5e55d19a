//! Repository status resolution

use serde::Serialize;
use std::path::Path;

use super::runner::{CommandError, GitRunner};

// Git command arguments
const GIT_BRANCH_SHOW_CURRENT_ARGS: &[&str] = &["branch", "--show-current"];
const GIT_STATUS_PORCELAIN_ARGS: &[&str] = &["status", "--porcelain"];
const GIT_AHEAD_BEHIND_ARGS: &[&str] =
    &["rev-list", "--left-right", "--count", "HEAD...@{upstream}"];

// Sentinel branch names
const DETACHED_BRANCH: &str = "detached";
const UNKNOWN_BRANCH: &str = "unknown";

/// Snapshot of a repository's working state.
///
/// `ahead`/`behind` count commits relative to the configured upstream and
/// are both zero when no upstream exists. `branch` is never empty: a
/// detached HEAD reads `"detached"`, an unusable repository `"unknown"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RepoStatus {
    pub branch: String,
    pub dirty: bool,
    pub ahead: u32,
    pub behind: u32,
}

impl RepoStatus {
    /// Sentinel for paths where the branch or dirtiness queries cannot run.
    pub fn unknown() -> Self {
        Self {
            branch: UNKNOWN_BRANCH.to_string(),
            dirty: false,
            ahead: 0,
            behind: 0,
        }
    }

    /// One-line description: `main · dirty · ↑2 ↓0`
    pub fn describe(&self) -> String {
        format!(
            "{} · {} · ↑{} ↓{}",
            self.branch,
            if self.dirty { "dirty" } else { "clean" },
            self.ahead,
            self.behind
        )
    }
}

/// Resolves the status of the repository at `path`. Never fails: when the
/// branch or dirtiness query cannot run (not a repository, git unusable
/// there) the whole resolution degrades to [`RepoStatus::unknown`]. A
/// failing ahead/behind query only zeroes the counts; a branch without an
/// upstream is an expected case, not an error.
pub async fn resolve_status(git: &dyn GitRunner, path: &Path) -> RepoStatus {
    match try_resolve(git, path).await {
        Ok(status) => status,
        Err(_) => RepoStatus::unknown(),
    }
}

async fn try_resolve(git: &dyn GitRunner, path: &Path) -> Result<RepoStatus, CommandError> {
    let branch_output = git.run(path, GIT_BRANCH_SHOW_CURRENT_ARGS).await?;
    let branch = if branch_output.is_empty() {
        DETACHED_BRANCH.to_string()
    } else {
        branch_output
    };

    let dirty = !git.run(path, GIT_STATUS_PORCELAIN_ARGS).await?.is_empty();

    // Malformed count output gets the same fallback as a missing upstream
    let (ahead, behind) = match git.run(path, GIT_AHEAD_BEHIND_ARGS).await {
        Ok(output) => parse_ahead_behind(&output).unwrap_or((0, 0)),
        Err(_) => (0, 0),
    };

    Ok(RepoStatus {
        branch,
        dirty,
        ahead,
        behind,
    })
}

/// Parses `rev-list --left-right --count` output: two tab-separated counts,
/// local side first.
fn parse_ahead_behind(output: &str) -> Option<(u32, u32)> {
    let mut fields = output.split('\t');
    let ahead = fields.next()?.trim().parse().ok()?;
    let behind = fields.next()?.trim().parse().ok()?;
    Some((ahead, behind))
}
