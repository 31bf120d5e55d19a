//! Batched fetch/pull across a repository snapshot

use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::sync::Arc;

use super::discovery::RepoRecord;
use super::registry::Registry;

// Git command arguments
const GIT_FETCH_ARGS: &[&str] = &["fetch", "--quiet"];
const GIT_PULL_ARGS: &[&str] = &["pull"];

/// Remote synchronization flavor for a batch run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncOperation {
    Fetch,
    Pull,
}

impl SyncOperation {
    pub(crate) fn args(self) -> &'static [&'static str] {
        match self {
            SyncOperation::Fetch => GIT_FETCH_ARGS,
            SyncOperation::Pull => GIT_PULL_ARGS,
        }
    }

    /// Gerund for progress lines
    pub fn in_progress(self) -> &'static str {
        match self {
            SyncOperation::Fetch => "Fetching",
            SyncOperation::Pull => "Pulling",
        }
    }

    /// Past tense for per-repository notices
    pub fn past_tense(self) -> &'static str {
        match self {
            SyncOperation::Fetch => "Fetched",
            SyncOperation::Pull => "Pulled",
        }
    }
}

/// Per-repository result of a batch operation.
#[derive(Clone, Debug, Serialize)]
pub struct SyncOutcome {
    pub repository: String,
    pub succeeded: bool,
    /// Captured diagnostic text, present iff the operation failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Runs `operation` against every record: one outcome per record, in input
/// order. A failing repository is captured in its outcome and never aborts
/// its siblings. `registry.refresh()` fires exactly once, after every
/// per-repository operation has completed, whatever the failure count.
pub async fn run_batch(
    registry: &Registry,
    records: &[RepoRecord],
    operation: SyncOperation,
    concurrency: usize,
) -> Vec<SyncOutcome> {
    run_batch_with(registry, records, operation, concurrency, |_, _| {}).await
}

/// Like [`run_batch`], invoking `on_outcome(index, outcome)` as each ordered
/// outcome becomes available, so callers can surface per-repository notices
/// while the batch is still running.
pub async fn run_batch_with<F>(
    registry: &Registry,
    records: &[RepoRecord],
    operation: SyncOperation,
    concurrency: usize,
    mut on_outcome: F,
) -> Vec<SyncOutcome>
where
    F: FnMut(usize, &SyncOutcome),
{
    let git = registry.git();

    // buffered() both bounds concurrency and yields in input order
    let mut results = stream::iter(records.iter().cloned().enumerate())
        .map(|(index, record)| {
            let git = Arc::clone(&git);
            async move {
                let outcome = match git.run(&record.path, operation.args()).await {
                    Ok(_) => SyncOutcome {
                        repository: record.name,
                        succeeded: true,
                        detail: None,
                    },
                    Err(err) => SyncOutcome {
                        repository: record.name,
                        succeeded: false,
                        detail: Some(err.detail()),
                    },
                };
                (index, outcome)
            }
        })
        .buffered(concurrency.max(1));

    let mut outcomes = Vec::with_capacity(records.len());
    while let Some((index, outcome)) = results.next().await {
        on_outcome(index, &outcome);
        outcomes.push(outcome);
    }

    registry.refresh();
    outcomes
}
