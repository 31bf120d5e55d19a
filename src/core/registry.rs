//! Registry of discovered repositories and the change-notification bus

use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tokio::sync::watch;

use crate::git::{resolve_status, GitRunner};

use super::discovery::{discover_repos, DiscoveryRoot, RepoRecord};

/// Holds the configured roots and produces fresh repository snapshots on
/// demand.
///
/// Change notification is a watch channel carrying a generation counter:
/// `refresh()` bumps it, subscribers observe the bump and re-request
/// `get_children()`. The channel keeps at most one pending notification,
/// which is all a single re-rendering consumer needs. The registry never
/// caches a pass; every snapshot is authoritative and replaces the previous
/// one wholesale.
pub struct Registry {
    roots: Vec<DiscoveryRoot>,
    git: Arc<dyn GitRunner>,
    status_concurrency: usize,
    changed_tx: watch::Sender<u64>,
}

impl Registry {
    pub fn new(
        roots: Vec<DiscoveryRoot>,
        git: Arc<dyn GitRunner>,
        status_concurrency: usize,
    ) -> Self {
        let (changed_tx, _) = watch::channel(0);
        Self {
            roots,
            git,
            status_concurrency: status_concurrency.max(1),
            changed_tx,
        }
    }

    /// Hands out a receiver that observes every `refresh()` bump.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changed_tx.subscribe()
    }

    /// The runner shared with batch operations.
    pub fn git(&self) -> Arc<dyn GitRunner> {
        Arc::clone(&self.git)
    }

    /// Runs a full discovery pass and eagerly resolves every record's
    /// status. Resolution is bounded-concurrent but order-preserving, so
    /// the returned list keeps filesystem enumeration order.
    pub async fn get_children(&self) -> Vec<RepoRecord> {
        let roots = self.roots.clone();
        let records = tokio::task::spawn_blocking(move || discover_repos(&roots))
            .await
            .unwrap_or_else(|e| {
                eprintln!("Error in repository discovery: {e}");
                Vec::new()
            });

        let git = self.git();
        stream::iter(records)
            .map(|record| {
                let git = Arc::clone(&git);
                async move {
                    let status = resolve_status(git.as_ref(), &record.path).await;
                    RepoRecord {
                        status: Some(status),
                        ..record
                    }
                }
            })
            .buffered(self.status_concurrency)
            .collect()
            .await
    }

    /// Signals subscribers that the last snapshot is stale. Performs no
    /// recomputation itself; consumers re-request `get_children()`.
    pub fn refresh(&self) {
        self.changed_tx.send_modify(|generation| *generation += 1);
    }

    /// Number of refresh notifications emitted so far.
    pub fn generation(&self) -> u64 {
        *self.changed_tx.borrow()
    }
}
