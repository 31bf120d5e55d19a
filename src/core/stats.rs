//! Statistics tracking for batch operations

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::utils::shorten_path;

use super::config::{
    ERROR_MESSAGE_MAX_LENGTH, ERROR_MESSAGE_TRUNCATE_LENGTH, PATH_DISPLAY_WIDTH,
};
use super::sync::SyncOutcome;

/// Statistics for a batch fetch/pull run.
///
/// Counters are atomic so concurrent per-repository futures update them
/// lock-free; the failure list stays behind a mutex.
#[derive(Debug, Default)]
pub struct BatchStatistics {
    pub succeeded: AtomicU64,
    pub failed: AtomicU64,
    pub failures: Mutex<Vec<(String, String, String)>>, // (repo_name, repo_path, error_detail)
}

impl BatchStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one repository's outcome.
    pub fn update(&self, outcome: &SyncOutcome, repo_path: &str) {
        if outcome.succeeded {
            self.succeeded.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failed.fetch_add(1, Ordering::Relaxed);
            let detail = outcome.detail.clone().unwrap_or_default();
            if let Ok(mut guard) = self.failures.lock() {
                guard.push((outcome.repository.clone(), repo_path.to_string(), detail));
            } else {
                eprintln!(
                    "Warning: Failed to record failure for: {}",
                    outcome.repository
                );
            }
        }
    }

    /// One-line summary for the footer: `✅ Completed in 3.2s • 12 fetched • 1 failed`
    pub fn generate_summary(&self, verb: &str, duration: Duration) -> String {
        let duration_secs = duration.as_secs_f64();
        let succeeded = self.succeeded.load(Ordering::Relaxed);
        let failed = self.failed.load(Ordering::Relaxed);

        if failed > 0 {
            format!(
                "✅ Completed in {:.1}s • {} {} • {} failed",
                duration_secs, succeeded, verb, failed
            )
        } else {
            format!(
                "✅ Completed in {:.1}s • {} {}",
                duration_secs, succeeded, verb
            )
        }
    }

    /// Detailed failure listing for the end of a run; empty when every
    /// repository succeeded.
    pub fn generate_detailed_summary(&self) -> String {
        let failures = match self.failures.lock() {
            Ok(guard) => guard.clone(),
            Err(_) => return String::new(),
        };
        if failures.is_empty() {
            return String::new();
        }

        let mut lines = Vec::new();
        lines.push(format!("🔴 FAILED REPOS ({})", failures.len()));
        for (i, (repo_name, repo_path, detail)) in failures.iter().enumerate() {
            let tree_char = if i == failures.len() - 1 {
                "└─"
            } else {
                "├─"
            };
            let short_path = shorten_path(repo_path, PATH_DISPLAY_WIDTH);
            lines.push(format!(
                "   {} {:20} {:30} # {}",
                tree_char,
                repo_name,
                short_path,
                clean_error_message(detail)
            ));
        }
        lines.join("\n")
    }
}

/// Cleans and formats error messages for display
pub(crate) fn clean_error_message(error: &str) -> String {
    // Replace newlines/tabs with spaces and collapse whitespace
    let cleaned = error.replace('\n', " ").replace('\r', "").replace('\t', " ");
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    // Extract key error patterns
    if cleaned.contains("timed out") {
        "timeout".to_string()
    } else if cleaned.contains("authentication") || cleaned.contains("Permission denied") {
        "authentication failed".to_string()
    } else if cleaned.contains("conflict") || cleaned.contains("diverged") {
        "merge conflict".to_string()
    } else if cleaned.contains("Connection") || cleaned.contains("network") {
        "network error".to_string()
    } else if cleaned.contains("No remote repository") || cleaned.contains("no remote") {
        "no remote configured".to_string()
    } else if cleaned.len() > ERROR_MESSAGE_MAX_LENGTH {
        format!("{}...", &cleaned[..ERROR_MESSAGE_TRUNCATE_LENGTH])
    } else {
        cleaned
    }
}
