//! Progress bar management and processing context structures

use anyhow::Result;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Instant;

use super::config::{DEFAULT_PROGRESS_BAR_LENGTH, PROGRESS_CHARS, PROGRESS_TEMPLATE};
use super::discovery::RepoRecord;
use super::stats::BatchStatistics;

/// Processing context that groups the shared state a batch run needs:
/// the record snapshot, progress rendering and statistics.
pub struct ProcessingContext {
    /// Records being processed, in discovery order
    pub records: Vec<RepoRecord>,
    /// Maximum length of repository names for formatting alignment
    pub max_name_length: usize,
    /// Multi-progress instance for managing multiple concurrent progress bars
    pub multi_progress: MultiProgress,
    /// Styled progress bar configuration
    pub progress_style: ProgressStyle,
    /// Thread-safe statistics tracking for operation results
    pub statistics: Arc<BatchStatistics>,
    /// Total number of repositories being processed
    pub total_repos: usize,
    /// Start time for duration calculations
    pub start_time: Instant,
}

/// Creates a ProcessingContext from a record snapshot and start time
pub fn create_processing_context(
    records: Vec<RepoRecord>,
    start_time: Instant,
) -> Result<ProcessingContext> {
    let total_repos = records.len();
    let max_name_length = records.iter().map(|r| r.name.len()).max().unwrap_or(0);
    let multi_progress = MultiProgress::new();
    let progress_style = create_progress_style()?;
    let statistics = Arc::new(BatchStatistics::new());

    Ok(ProcessingContext {
        records,
        max_name_length,
        multi_progress,
        progress_style,
        statistics,
        total_repos,
        start_time,
    })
}

/// Creates and configures a progress bar for a repository
pub(crate) fn create_progress_bar(
    multi: &MultiProgress,
    style: &ProgressStyle,
    repo_name: &str,
) -> ProgressBar {
    let pb = multi.add(ProgressBar::new(DEFAULT_PROGRESS_BAR_LENGTH));
    pb.set_style(style.clone());
    pb.set_prefix(format!("🟡 {}", repo_name));
    pb.set_message("waiting...");
    pb
}

/// Creates a progress bar style configuration
pub(crate) fn create_progress_style() -> Result<ProgressStyle> {
    Ok(ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)?
        .progress_chars(PROGRESS_CHARS))
}

/// Creates a separator progress bar for visual spacing between sections
pub(crate) fn create_separator_progress_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let separator_pb = multi_progress.add(ProgressBar::new(0));
    separator_pb.set_style(
        ProgressStyle::default_bar()
            .template(" ")
            .expect("Failed to create separator progress bar template - this indicates an invalid template string"),
    );
    separator_pb.finish();
    separator_pb
}

/// Creates a footer progress bar for displaying summary information
pub(crate) fn create_footer_progress_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let footer_pb = multi_progress.add(ProgressBar::new(0));
    let footer_style = ProgressStyle::default_bar()
        .template("{wide_msg}")
        .expect("Failed to create footer progress style - this indicates an invalid template string in the progress bar configuration");
    footer_pb.set_style(footer_style);
    footer_pb
}
