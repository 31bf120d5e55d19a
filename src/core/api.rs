//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality:
//! - Repository discovery across configured roots
//! - The registry / change-notification bus
//! - Batch fetch and pull with per-repository outcomes
//! - Settings and concurrency configuration
//!
//! Internal implementation details are not exposed through this API.

// Discovery
pub use super::discovery::{
    discover_repos, is_repository, DiscoveryMode, DiscoveryRoot, RepoRecord,
};

// Registry and batch synchronization
pub use super::registry::Registry;
pub use super::sync::{run_batch, run_batch_with, SyncOperation, SyncOutcome};

// Settings
pub use super::settings::{default_settings_path, RootSetting, Settings};

// Statistics and processing context
pub use super::progress::{create_processing_context, ProcessingContext};
pub use super::stats::BatchStatistics;

// Configuration
pub use super::config::{get_git_concurrency, GIT_CONCURRENT_CAP};

// User-facing messages
pub use super::config::{NO_REPOS_MESSAGE, SCANNING_MESSAGE};

// Internal helpers for command modules
pub(crate) use super::progress::{
    create_footer_progress_bar, create_progress_bar, create_separator_progress_bar,
};
