//! Configuration constants and settings

// Concurrency Configuration
//
// Git operations are I/O-bound and tolerate moderate concurrency; the cap
// keeps a large roster from opening dozens of remote connections at once.

// Default concurrency cap to prevent overwhelming remote hosts
pub const GIT_CONCURRENT_CAP: usize = 12;

/// Determines the concurrency limit for git operations based on CLI args and system resources
///
/// Priority order:
/// 1. --sequential flag → 1
/// 2. --jobs N flag → N
/// 3. Smart default → min(CPU_CORES + 2, 12)
pub fn get_git_concurrency(jobs: Option<usize>, sequential: bool) -> usize {
    // Check for sequential mode
    if sequential {
        return 1;
    }

    // Check explicit jobs flag
    if let Some(n) = jobs {
        return n.max(1); // Ensure at least 1
    }

    // Smart default: CPU cores + 2, capped at 12
    let cpu_count = num_cpus::get();
    (cpu_count + 2).min(GIT_CONCURRENT_CAP)
}

// Progress bar configuration
pub const DEFAULT_PROGRESS_BAR_LENGTH: u64 = 100;

// UI Constants
pub const NO_REPOS_MESSAGE: &str = "No git repositories found under the configured roots.";
pub const SCANNING_MESSAGE: &str = "🔍 Scanning for git repositories...";
pub const PROGRESS_CHARS: &str = "##-";
pub const PROGRESS_TEMPLATE: &str = "{prefix:.bold} {wide_msg}";

// Display formatting constants
pub const PATH_DISPLAY_WIDTH: usize = 30;
pub const ERROR_MESSAGE_MAX_LENGTH: usize = 40;
pub const ERROR_MESSAGE_TRUNCATE_LENGTH: usize = 37;

// Repository discovery configuration
pub const ESTIMATED_REPO_COUNT: usize = 50; // Pre-allocation hint for collections
