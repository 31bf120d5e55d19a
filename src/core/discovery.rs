//! Repository discovery across configured roots

use serde::Serialize;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::git::RepoStatus;

use super::config::ESTIMATED_REPO_COUNT;

const UNKNOWN_REPO_NAME: &str = "unknown";

/// How a configured root is interpreted during a discovery pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscoveryMode {
    /// Each immediate child directory that is a repository (default).
    Subfolders,
    /// The root itself, if it is a repository.
    WorkspaceRoot,
}

impl DiscoveryMode {
    /// Maps the settings value: `"workspace"` selects the root itself,
    /// anything else (including absence) selects subfolder scanning.
    pub fn from_setting(value: &str) -> Self {
        if value == "workspace" {
            DiscoveryMode::WorkspaceRoot
        } else {
            DiscoveryMode::Subfolders
        }
    }
}

/// One configured root directory plus its discovery mode.
#[derive(Clone, Debug)]
pub struct DiscoveryRoot {
    pub path: PathBuf,
    pub mode: DiscoveryMode,
}

/// A discovered repository. Records are rebuilt from scratch on every
/// discovery pass; within a pass the path is the identity.
#[derive(Clone, Debug, Serialize)]
pub struct RepoRecord {
    pub name: String,
    pub path: PathBuf,
    pub status: Option<RepoStatus>,
}

/// Check if a .git file (for submodules/worktrees) contains gitdir reference
/// Only reads the first 5 lines for efficiency
fn is_git_file(path: &Path) -> bool {
    match fs::File::open(path) {
        Ok(file) => {
            let reader = BufReader::new(file);
            reader
                .lines()
                .take(5)
                .filter_map(Result::ok)
                .any(|line| line.trim_start().starts_with("gitdir:"))
        }
        Err(_) => false,
    }
}

/// Whether `path` is a repository working directory: it carries a `.git`
/// directory, or a `.git` file pointing at one.
pub fn is_repository(path: &Path) -> bool {
    let marker = path.join(".git");
    match fs::metadata(&marker) {
        Ok(meta) => meta.is_dir() || is_git_file(&marker),
        Err(_) => false,
    }
}

/// Final path segment of a root, resolving relative spellings like `.` that
/// have no segment until canonicalized.
fn root_display_name(path: &Path) -> String {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        return name.to_string();
    }
    path.canonicalize()
        .ok()
        .and_then(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
        .unwrap_or_else(|| UNKNOWN_REPO_NAME.to_string())
}

/// Enumerates repositories under the given roots: records come out in
/// filesystem enumeration order, root by root, in the order roots were
/// given. Status is left unresolved; the registry fills it in during the
/// same pass. A missing or unreadable root contributes zero records and
/// never aborts the remaining roots.
pub fn discover_repos(roots: &[DiscoveryRoot]) -> Vec<RepoRecord> {
    let mut records = Vec::with_capacity(ESTIMATED_REPO_COUNT);

    for root in roots {
        match root.mode {
            DiscoveryMode::WorkspaceRoot => {
                if is_repository(&root.path) {
                    records.push(RepoRecord {
                        name: root_display_name(&root.path),
                        path: root.path.clone(),
                        status: None,
                    });
                }
            }
            DiscoveryMode::Subfolders => {
                let Ok(entries) = fs::read_dir(&root.path) else {
                    continue;
                };
                for entry in entries.flatten() {
                    let child = entry.path();
                    if child.is_dir() && is_repository(&child) {
                        records.push(RepoRecord {
                            name: entry.file_name().to_string_lossy().to_string(),
                            path: child,
                            status: None,
                        });
                    }
                }
            }
        }
    }

    records
}
