//! Test fixtures and builders

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::git::{add_git_remote, create_test_commit, setup_git_repo};

/// A test repository with automatic cleanup
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub name: String,
}

impl TestRepo {
    /// Get the path to the repository
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a new file in the repository without committing it
    pub fn create_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let file_path = self.path().join(name);
        std::fs::write(&file_path, content)?;
        Ok(file_path)
    }

    /// Commit all changes in the repository
    pub fn commit_all(&self, message: &str) -> Result<()> {
        use std::process::Command;

        Command::new("git")
            .args(["add", "."])
            .current_dir(self.path())
            .output()?;

        let result = Command::new("git")
            .args(["commit", "-m", message])
            .current_dir(self.path())
            .output()?;

        if !result.status.success() {
            anyhow::bail!(
                "Failed to commit: {}",
                String::from_utf8_lossy(&result.stderr)
            );
        }

        Ok(())
    }

    /// Switch to a new branch
    pub fn checkout_new_branch(&self, name: &str) -> Result<()> {
        use std::process::Command;

        let result = Command::new("git")
            .args(["checkout", "-b", name])
            .current_dir(self.path())
            .output()?;

        if !result.status.success() {
            anyhow::bail!(
                "Failed to create branch: {}",
                String::from_utf8_lossy(&result.stderr)
            );
        }

        Ok(())
    }
}

/// Builder for creating test repositories
pub struct TestRepoBuilder {
    name: String,
    with_remote: Option<String>,
    with_commits: usize,
}

impl TestRepoBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            with_remote: None,
            with_commits: 1,
        }
    }

    #[allow(dead_code)]
    pub fn with_remote(mut self, url: impl Into<String>) -> Self {
        self.with_remote = Some(url.into());
        self
    }

    #[allow(dead_code)]
    pub fn with_commits(mut self, count: usize) -> Self {
        self.with_commits = count;
        self
    }

    pub fn build(self) -> Result<TestRepo> {
        let temp_dir = TempDir::new()?;
        setup_git_repo(temp_dir.path())?;

        // Create initial commit
        create_test_commit(
            temp_dir.path(),
            "README.md",
            "# Test Repo",
            "Initial commit",
        )?;

        // Add remote if specified
        if let Some(remote_url) = self.with_remote {
            add_git_remote(temp_dir.path(), "origin", &remote_url)?;
        }

        let repo = TestRepo {
            temp_dir,
            name: self.name,
        };

        // Create additional commits if specified
        for i in 2..=self.with_commits {
            create_test_commit(
                repo.path(),
                &format!("file{}.txt", i),
                &format!("Content {}", i),
                &format!("Commit {}", i),
            )?;
        }

        Ok(repo)
    }
}
