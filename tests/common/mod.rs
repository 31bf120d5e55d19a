//! Common test utilities and helpers
#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod git;

pub use self::fixtures::{TestRepo, TestRepoBuilder};
pub use self::git::{
    add_git_remote, clone_repo, create_multiple_repos, create_test_commit, detach_head,
    is_git_available, setup_git_repo,
};
