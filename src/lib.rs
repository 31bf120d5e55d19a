//! # repo-roster
//!
//! `repo-roster` is a library for discovering git repositories under
//! configured root directories and batch-synchronizing them. It powers the
//! `roster` CLI tool.
//!
//! ## Core Features
//!
//! - **Discovery**: one-level scanning of configured roots (or the roots
//!   themselves) for repository working directories.
//! - **Status snapshots**: branch, dirtiness and ahead/behind counts per
//!   repository, resolved defensively — a broken repository degrades to a
//!   sentinel status instead of failing the pass.
//! - **Batch synchronization**: fetch or pull across the whole roster with
//!   per-repository outcome isolation and a single completion refresh.
//!
//! ## Example
//!
//! ```rust,no_run
//! use repo_roster::core::{DiscoveryMode, DiscoveryRoot, Registry};
//! use repo_roster::git::SystemGit;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let roots = vec![DiscoveryRoot {
//!         path: "/home/me/src".into(),
//!         mode: DiscoveryMode::Subfolders,
//!     }];
//!     let registry = Registry::new(roots, Arc::new(SystemGit::new()), 8);
//!     for record in registry.get_children().await {
//!         println!("{}: {}", record.name, record.path.display());
//!     }
//! }
//! ```

pub mod commands;
pub mod core;
pub mod git;
pub mod utils;
