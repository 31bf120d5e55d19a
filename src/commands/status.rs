//! Repository status listing command
//!
//! Runs a full discovery + status pass and prints one row per repository,
//! or the records as JSON for host-program consumption.

use anyhow::Result;
use std::io::Write;
use std::sync::Arc;

use crate::core::{
    get_git_concurrency, DiscoveryRoot, Registry, NO_REPOS_MESSAGE, SCANNING_MESSAGE,
};
use crate::git::SystemGit;

/// Handles the status listing command
pub async fn handle_status_command(roots: Vec<DiscoveryRoot>, json: bool) -> Result<()> {
    let registry = Registry::new(
        roots,
        Arc::new(SystemGit::new()),
        get_git_concurrency(None, false),
    );

    println!();
    print!("{SCANNING_MESSAGE}");
    let _ = std::io::stdout().flush();

    let records = registry.get_children().await;
    if records.is_empty() {
        println!("\r{NO_REPOS_MESSAGE}");
        return Ok(());
    }

    if json {
        println!("\r{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let total_repos = records.len();
    let repo_word = if total_repos == 1 {
        "repository"
    } else {
        "repositories"
    };
    print!("\r📋 {total_repos} {repo_word}                    \n");
    println!();

    let max_name_length = records.iter().map(|r| r.name.len()).max().unwrap_or(0);
    for record in &records {
        let description = record
            .status
            .as_ref()
            .map(|status| status.describe())
            .unwrap_or_default();
        println!(
            "  {:width$}  {}",
            record.name,
            description,
            width = max_name_length
        );
    }
    println!();

    Ok(())
}
