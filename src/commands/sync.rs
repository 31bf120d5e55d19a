//! Batch fetch and pull commands
//!
//! Discovers the current roster, runs the requested remote operation
//! against every repository with per-repository outcome isolation, reports
//! one notice per repository, and re-renders the roster once the batch's
//! completion refresh arrives.

use anyhow::Result;
use indicatif::ProgressBar;
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

use crate::core::{
    create_footer_progress_bar, create_processing_context, create_progress_bar,
    create_separator_progress_bar, get_git_concurrency, run_batch_with, DiscoveryRoot, Registry,
    SyncOperation, NO_REPOS_MESSAGE, SCANNING_MESSAGE,
};
use crate::git::SystemGit;
use crate::utils::{set_terminal_title, set_terminal_title_and_flush};

/// Handles the batch fetch command
pub async fn handle_fetch_command(
    roots: Vec<DiscoveryRoot>,
    jobs: Option<usize>,
    sequential: bool,
    verbose: bool,
    json: bool,
) -> Result<()> {
    run_sync_command(roots, SyncOperation::Fetch, jobs, sequential, verbose, json).await
}

/// Handles the batch pull command
pub async fn handle_pull_command(
    roots: Vec<DiscoveryRoot>,
    jobs: Option<usize>,
    sequential: bool,
    verbose: bool,
    json: bool,
) -> Result<()> {
    run_sync_command(roots, SyncOperation::Pull, jobs, sequential, verbose, json).await
}

async fn run_sync_command(
    roots: Vec<DiscoveryRoot>,
    operation: SyncOperation,
    jobs: Option<usize>,
    sequential: bool,
    verbose: bool,
    json: bool,
) -> Result<()> {
    set_terminal_title("🔄 roster");

    println!();
    print!("{SCANNING_MESSAGE}");
    let _ = std::io::stdout().flush();

    let start_time = Instant::now();
    let concurrency = get_git_concurrency(jobs, sequential);
    let registry = Registry::new(roots, Arc::new(SystemGit::new()), concurrency);
    // Subscribe before the batch so its completion refresh is observable
    let mut changed = registry.subscribe();

    let records = registry.get_children().await;
    if records.is_empty() {
        println!("\r{NO_REPOS_MESSAGE}");
        set_terminal_title_and_flush("✅ roster");
        return Ok(());
    }

    let total_repos = records.len();
    let repo_word = if total_repos == 1 {
        "repository"
    } else {
        "repositories"
    };
    print!(
        "\r🔄 {} {} {}                    \n",
        operation.in_progress(),
        total_repos,
        repo_word
    );
    println!();

    let context = match create_processing_context(records, start_time) {
        Ok(context) => context,
        Err(e) => {
            set_terminal_title_and_flush("✅ roster");
            return Err(e);
        }
    };

    let repo_progress_bars: Vec<Option<ProgressBar>> = if verbose {
        context
            .records
            .iter()
            .map(|record| {
                let pb = create_progress_bar(
                    &context.multi_progress,
                    &context.progress_style,
                    &record.name,
                );
                pb.set_message(format!("{}...", operation.in_progress().to_lowercase()));
                Some(pb)
            })
            .collect()
    } else {
        vec![None; context.records.len()]
    };

    let footer_pb = if verbose {
        let _separator_pb = create_separator_progress_bar(&context.multi_progress);
        let footer_pb = create_footer_progress_bar(&context.multi_progress);
        footer_pb.set_message(format!("🔄 0 {}  🔴 0 Failed", operation.past_tense()));
        Some(footer_pb)
    } else {
        None
    };

    let statistics = Arc::clone(&context.statistics);
    let verb = operation.past_tense().to_lowercase();
    let max_name_length = context.max_name_length;

    let outcomes = run_batch_with(
        &registry,
        &context.records,
        operation,
        concurrency,
        |index, outcome| {
            let record = &context.records[index];
            statistics.update(outcome, &record.path.to_string_lossy());

            if let Some(progress_bar) = repo_progress_bars[index].as_ref() {
                if outcome.succeeded {
                    progress_bar.set_prefix(format!(
                        "🟢 {:width$}",
                        outcome.repository,
                        width = max_name_length
                    ));
                    progress_bar.set_message(verb.clone());
                } else {
                    progress_bar.set_prefix(format!(
                        "🔴 {:width$}",
                        outcome.repository,
                        width = max_name_length
                    ));
                    progress_bar.set_message(
                        outcome.detail.clone().unwrap_or_else(|| "failed".to_string()),
                    );
                }
                progress_bar.finish();
            } else if !json {
                // One notice per repository, as the batch progresses
                if outcome.succeeded {
                    println!("✅ {} {}", operation.past_tense(), outcome.repository);
                } else {
                    println!(
                        "❌ {}: {}",
                        outcome.repository,
                        outcome.detail.as_deref().unwrap_or("failed")
                    );
                }
            }

            if let Some(footer) = footer_pb.as_ref() {
                footer.set_message(statistics.generate_summary(&verb, start_time.elapsed()));
            }
        },
    )
    .await;

    if let Some(footer_pb) = footer_pb {
        footer_pb.finish();
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        let duration = context.start_time.elapsed();
        println!("\n{}", statistics.generate_summary(&verb, duration));

        let detailed_summary = statistics.generate_detailed_summary();
        if !detailed_summary.is_empty() {
            println!("\n{}", "━".repeat(70));
            println!("{detailed_summary}");
            println!("{}", "━".repeat(70));
        }

        // Play the host's part: the completion refresh invalidated the
        // snapshot, so re-request it and show the refreshed roster.
        if changed.changed().await.is_ok() {
            let refreshed = registry.get_children().await;
            if !refreshed.is_empty() {
                println!();
                let width = refreshed.iter().map(|r| r.name.len()).max().unwrap_or(0);
                for record in &refreshed {
                    let description = record
                        .status
                        .as_ref()
                        .map(|status| status.describe())
                        .unwrap_or_default();
                    println!("  {:width$}  {}", record.name, description);
                }
            }
        }
    }
    println!();

    set_terminal_title_and_flush("✅ roster");

    Ok(())
}
