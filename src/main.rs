//! roster: status overview and batch fetch/pull for a roster of git repositories
//!
//! Scans the configured root directories for repositories, summarizes each
//! one (branch, dirtiness, ahead/behind upstream), and runs fetch or pull
//! across all of them with per-repository failure isolation.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use repo_roster::commands::{handle_fetch_command, handle_pull_command, handle_status_command};
use repo_roster::core::{DiscoveryMode, DiscoveryRoot, Settings};

#[derive(Parser)]
#[command(name = "roster", version, about = "Multi-repository status overview and batch fetch/pull")]
struct Cli {
    /// Path to the settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Root directory to scan (repeatable; overrides the settings file)
    #[arg(long, global = true)]
    root: Vec<PathBuf>,

    /// Discovery mode for --root directories: "subfolders" scans one level
    /// of child directories, "workspace" treats each root itself as the
    /// candidate repository
    #[arg(long, global = true, default_value = "subfolders")]
    mode: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List discovered repositories with branch, dirtiness and ahead/behind
    Status {
        /// Emit records as JSON instead of the table
        #[arg(long)]
        json: bool,
    },
    /// Fetch from the default remote in every repository
    Fetch(SyncArgs),
    /// Pull from the default remote in every repository
    Pull(SyncArgs),
}

#[derive(Args)]
struct SyncArgs {
    /// Number of concurrent git operations
    #[arg(long)]
    jobs: Option<usize>,

    /// Process repositories one at a time
    #[arg(long)]
    sequential: bool,

    /// Per-repository progress rows instead of plain notices
    #[arg(short, long)]
    verbose: bool,

    /// Emit outcomes as JSON
    #[arg(long)]
    json: bool,
}

/// The roots for this invocation: explicit --root flags win, otherwise the
/// settings file (with its current-directory fallback) decides.
fn resolve_roots(cli: &Cli) -> Result<Vec<DiscoveryRoot>> {
    if !cli.root.is_empty() {
        let mode = DiscoveryMode::from_setting(&cli.mode);
        return Ok(cli
            .root
            .iter()
            .map(|path| DiscoveryRoot {
                path: path.clone(),
                mode,
            })
            .collect());
    }

    let settings = Settings::load(cli.config.clone())?;
    Ok(settings.discovery_roots())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let roots = resolve_roots(&cli)?;

    match cli.command {
        Commands::Status { json } => handle_status_command(roots, json).await,
        Commands::Fetch(args) => {
            handle_fetch_command(roots, args.jobs, args.sequential, args.verbose, args.json).await
        }
        Commands::Pull(args) => {
            handle_pull_command(roots, args.jobs, args.sequential, args.verbose, args.json).await
        }
    }
}
