//! Postpress main entry point
//!
//! Command-line interface for the blog discovery and summarization pipeline.

use anyhow::Context;
use clap::Parser;
use postpress::config::load_config;
use postpress::fetch::build_http_client;
use postpress::pipeline::Orchestrator;
use postpress::publish::DrivePublisher;
use postpress::summarize::OpenAiSummarizer;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Postpress: discover and summarize corporate blog posts
///
/// Postpress crawls configured blog homepages for unseen posts, summarizes
/// each with an OpenAI completion, publishes the summaries to Google Drive,
/// and records processed URLs so re-runs never repeat work.
#[derive(Parser, Debug)]
#[command(name = "postpress")]
#[command(version = "1.0.0")]
#[command(about = "Discover and summarize corporate blog posts", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Override the configured per-run post limit
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// Validate config and show what would be processed without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config, cli.limit);
        return Ok(());
    }

    // Build collaborators around one shared HTTP client
    let client = build_http_client(&config.user_agent).context("failed to build HTTP client")?;
    let summarizer =
        OpenAiSummarizer::new(client.clone(), &config.openai, config.run.max_input_chars);
    let publisher = DrivePublisher::new(client.clone(), &config.google);

    let orchestrator = Orchestrator::new(config, client, summarizer, publisher);
    let summary = orchestrator.run(cli.limit).await?;

    if summary.failed > 0 {
        tracing::warn!(
            "{} posts failed and will be retried on the next run",
            summary.failed
        );
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("postpress=info,warn"),
            1 => EnvFilter::new("postpress=debug,info"),
            2 => EnvFilter::new("postpress=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would run
fn handle_dry_run(config: &postpress::config::Config, limit_override: Option<usize>) {
    println!("=== Postpress Dry Run ===\n");

    println!("Run:");
    println!("  Cache file: {}", config.run.cache_path);
    println!("  Results file: {}", config.run.results_path);
    match limit_override.or(config.run.max_posts) {
        Some(limit) => println!("  Max posts per run: {}", limit),
        None => println!("  Max posts per run: unlimited"),
    }
    println!("  Max input chars: {}", config.run.max_input_chars);

    println!("\nSummarizer:");
    println!("  Model: {}", config.openai.model);

    println!("\nPublisher:");
    println!("  Drive folder: {}", config.google.folder_id);

    println!("\nTargets ({}):", config.targets.len());
    for target in &config.targets {
        println!("  - {}", target.homepage);
    }

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would harvest {} homepages for new posts",
        config.targets.len()
    );
}
