//! Run orchestrator
//!
//! Owns the collaborators and sequences the pipeline for one run. Per-post
//! failures are logged and skipped; the run continues with the next post.
//! Cache write failures abort the run, since durable dedup tracking is the
//! system's core safety property.

use crate::cache::UrlCache;
use crate::config::Config;
use crate::discovery::discover;
use crate::extract::extract;
use crate::pipeline::PostState;
use crate::publish::{document_filename, Publisher, ResultsTable};
use crate::summarize::Summarizer;
use crate::Result;
use reqwest::Client;
use std::path::Path;

/// Counts reported at the end of a run
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    /// Posts discovered this run (after cache filtering and limit)
    pub discovered: usize,

    /// Posts published and committed to the cache
    pub published: usize,

    /// Posts that failed a step and will be retried next run
    pub failed: usize,
}

/// Sequences discovery and per-post processing for one run
pub struct Orchestrator<S, P> {
    config: Config,
    client: Client,
    summarizer: S,
    publisher: P,
}

impl<S: Summarizer, P: Publisher> Orchestrator<S, P> {
    pub fn new(config: Config, client: Client, summarizer: S, publisher: P) -> Self {
        Self {
            config,
            client,
            summarizer,
            publisher,
        }
    }

    /// Runs the full pipeline once
    ///
    /// `limit_override` takes precedence over the configured max-posts.
    pub async fn run(&self, limit_override: Option<usize>) -> Result<RunSummary> {
        let mut cache = UrlCache::load(Path::new(&self.config.run.cache_path))?;
        tracing::info!("Loaded {} cached URLs", cache.len());

        let limit = limit_override.or(self.config.run.max_posts);
        let homepages: Vec<String> = self
            .config
            .targets
            .iter()
            .map(|target| target.homepage.clone())
            .collect();

        let posts = discover(&self.client, &homepages, &mut cache, limit).await?;
        tracing::info!("Found {} blog posts to summarize", posts.len());

        let results_path = Path::new(&self.config.run.results_path);
        let table = ResultsTable::create(results_path)?;

        let mut summary = RunSummary {
            discovered: posts.len(),
            ..Default::default()
        };

        for url in &posts {
            match self.process_post(url, &table).await {
                Ok(()) => {
                    // Publication succeeded; only now is the URL fully
                    // handled. A crash before this line re-publishes the
                    // post next run rather than losing it.
                    cache.add(url)?;
                    summary.published += 1;
                    tracing::info!(state = %PostState::Cached, "Summarized and published {}", url);
                }
                Err(e) => {
                    summary.failed += 1;
                    tracing::error!(state = %PostState::Failed, "Failed to process {}: {}", url, e);
                }
            }
        }

        // Best effort: the per-post documents are already durable. The
        // artifact is named after the configured results file.
        let table_name = results_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("results.csv");
        match self
            .publisher
            .publish_table(table_name, &table.contents()?)
            .await
        {
            Ok(id) => tracing::info!("Uploaded results table ({})", id),
            Err(e) => tracing::warn!("Failed to upload results table: {}", e),
        }

        tracing::info!(
            "Run complete: {} published, {} failed of {} discovered",
            summary.published,
            summary.failed,
            summary.discovered
        );
        Ok(summary)
    }

    /// Processes one discovered post through extract, summarize, publish
    async fn process_post(&self, url: &str, table: &ResultsTable) -> Result<()> {
        tracing::info!(state = %PostState::Discovered, "Summarizing {}", url);

        let content = extract(&self.client, url).await?;
        tracing::debug!(state = %PostState::Extracted, chars = content.len(), "Extracted {}", url);

        let record = self.summarizer.summarize(&content).await?;
        tracing::debug!(state = %PostState::Summarized, title = %record.title, "Summarized {}", url);

        let filename = document_filename(url);
        let doc = self.publisher.publish_document(&filename, &record.body).await?;
        tracing::debug!(state = %PostState::Published, id = %doc.id, "Published {}", url);

        table.append_row(&record, url, &doc.link)?;
        Ok(())
    }
}
