//! Discovery pipeline
//!
//! Combines the harvester, classifier, and URL cache into a bounded list of
//! unseen post URLs. Non-post candidates are committed to the cache the
//! moment they are classified, so they are never re-checked in a future
//! run. Discovered posts are NOT cached here: that happens only after
//! successful publication, so a post that fails downstream stays eligible
//! for retry on the next run.

use crate::cache::UrlCache;
use crate::discovery::classifier::{classify, Classification};
use crate::discovery::harvester::harvest;
use crate::Result;
use reqwest::Client;
use std::collections::HashSet;
use url::Url;

/// Discovers unseen blog posts across the configured homepages
///
/// Homepages are processed in configured order; candidates in document
/// order. The returned list preserves first-seen order with within-run
/// duplicates skipped, so `limit` truncation is deterministic. A homepage
/// that fails to fetch or parse is logged and skipped; a cache write
/// failure aborts discovery.
pub async fn discover(
    client: &Client,
    homepages: &[String],
    cache: &mut UrlCache,
    limit: Option<usize>,
) -> Result<Vec<String>> {
    let mut posts: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for homepage in homepages {
        if limit.is_some_and(|n| posts.len() >= n) {
            break;
        }

        let base = match Url::parse(homepage) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Skipping invalid homepage {}: {}", homepage, e);
                continue;
            }
        };

        let candidates = match harvest(client, &base).await {
            Ok(links) => links,
            Err(e) => {
                tracing::warn!("Failed to harvest {}: {}", homepage, e);
                continue;
            }
        };
        tracing::debug!("{}: {} candidate links", homepage, candidates.len());

        for candidate in candidates {
            if limit.is_some_and(|n| posts.len() >= n) {
                break;
            }

            // Already resolved in a prior run, or already seen in this one
            if cache.contains(&candidate) || seen.contains(&candidate) {
                continue;
            }

            match classify(client, &candidate).await {
                Classification::Post => {
                    seen.insert(candidate.clone());
                    posts.push(candidate);
                }
                Classification::NotPost | Classification::Indeterminate => {
                    // Commit immediately so the URL is never re-checked
                    cache.add(&candidate)?;
                }
            }
        }
    }

    if let Some(n) = limit {
        posts.truncate(n);
    }

    tracing::info!("Discovered {} new posts", posts.len());
    Ok(posts)
}
