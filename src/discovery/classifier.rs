//! Post classifier
//!
//! Decides whether a candidate URL is a genuine article page. The check is
//! expensive: past the path filter it performs a live fetch, so the
//! discovery pipeline takes care to classify each unique URL at most once
//! per run.

use crate::fetch::fetch_html;
use crate::FetchError;
use reqwest::Client;
use scraper::{Html, Selector};

/// Outcome of classifying a candidate URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Confirmed article page
    Post,

    /// Confirmed not an article (path filter or page content)
    NotPost,

    /// The confirming fetch failed; article status could not be determined.
    /// Callers treat this like NotPost (fail-closed) but the distinction is
    /// kept visible for logging and tests.
    Indeterminate,
}

impl Classification {
    pub fn is_post(&self) -> bool {
        matches!(self, Self::Post)
    }
}

/// Path-level filter, applied before any fetch
///
/// A URL can only be a post if it contains `/blog/` or `/posts/` and
/// contains neither `/category/` nor `/author/`.
pub fn has_post_path(url: &str) -> bool {
    (url.contains("/blog/") || url.contains("/posts/"))
        && !url.contains("/category/")
        && !url.contains("/author/")
}

/// Classifies a candidate URL, fetching the page to confirm
///
/// A URL is a post iff the path filter passes, the fetch succeeds, and the
/// page carries an `<article>` element or an `og:type=article` meta tag.
pub async fn classify(client: &Client, url: &str) -> Classification {
    if !has_post_path(url) {
        return Classification::NotPost;
    }

    tracing::debug!("Checking {}", url);
    match fetch_html(client, url).await {
        Ok(body) => {
            if page_is_article(&body) {
                Classification::Post
            } else {
                Classification::NotPost
            }
        }
        Err(e) if e.is_definitive() => Classification::NotPost,
        Err(e) => {
            tracing::warn!("Could not confirm {}: {}", url, e);
            Classification::Indeterminate
        }
    }
}

/// Checks the parsed page for article markers
fn page_is_article(html: &str) -> bool {
    let document = Html::parse_document(html);

    if let Ok(selector) = Selector::parse("article") {
        if document.select(&selector).next().is_some() {
            return true;
        }
    }

    if let Ok(selector) = Selector::parse(r#"meta[property="og:type"][content="article"]"#) {
        if document.select(&selector).next().is_some() {
            return true;
        }
    }

    false
}
