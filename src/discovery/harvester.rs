//! Link harvester for blog homepages

use crate::fetch::fetch_html;
use crate::FetchError;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

/// Extracts candidate post links from homepage HTML
///
/// Keeps every `<a href>` whose raw href contains the substring `blog`, in
/// document order, resolved to an absolute URL against `base`. Duplicates
/// are kept at this stage; the discovery pipeline dedups across homepages.
pub fn harvest_links(html: &str, base: &Url) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                // The filter runs on the raw href, before resolution
                if !href.contains("blog") {
                    continue;
                }
                if let Some(absolute_url) = resolve_link(href, base) {
                    links.push(absolute_url);
                }
            }
        }
    }

    links
}

/// Resolves a candidate href to an absolute HTTP(S) URL
///
/// Returns None for empty hrefs, fragment-only anchors, non-HTTP schemes
/// after resolution, and hrefs that fail to resolve.
fn resolve_link(href: &str, base: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    match base.join(href) {
        Ok(absolute_url) => {
            if absolute_url.scheme() == "http" || absolute_url.scheme() == "https" {
                Some(absolute_url.to_string())
            } else {
                None
            }
        }
        Err(_) => None,
    }
}

/// Fetches a homepage and harvests its candidate links
///
/// A failing homepage surfaces as an error here; the discovery pipeline
/// logs it and continues with the remaining homepages.
pub async fn harvest(client: &Client, homepage: &Url) -> Result<Vec<String>, FetchError> {
    let body = fetch_html(client, homepage.as_str()).await?;
    Ok(harvest_links(&body, homepage))
}
