//! Content extraction
//!
//! Reduces a fetched post page to plain-text paragraphs for the summarizer.
//! No length limit is applied here; input truncation for the model is the
//! summarizer's responsibility.

use crate::fetch::fetch_html;
use crate::FetchError;
use reqwest::Client;
use scraper::{Html, Selector};

/// Concatenates the text of every `<p>` element, newline-separated, in
/// document order. Paragraph text is trimmed; empty paragraphs are skipped.
pub fn extract_paragraphs(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut paragraphs = Vec::new();

    if let Ok(selector) = Selector::parse("p") {
        for element in document.select(&selector) {
            let text = element.text().collect::<String>().trim().to_string();
            if !text.is_empty() {
                paragraphs.push(text);
            }
        }
    }

    paragraphs.join("\n")
}

/// Fetches a post page and extracts its paragraph text
pub async fn extract(client: &Client, url: &str) -> Result<String, FetchError> {
    let body = fetch_html(client, url).await?;
    Ok(extract_paragraphs(&body))
}
