//! Summarization collaborator
//!
//! Turns extracted article text into a structured [`SummaryRecord`] via an
//! OpenAI text completion. The model is asked to prefix its summary with a
//! JSON metadata block between `BEGINATTRIBUTES` and `ENDATTRIBUTES`
//! markers; responses without a well-formed block fall back to placeholder
//! metadata with the raw response as body, so a malformed completion never
//! fails the run.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::OpenAiConfig;

/// Literal marker opening the metadata block in a completion
pub const BEGIN_ATTRIBUTES: &str = "BEGINATTRIBUTES";

/// Literal marker closing the metadata block in a completion
pub const END_ATTRIBUTES: &str = "ENDATTRIBUTES";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const PROMPT_INTRO: &str = r#"Please read the text provided and generate a concise summary. Begin the summary with the article's title. Follow this with the identification of three main points or subheadings found within the text. For each main point, create a DALL-E image prompt that encapsulates the essence of the point. Also, list five key takeaways from each main point. Ensure the entire summary, including title, points, DALL-E prompts, and takeaways, does not exceed 500 words.

Immediately before the summary, include metadata attributes in JSON format, enclosed between "BEGINATTRIBUTES" and "ENDATTRIBUTES". The attributes to include are "Title", "Industry", and "Keywords", with the keywords separated by commas. Here is the format to follow:

BEGINATTRIBUTES{"Title": "The given title of the article", "Industry": "The relevant industry", "Keywords": "keyword1, keyword2, keyword3"}ENDATTRIBUTES

Your response should be well-structured, with clear separation between sections. Please use concise language and focus on delivering insightful takeaways from the article.

Original text for summary:
"#;

/// Errors from the completion service
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Completion API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Completion response contained no choices")]
    EmptyResponse,
}

/// Structured summary of a single post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRecord {
    pub title: String,
    pub industry: String,
    pub keywords: Vec<String>,
    pub body: String,
}

/// Collaborator boundary: turns article text into a structured summary
#[async_trait]
pub trait Summarizer {
    async fn summarize(&self, content: &str) -> Result<SummaryRecord, SummarizeError>;
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: String,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

#[derive(Debug, Deserialize)]
struct AttributeBlock {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Industry")]
    industry: String,
    #[serde(rename = "Keywords")]
    keywords: String,
}

/// Summarizer backed by the OpenAI legacy completions endpoint
pub struct OpenAiSummarizer {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    max_input_chars: usize,
}

impl OpenAiSummarizer {
    pub fn new(client: Client, config: &OpenAiConfig, max_input_chars: usize) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: config.model.clone(),
            max_input_chars,
        }
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, content: &str) -> Result<SummaryRecord, SummarizeError> {
        // Truncate before prompting; the instruction text and the model's
        // output need headroom under the token ceiling.
        let truncated = truncate_chars(content, self.max_input_chars);
        if truncated.len() < content.len() {
            tracing::debug!(
                "Truncated article text from {} to {} chars",
                content.chars().count(),
                self.max_input_chars
            );
        }

        let request = CompletionRequest {
            model: &self.model,
            prompt: format!("{}{}", PROMPT_INTRO, truncated),
            max_tokens: 1024,
            temperature: 0.5,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        };

        let response = self
            .client
            .post(format!("{}/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SummarizeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: CompletionResponse = response.json().await?;
        let text = completion
            .choices
            .first()
            .ok_or(SummarizeError::EmptyResponse)?
            .text
            .trim()
            .to_string();

        Ok(parse_completion(&text))
    }
}

/// Truncates to at most `limit` characters, on a char boundary
pub fn truncate_chars(content: &str, limit: usize) -> &str {
    match content.char_indices().nth(limit) {
        Some((index, _)) => &content[..index],
        None => content,
    }
}

/// Parses a completion into a [`SummaryRecord`]
///
/// If the delimited metadata block is absent or malformed, falls back to
/// placeholder metadata with the whole raw response as body.
pub fn parse_completion(response: &str) -> SummaryRecord {
    match parse_attribute_block(response) {
        Some((attributes, body)) => SummaryRecord {
            title: attributes.title,
            industry: attributes.industry,
            keywords: split_keywords(&attributes.keywords),
            body,
        },
        None => {
            tracing::warn!("Malformed completion response, using placeholder metadata");
            SummaryRecord {
                title: "Title not found".to_string(),
                industry: "Industry not found".to_string(),
                keywords: vec!["Keywords not found".to_string()],
                body: response.to_string(),
            }
        }
    }
}

fn parse_attribute_block(response: &str) -> Option<(AttributeBlock, String)> {
    let (_, rest) = response.split_once(BEGIN_ATTRIBUTES)?;
    let (block, body) = rest.split_once(END_ATTRIBUTES)?;
    let attributes: AttributeBlock = serde_json::from_str(block.trim()).ok()?;
    Some((attributes, body.trim().to_string()))
}

fn split_keywords(keywords: &str) -> Vec<String> {
    keywords
        .split(',')
        .map(|keyword| keyword.trim().to_string())
        .filter(|keyword| !keyword.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_completion() {
        let response = concat!(
            "BEGINATTRIBUTES",
            r#"{"Title": "Data at Scale", "Industry": "Analytics", "Keywords": "data, scale, cloud"}"#,
            "ENDATTRIBUTES",
            "\n\nThe summary body goes here."
        );
        let record = parse_completion(response);

        assert_eq!(record.title, "Data at Scale");
        assert_eq!(record.industry, "Analytics");
        assert_eq!(record.keywords, vec!["data", "scale", "cloud"]);
        assert_eq!(record.body, "The summary body goes here.");
    }

    #[test]
    fn test_missing_markers_falls_back_to_placeholders() {
        let response = "Just a free-text summary without any metadata.";
        let record = parse_completion(response);

        assert_eq!(record.title, "Title not found");
        assert_eq!(record.industry, "Industry not found");
        assert_eq!(record.keywords, vec!["Keywords not found"]);
        assert_eq!(record.body, response);
    }

    #[test]
    fn test_missing_end_marker_falls_back() {
        let response = r#"BEGINATTRIBUTES{"Title": "T", "Industry": "I", "Keywords": "k"}"#;
        let record = parse_completion(response);
        assert_eq!(record.title, "Title not found");
        assert_eq!(record.body, response);
    }

    #[test]
    fn test_invalid_json_block_falls_back() {
        let response = "BEGINATTRIBUTES{not json}ENDATTRIBUTES body";
        let record = parse_completion(response);
        assert_eq!(record.title, "Title not found");
        assert_eq!(record.body, response);
    }

    #[test]
    fn test_missing_attribute_key_falls_back() {
        let response = r#"BEGINATTRIBUTES{"Title": "T"}ENDATTRIBUTES body"#;
        let record = parse_completion(response);
        assert_eq!(record.title, "Title not found");
    }

    #[test]
    fn test_keywords_trimmed_and_split() {
        let response = concat!(
            "BEGINATTRIBUTES",
            r#"{"Title": "T", "Industry": "I", "Keywords": " one ,two,  three "}"#,
            "ENDATTRIBUTES",
            "body"
        );
        let record = parse_completion(response);
        assert_eq!(record.keywords, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_truncate_exact_limit() {
        let content = "abcdefghij";
        assert_eq!(truncate_chars(content, 4), "abcd");
        assert_eq!(truncate_chars(content, 4).chars().count(), 4);
    }

    #[test]
    fn test_truncate_shorter_input_untouched() {
        assert_eq!(truncate_chars("short", 100), "short");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let content = "aüßé漢字";
        let truncated = truncate_chars(content, 3);
        assert_eq!(truncated, "aüß");
        assert_eq!(truncated.chars().count(), 3);
    }
}
