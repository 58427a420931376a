use serde::Deserialize;

/// Main configuration structure for Postpress
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub run: RunConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub openai: OpenAiConfig,
    pub google: GoogleConfig,
    #[serde(default, rename = "target")]
    pub targets: Vec<TargetEntry>,
}

/// Run behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Path to the append-only URL cache file
    #[serde(rename = "cache-path")]
    pub cache_path: String,

    /// Path to the results CSV file
    #[serde(rename = "results-path")]
    pub results_path: String,

    /// Maximum posts to process per run; absent means unlimited
    #[serde(rename = "max-posts")]
    pub max_posts: Option<usize>,

    /// Character budget for article text sent to the model
    #[serde(rename = "max-input-chars", default = "default_max_input_chars")]
    pub max_input_chars: usize,
}

fn default_max_input_chars() -> usize {
    12_000
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name sent in the User-Agent header
    pub name: String,

    /// Version sent in the User-Agent header
    pub version: String,
}

/// OpenAI API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    /// API key for the completions endpoint
    #[serde(rename = "api-key")]
    pub api_key: String,

    /// Completion model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Override for the API base URL (used by tests)
    #[serde(rename = "base-url")]
    pub base_url: Option<String>,
}

fn default_model() -> String {
    "gpt-3.5-turbo-instruct".to_string()
}

/// Google Drive configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    /// Drive folder that receives published documents
    #[serde(rename = "folder-id")]
    pub folder_id: String,

    /// Bearer token for the Drive API
    #[serde(rename = "access-token")]
    pub access_token: String,

    /// Override for the API base URL (used by tests)
    #[serde(rename = "base-url")]
    pub base_url: Option<String>,
}

/// A blog homepage to crawl for new posts
#[derive(Debug, Clone, Deserialize)]
pub struct TargetEntry {
    /// Root URL whose outbound links are harvested
    pub homepage: String,
}
