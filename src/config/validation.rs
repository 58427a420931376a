use crate::config::types::{Config, GoogleConfig, OpenAiConfig, RunConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_run_config(&config.run)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_openai_config(&config.openai)?;
    validate_google_config(&config.google)?;
    validate_targets(config)?;
    Ok(())
}

/// Validates run configuration
fn validate_run_config(config: &RunConfig) -> Result<(), ConfigError> {
    if config.cache_path.is_empty() {
        return Err(ConfigError::Validation(
            "cache-path cannot be empty. Set cache-path under [run] to the URL cache file"
                .to_string(),
        ));
    }

    if config.results_path.is_empty() {
        return Err(ConfigError::Validation(
            "results-path cannot be empty. Set results-path under [run] to the CSV output file"
                .to_string(),
        ));
    }

    if let Some(0) = config.max_posts {
        return Err(ConfigError::Validation(
            "max-posts must be >= 1; omit the key to process all discovered posts".to_string(),
        ));
    }

    if config.max_input_chars < 100 {
        return Err(ConfigError::Validation(format!(
            "max-input-chars must be >= 100, got {}",
            config.max_input_chars
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent name cannot be empty".to_string(),
        ));
    }

    if !config.name.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(ConfigError::Validation(format!(
            "user-agent name must contain only alphanumeric characters and hyphens, got '{}'",
            config.name
        )));
    }

    if config.version.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent version cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates OpenAI configuration
fn validate_openai_config(config: &OpenAiConfig) -> Result<(), ConfigError> {
    if config.api_key.is_empty() {
        return Err(ConfigError::Validation(
            "openai api-key is empty. Add your key as api-key under [openai]".to_string(),
        ));
    }

    if config.model.is_empty() {
        return Err(ConfigError::Validation(
            "openai model cannot be empty".to_string(),
        ));
    }

    if let Some(base_url) = &config.base_url {
        Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid openai base-url: {}", e)))?;
    }

    Ok(())
}

/// Validates Google Drive configuration
fn validate_google_config(config: &GoogleConfig) -> Result<(), ConfigError> {
    if config.folder_id.is_empty() {
        return Err(ConfigError::Validation(
            "google folder-id is empty. Add the destination folder as folder-id under [google]"
                .to_string(),
        ));
    }

    if config.access_token.is_empty() {
        return Err(ConfigError::Validation(
            "google access-token is empty. Add a Drive bearer token as access-token under [google]"
                .to_string(),
        ));
    }

    if let Some(base_url) = &config.base_url {
        Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid google base-url: {}", e)))?;
    }

    Ok(())
}

/// Validates target homepage entries
fn validate_targets(config: &Config) -> Result<(), ConfigError> {
    if config.targets.is_empty() {
        return Err(ConfigError::Validation(
            "No targets configured. Add at least one [[target]] with a homepage URL".to_string(),
        ));
    }

    for entry in &config.targets {
        let url = Url::parse(&entry.homepage).map_err(|e| {
            ConfigError::InvalidUrl(format!("Invalid homepage '{}': {}", entry.homepage, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::Validation(format!(
                "Homepage '{}' must use HTTP or HTTPS",
                entry.homepage
            )));
        }
    }

    Ok(())
}
