//! HTTP fetch layer
//!
//! One shared reqwest client with bounded timeouts serves every fetch in the
//! pipeline: homepage harvesting, post classification, and content
//! extraction. Errors distinguish a definitive server answer (non-success
//! status) from a request that never completed, which the classifier uses to
//! tell "not a post" from "could not confirm".

use crate::config::UserAgentConfig;
use crate::FetchError;
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client used for all page fetches
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    let user_agent = format!("{}/{}", config.name, config.version);

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its body as text
///
/// Non-success statuses are errors: every caller in this pipeline wants a
/// readable HTML page, and a 404 or 500 is a reason to skip the URL.
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| classify_error(url, e))
}

fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Network {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> UserAgentConfig {
        UserAgentConfig {
            name: "postpress".to_string(),
            version: "1.0".to_string(),
        }
    }

    #[test]
    fn test_build_http_client() {
        let config = create_test_config();
        assert!(build_http_client(&config).is_ok());
    }

    #[test]
    fn test_status_error_is_definitive() {
        let err = FetchError::Status {
            url: "https://example.com".to_string(),
            status: 404,
        };
        assert!(err.is_definitive());

        let err = FetchError::Timeout {
            url: "https://example.com".to_string(),
        };
        assert!(!err.is_definitive());
    }

    // Fetch behavior against live responses is covered by the wiremock
    // integration tests.
}
