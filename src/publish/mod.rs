//! Publishing collaborator
//!
//! Persists summaries as Google Docs and maintains the consolidated
//! results CSV, which is uploaded as a spreadsheet at the end of a run.

mod drive;
mod table;

pub use drive::DrivePublisher;
pub use table::{ResultsTable, RESULTS_HEADER};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from document upload or results-table writes
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Upload request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Drive API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("IO error writing results table: {0}")]
    Io(#[from] std::io::Error),
}

/// A published document: opaque identifier plus a derived shareable link
#[derive(Debug, Clone)]
pub struct PublishedDoc {
    pub id: String,
    pub link: String,
}

/// Collaborator boundary: stores blobs under a name, returns an identifier
#[async_trait]
pub trait Publisher {
    /// Stores `content` as a document named `filename`
    async fn publish_document(
        &self,
        filename: &str,
        content: &str,
    ) -> Result<PublishedDoc, PublishError>;

    /// Uploads the aggregated results table as a spreadsheet artifact,
    /// returning the uploaded file id
    async fn publish_table(&self, filename: &str, csv_content: &str)
        -> Result<String, PublishError>;
}

/// Derives the upload filename from a post URL: the last non-empty path
/// segment plus a `.txt` extension. Trailing-slash URLs use the segment
/// before the slash.
pub fn document_filename(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    let segment = trimmed.rsplit('/').next().unwrap_or(trimmed);
    let segment = if segment.is_empty() { "post" } else { segment };
    format!("{}.txt", segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_from_last_segment() {
        assert_eq!(
            document_filename("https://x.com/blog/my-post"),
            "my-post.txt"
        );
    }

    #[test]
    fn test_filename_with_trailing_slash() {
        assert_eq!(
            document_filename("https://x.com/blog/my-post/"),
            "my-post.txt"
        );
    }

    #[test]
    fn test_filename_fallback_for_bare_host() {
        assert_eq!(document_filename("https://x.com"), "x.com.txt");
    }
}
