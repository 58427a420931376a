//! Google Drive publisher
//!
//! Uploads documents with the Drive v3 multipart upload: a JSON metadata
//! part (name, target mimeType, parent folder) followed by the media part.
//! Summaries are converted to Google Docs, the results table to a Sheet.
//! Authentication is a bearer token supplied through configuration; no
//! OAuth flow is performed here.

use super::{PublishError, PublishedDoc, Publisher};
use crate::config::GoogleConfig;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";

const DOCUMENT_MIME: &str = "application/vnd.google-apps.document";
const SPREADSHEET_MIME: &str = "application/vnd.google-apps.spreadsheet";

#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
}

/// Publisher backed by the Google Drive v3 API
pub struct DrivePublisher {
    client: Client,
    access_token: String,
    folder_id: String,
    base_url: String,
}

impl DrivePublisher {
    pub fn new(client: Client, config: &GoogleConfig) -> Self {
        Self {
            client,
            access_token: config.access_token.clone(),
            folder_id: config.folder_id.clone(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    async fn upload(
        &self,
        filename: &str,
        target_mime: &str,
        media_mime: &str,
        content: &str,
    ) -> Result<String, PublishError> {
        let metadata = json!({
            "name": filename,
            "mimeType": target_mime,
            "parents": [self.folder_id],
        });

        let form = Form::new()
            .part(
                "metadata",
                Part::text(metadata.to_string()).mime_str("application/json")?,
            )
            .part(
                "media",
                Part::text(content.to_string()).mime_str(media_mime)?,
            );

        let response = self
            .client
            .post(format!(
                "{}/upload/drive/v3/files?uploadType=multipart&fields=id",
                self.base_url
            ))
            .bearer_auth(&self.access_token)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PublishError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let file: DriveFile = response.json().await?;
        tracing::debug!("Uploaded {} as {}", filename, file.id);
        Ok(file.id)
    }
}

#[async_trait]
impl Publisher for DrivePublisher {
    async fn publish_document(
        &self,
        filename: &str,
        content: &str,
    ) -> Result<PublishedDoc, PublishError> {
        let id = self
            .upload(filename, DOCUMENT_MIME, "text/plain", content)
            .await?;
        let link = format!("https://docs.google.com/document/d/{}", id);
        Ok(PublishedDoc { id, link })
    }

    async fn publish_table(
        &self,
        filename: &str,
        csv_content: &str,
    ) -> Result<String, PublishError> {
        self.upload(filename, SPREADSHEET_MIME, "text/csv", csv_content)
            .await
    }
}
