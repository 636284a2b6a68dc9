//! Upload Notifier
//!
//! Handles the full lifecycle of one notification: validate, extract the
//! first record, build the webhook message, deliver it.

use chrono::{Local, Utc};
use muhbir_core::config::NotifierConfig;
use muhbir_core::error::Error;
use muhbir_core::types::{
    DeliveryReport, Embed, EmbedField, EmbedFooter, HandlerResult, UploadEvent, WebhookMessage,
};
use muhbir_core::utils;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

const MESSAGE_CONTENT: &str = "New upload received";
const EMBED_TITLE: &str = "File details";
const FOOTER_TEXT: &str = "Muhbir upload notifier";
const DELIVERED_MESSAGE: &str = "notification sent";

/// Notifier handle
///
/// Holds the immutable configuration and the HTTP client; cheap to share
/// across concurrent invocations, which are fully independent.
pub struct Notifier {
    config: Arc<NotifierConfig>,
    http: Client,
}

impl Notifier {
    pub fn new(config: Arc<NotifierConfig>) -> muhbir_core::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.webhook.timeout_secs))
            .user_agent(muhbir_core::USER_AGENT)
            .build()
            .map_err(|e| Error::InternalError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    /// Process one upload event. Never fails: every error is caught,
    /// logged, and reported as a structured result.
    pub async fn handle(&self, event: UploadEvent, request_id: &str) -> HandlerResult {
        match self.notify(&event, request_id).await {
            Ok(report) => {
                info!(
                    "Webhook delivery succeeded request_id={} bucket={} file={} size={}",
                    request_id, report.bucket, report.file, report.size
                );
                HandlerResult::delivered(report)
            }
            Err(err) => {
                error!(
                    "Upload notification failed request_id={}: {:?}",
                    request_id, err
                );
                HandlerResult::failure(&err)
            }
        }
    }

    async fn notify(&self, event: &UploadEvent, request_id: &str) -> Result<DeliveryReport, Error> {
        let url = self
            .config
            .webhook
            .url
            .as_deref()
            .ok_or(Error::WebhookNotConfigured)?;

        if let Ok(dump) = serde_json::to_string(event) {
            debug!("Upload event request_id={}: {}", request_id, dump);
        }

        let record = event.first_record().ok_or(Error::EmptyEvent)?;
        if let Some(ref name) = record.event_name {
            debug!("Handling record request_id={} event_name={}", request_id, name);
        }

        let bucket = record
            .s3
            .bucket
            .name
            .clone()
            .unwrap_or_else(|| "unknown".to_string());
        let file = utils::decode_object_key(record.s3.object.key.as_deref().unwrap_or(""));
        let size = utils::format_display_size(record.s3.object.size.unwrap_or(0));

        let message = build_message(&bucket, &file, &size, &self.config.webhook.environment);
        self.deliver(url, &message).await?;

        Ok(DeliveryReport {
            message: DELIVERED_MESSAGE.to_string(),
            bucket,
            file,
            size,
        })
    }

    async fn deliver(&self, url: &str, message: &WebhookMessage) -> Result<(), Error> {
        let json = serde_json::to_string(message)
            .map_err(|e| Error::InternalError(format!("Failed to serialize message: {}", e)))?;

        let response = self
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .body(json)
            .send()
            .await
            .map_err(|e| Error::DeliveryFailed(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Error::WebhookRejected(response.status().as_u16()))
        }
    }
}

/// Build the webhook message for one upload. The upload-time field shows
/// local wall-clock time; the embed timestamp is UTC ISO-8601. The two
/// may differ in timezone representation.
pub fn build_message(bucket: &str, file: &str, size: &str, environment: &str) -> WebhookMessage {
    let uploaded_at = utils::format_display_datetime(&Local::now());
    let timestamp = utils::format_utc_timestamp(&Utc::now());

    WebhookMessage {
        content: MESSAGE_CONTENT.to_string(),
        embeds: vec![Embed {
            title: EMBED_TITLE.to_string(),
            color: muhbir_core::EMBED_COLOR,
            fields: vec![
                EmbedField::new("Storage location", bucket, false),
                EmbedField::new("File name", file, false),
                EmbedField::new("File size", size, true),
                EmbedField::new("File type", utils::file_type_label(file), true),
                EmbedField::new("Uploaded at", uploaded_at, true),
                EmbedField::new("Environment", environment.to_uppercase(), true),
            ],
            footer: EmbedFooter {
                text: FOOTER_TEXT.to_string(),
            },
            timestamp,
        }],
    }
}
