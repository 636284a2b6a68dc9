//! send command - deliver one notification from an event file

use anyhow::{Context, Result};
use muhbir_api::Notifier;
use muhbir_core::config::NotifierConfig;
use muhbir_core::types::UploadEvent;
use muhbir_core::utils::generate_request_id;
use std::sync::Arc;

/// Returns true when the notification was delivered.
pub async fn execute(config: NotifierConfig, event_file: &str) -> Result<bool> {
    config.webhook.validate()?;

    let content = std::fs::read_to_string(event_file)
        .with_context(|| format!("Failed to read event file {}", event_file))?;
    let event: UploadEvent =
        serde_json::from_str(&content).context("Event file is not a valid upload event")?;

    let notifier = Notifier::new(Arc::new(config))?;
    let request_id = generate_request_id();
    let result = notifier.handle(event, &request_id).await;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(result.is_delivered())
}
