//! Webhook message types
//!
//! Discord-compatible message payload: a `content` line plus a single
//! embed carrying the labeled fields. Serialized field names are the wire
//! format and must not change.

use serde::{Deserialize, Serialize};

/// Complete message body posted to the webhook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookMessage {
    pub content: String,
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Embed {
    pub title: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
    /// UTC ISO-8601 timestamp
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
}

impl EmbedField {
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let message = WebhookMessage {
            content: "New upload received".to_string(),
            embeds: vec![Embed {
                title: "File details".to_string(),
                color: crate::EMBED_COLOR,
                fields: vec![EmbedField::new("File size", "1.00 KB", true)],
                footer: EmbedFooter {
                    text: "Upload notifier".to_string(),
                },
                timestamp: "2026-08-07T10:00:00.000Z".to_string(),
            }],
        };

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&message).unwrap()).unwrap();
        assert_eq!(json["content"], "New upload received");
        assert_eq!(json["embeds"][0]["color"], 5_763_719);
        assert_eq!(json["embeds"][0]["fields"][0]["inline"], true);
        assert_eq!(json["embeds"][0]["footer"]["text"], "Upload notifier");
    }
}
