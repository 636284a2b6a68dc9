//! Configuration for Muhbir

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotifierConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub webhook: WebhookConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl NotifierConfig {
    pub fn from_file(path: &str) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::Error::InternalError(format!("Failed to read config: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| crate::Error::InternalError(format!("Failed to parse config: {}", e)))
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("MUHBIR_BIND_ADDRESS") {
            config.server.bind_address = addr;
        }
        if let Ok(port) = std::env::var("MUHBIR_PORT") {
            if let Ok(p) = port.parse() {
                config.server.port = p;
            }
        }
        if let Ok(url) = std::env::var("MUHBIR_WEBHOOK_URL") {
            config.webhook.url = Some(url);
        }
        if let Ok(env_label) = std::env::var("MUHBIR_ENVIRONMENT") {
            config.webhook.environment = env_label;
        }
        if let Ok(secs) = std::env::var("MUHBIR_WEBHOOK_TIMEOUT_SECS") {
            if let Ok(s) = secs.parse() {
                config.webhook.timeout_secs = s;
            }
        }
        if let Ok(level) = std::env::var("MUHBIR_LOG_LEVEL") {
            config.logging.level = level;
        }

        config
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8787,
        }
    }
}

/// Webhook destination configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Destination URL (HTTP/HTTPS). Required for delivery; the server
    /// starts without it and reports a configuration error per event.
    #[serde(default)]
    pub url: Option<String>,

    /// Environment label shown in the message
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Delivery timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_environment() -> String {
    crate::DEFAULT_ENVIRONMENT.to_string()
}

fn default_timeout_secs() -> u64 {
    crate::DEFAULT_WEBHOOK_TIMEOUT_SECS
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: None,
            environment: default_environment(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl WebhookConfig {
    pub fn validate(&self) -> crate::Result<()> {
        if let Some(ref url) = self.url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(crate::Error::InvalidWebhookUrl(url.clone()));
            }
            url::Url::parse(url).map_err(|e| {
                crate::Error::InvalidWebhookUrl(format!("{}: {}", url, e))
            })?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = NotifierConfig::default();
        assert_eq!(config.server.port, 8787);
        assert!(config.webhook.url.is_none());
        assert_eq!(config.webhook.environment, "unknown");
        assert_eq!(config.webhook.timeout_secs, 5);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
bind_address = "127.0.0.1"
port = 9900

[webhook]
url = "https://discord.com/api/webhooks/1/abc"
environment = "staging"
timeout_secs = 5

[logging]
level = "debug"
format = "pretty"
"#
        )
        .unwrap();

        let config = NotifierConfig::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1");
        assert_eq!(config.server.port, 9900);
        assert_eq!(
            config.webhook.url.as_deref(),
            Some("https://discord.com/api/webhooks/1/abc")
        );
        assert_eq!(config.webhook.environment, "staging");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[webhook]\nurl = \"https://example.com/hook\"").unwrap();

        let config = NotifierConfig::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.server.port, 8787);
        assert_eq!(
            config.webhook.url.as_deref(),
            Some("https://example.com/hook")
        );
        assert_eq!(config.webhook.environment, "unknown");
        assert_eq!(config.webhook.timeout_secs, 5);
    }

    #[test]
    fn test_webhook_validate() {
        let mut webhook = WebhookConfig::default();
        assert!(webhook.validate().is_ok());

        webhook.url = Some("https://discord.com/api/webhooks/1/abc".to_string());
        assert!(webhook.validate().is_ok());

        webhook.url = Some("ftp://example.com/hook".to_string());
        assert!(webhook.validate().is_err());

        webhook.url = Some("not a url".to_string());
        assert!(webhook.validate().is_err());
    }
}
