//! Error types for Muhbir

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    // Configuration Errors
    #[error("webhook URL not configured")]
    WebhookNotConfigured,

    #[error("invalid webhook URL: {0}")]
    InvalidWebhookUrl(String),

    // Input Errors
    #[error("upload event contains no records")]
    EmptyEvent,

    #[error("malformed upload event: {0}")]
    MalformedEvent(String),

    // Delivery Errors
    #[error("webhook returned error status: {0}")]
    WebhookRejected(u16),

    #[error("webhook delivery failed: {0}")]
    DeliveryFailed(String),

    // Internal Errors
    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::WebhookNotConfigured => "WebhookNotConfigured",
            Error::InvalidWebhookUrl(_) => "InvalidWebhookUrl",
            Error::EmptyEvent | Error::MalformedEvent(_) => "MalformedEvent",
            Error::WebhookRejected(_) => "WebhookRejected",
            Error::DeliveryFailed(_) => "DeliveryFailed",
            Error::InternalError(_) => "InternalError",
            Error::Io(_) => "InternalError",
            Error::Other(_) => "InternalError",
        }
    }

    pub fn http_status(&self) -> u16 {
        match self {
            Error::EmptyEvent | Error::MalformedEvent(_) => 400,
            _ => 500,
        }
    }
}
