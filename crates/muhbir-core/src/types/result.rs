//! Handler result types
//!
//! The structured value every invocation returns: an HTTP-style status
//! code plus a JSON body. No error ever crosses the handler boundary in
//! any other form.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Result of one notification invocation
#[derive(Debug, Clone, Serialize)]
pub struct HandlerResult {
    pub status_code: u16,
    pub body: HandlerBody,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum HandlerBody {
    Delivered(DeliveryReport),
    Error(ErrorBody),
}

/// Success body: what was delivered, and where
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryReport {
    pub message: String,
    pub bucket: String,
    pub file: String,
    pub size: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl HandlerResult {
    pub fn delivered(report: DeliveryReport) -> Self {
        Self {
            status_code: 200,
            body: HandlerBody::Delivered(report),
        }
    }

    pub fn failure(err: &Error) -> Self {
        Self {
            status_code: err.http_status(),
            body: HandlerBody::Error(ErrorBody {
                error: err.to_string(),
            }),
        }
    }

    pub fn is_delivered(&self) -> bool {
        self.status_code == 200
    }
}
