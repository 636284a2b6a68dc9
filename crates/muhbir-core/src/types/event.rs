//! Upload event types
//!
//! S3-compatible upload notification event. Producers differ in how much
//! of the record they fill in, so every field below is optional and
//! defaults rather than failing; the handler decides what absence means.

use serde::{Deserialize, Serialize};

/// Incoming upload notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<UploadRecord>,
}

/// One entry within an upload event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadRecord {
    #[serde(rename = "eventName", default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,

    #[serde(default)]
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct S3Entity {
    #[serde(default)]
    pub bucket: BucketRef,

    #[serde(default)]
    pub object: ObjectRef,
}

/// Storage location reference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BucketRef {
    pub name: Option<String>,
}

/// Object reference. The key arrives percent-encoded with `+` for spaces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectRef {
    pub key: Option<String>,
    pub size: Option<u64>,
}

impl UploadEvent {
    /// First record of the event, if any. Only the first record is
    /// consulted when building a notification.
    pub fn first_record(&self) -> Option<&UploadRecord> {
        self.records.first()
    }
}
