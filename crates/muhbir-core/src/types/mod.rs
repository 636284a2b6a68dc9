//! Core types

pub mod event;
pub mod message;
pub mod result;

pub use event::{BucketRef, ObjectRef, S3Entity, UploadEvent, UploadRecord};
pub use message::{Embed, EmbedField, EmbedFooter, WebhookMessage};
pub use result::{DeliveryReport, ErrorBody, HandlerBody, HandlerResult};
