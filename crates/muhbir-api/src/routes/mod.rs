//! HTTP route handlers

mod health;
mod notify;

pub use health::healthz;
pub use notify::post_upload_event;
