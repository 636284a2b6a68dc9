//! Muhbir Core Library
//!
//! Core types, configuration, and utilities for the Muhbir upload
//! notification service.

pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use config::NotifierConfig;
pub use error::{Error, Result};

/// Muhbir version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent header sent on every webhook delivery
pub const USER_AGENT: &str = concat!("muhbir/", env!("CARGO_PKG_VERSION"));

/// Environment label used when none is configured
pub const DEFAULT_ENVIRONMENT: &str = "unknown";

/// Webhook delivery timeout in seconds
pub const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 5;

/// Accent color for the message embed
pub const EMBED_COLOR: u32 = 5_763_719;
