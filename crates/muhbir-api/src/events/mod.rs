//! Event notification module
//!
//! Turns one upload event into one webhook message and performs the
//! single outbound delivery. One attempt per invocation, no retries.

mod notifier;

pub use notifier::{build_message, Notifier};
