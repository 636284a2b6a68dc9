//! Notification API server for Muhbir

pub mod events;
pub mod routes;
pub mod server;

pub use events::Notifier;
pub use server::{AppState, NotifyServer};
