//! Notification server

use axum::{
    routing::{get, post},
    Router,
};
use muhbir_core::{config::NotifierConfig, Result};
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::{info, warn};

use crate::events::Notifier;
use crate::routes;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<NotifierConfig>,
    pub notifier: Arc<Notifier>,
    pub start_time: Instant,
}

/// Notification server
pub struct NotifyServer {
    config: NotifierConfig,
}

impl NotifyServer {
    pub fn new(config: NotifierConfig) -> Self {
        Self { config }
    }

    pub async fn run(self) -> Result<()> {
        let start_time = Instant::now();

        self.config.webhook.validate()?;
        if self.config.webhook.url.is_none() {
            warn!("No webhook URL configured; events will fail with a configuration error");
        }

        let config = Arc::new(self.config);
        let notifier = Arc::new(Notifier::new(config.clone())?);

        let state = AppState {
            config: config.clone(),
            notifier,
            start_time,
        };

        let app = create_router(state);
        let addr = format!("{}:{}", config.server.bind_address, config.server.port);
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Muhbir notification server listening on http://{}", addr);
        info!("📬 Upload events accepted at POST http://{}/events", addr);
        if config.webhook.url.is_some() {
            info!("🔔 Forwarding notifications to the configured webhook");
        }

        axum::serve(listener, app).await?;
        Ok(())
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/events", post(routes::post_upload_event))
        .route("/healthz", get(routes::healthz))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .with_state(state)
}
