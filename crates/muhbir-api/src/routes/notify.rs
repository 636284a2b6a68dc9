//! Upload event intake
//!
//! One POST per invocation; the response is the handler's structured
//! result, verbatim.

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::StatusCode,
    response::Response,
};
use muhbir_core::types::{HandlerResult, UploadEvent};
use muhbir_core::utils::generate_request_id;
use muhbir_core::Error;
use tracing::{debug, warn};

use crate::server::AppState;

// ============================================================================
// Response Helpers
// ============================================================================

fn result_response(result: &HandlerResult, request_id: &str) -> Response {
    let status = StatusCode::from_u16(result.status_code)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = serde_json::to_string(&result.body).unwrap_or_else(|_| "{}".to_string());

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("x-request-id", request_id)
        .body(Body::from(body))
        .unwrap()
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /events - accept one upload event and forward the notification
pub async fn post_upload_event(State(state): State<AppState>, body: Bytes) -> Response {
    let request_id = generate_request_id();
    debug!("NotifyUpload request_id={}", request_id);

    let event: UploadEvent = match serde_json::from_slice(&body) {
        Ok(event) => event,
        Err(e) => {
            warn!(
                "Undeserializable upload event request_id={}: {}",
                request_id, e
            );
            let err = Error::MalformedEvent(e.to_string());
            return result_response(&HandlerResult::failure(&err), &request_id);
        }
    };

    let result = state.notifier.handle(event, &request_id).await;
    result_response(&result, &request_id)
}
