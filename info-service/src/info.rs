use crate::state::{AppState, SERVICE_NAME};
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Reports the running configuration. PORT and ENVIRONMENT are read from the
/// process environment at request time; a PORT value that does not parse as a
/// u16 falls back to the configured default rather than leaking a string.
pub async fn api_info_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let port = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(state.default_port);
    let environment =
        std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
    debug!(port, %environment, "Received api_info request");

    Json(json!({
        "app_name": SERVICE_NAME,
        "port": port,
        "environment": environment,
    }))
}
