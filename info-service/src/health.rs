use crate::state::SERVICE_NAME;
use axum::{response::IntoResponse, Json};
use serde_json::json;

pub async fn health_handler() -> impl IntoResponse {
    // Simple readiness/health endpoint. Keep it lightweight.
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::CONTENT_TYPE;

    #[tokio::test]
    async fn health_reports_healthy_service() {
        let resp = health_handler().await.into_response();
        assert_eq!(resp.status(), axum::http::StatusCode::OK);
        assert_eq!(
            resp.headers().get(CONTENT_TYPE).expect("content type"),
            "application/json"
        );

        let bytes = hyper::body::to_bytes(resp.into_body()).await.expect("bytes");
        let v: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(v.get("status").and_then(|s| s.as_str()), Some("healthy"));
        assert_eq!(
            v.get("service").and_then(|s| s.as_str()),
            Some(SERVICE_NAME)
        );
    }
}
