use axum::{response::IntoResponse, Json};
use serde_json::json;
use tracing::debug;

pub const HOME_MESSAGE: &str = "Bienvenue sur la page d'accueil";
pub const VERSION: &str = "1.0";

pub async fn home_handler() -> impl IntoResponse {
    debug!("Received home request");
    Json(json!({
        "message": HOME_MESSAGE,
        "version": VERSION,
    }))
}
