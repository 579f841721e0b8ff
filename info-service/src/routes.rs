pub use crate::health::health_handler;
pub use crate::home::home_handler;
pub use crate::info::api_info_handler;

use crate::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;

/// Binds the three informational endpoints. Routing itself supplies the error
/// surface: unknown paths get 404, non-GET methods on bound paths get 405.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .route("/api/info", get(api_info_handler))
        .with_state(state)
}
