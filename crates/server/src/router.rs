use axum::{
    routing::{get, post},
    Router,
};

use crate::{api::handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Request form
        .route("/", get(handlers::index))
        // Download endpoint, POST only
        .route(
            "/api/download",
            post(handlers::handle_download).fallback(handlers::method_not_allowed),
        )
        .route("/api/openapi.json", get(handlers::openapi_json))
        .with_state(state)
}
