pub mod form;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::letter::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(form::form_handler))
        .route("/health", get(health::health_handler))
        // Cover letter API
        .route("/api/v1/cover-letters", post(handlers::handle_generate))
        .route(
            "/api/v1/cover-letters/upload",
            post(handlers::handle_generate_upload),
        )
        .route(
            "/api/v1/cover-letters/pdf",
            post(handlers::handle_generate_pdf),
        )
        .route("/api/v1/render", post(handlers::handle_render))
        .with_state(state)
}
