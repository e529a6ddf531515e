pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::aggregation::handlers as aggregation_handlers;
use crate::state::AppState;
use crate::translation::handlers as translation_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/jobs/external",
            get(aggregation_handlers::handle_external_jobs),
        )
        .route(
            "/api/v1/jobs/translate",
            post(translation_handlers::handle_translate),
        )
        .with_state(state)
}
