pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assist::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/health/ready", get(health::readiness_handler))
        // Profile assistant
        .route("/api/v1/profile/assist", post(handlers::handle_assist))
        .route(
            "/api/v1/profile/assist/lookup",
            post(handlers::handle_lookup),
        )
        .with_state(state)
}
