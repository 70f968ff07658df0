pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/health/ready", get(health::readiness_handler))
        // Scoring pipeline
        .route(
            "/api/v1/predict/proficiency",
            post(handlers::handle_predict_proficiency),
        )
        .route("/api/v1/analyze/gaps", post(handlers::handle_analyze_gaps))
        .route("/api/v1/recommend", post(handlers::handle_recommend))
        .with_state(state)
}
