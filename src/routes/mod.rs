use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware::from_fn,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Config,
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::ProfileProvider,
};

pub mod compare;
pub mod profiles;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub profiles: Arc<dyn ProfileProvider>,
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/compare-users", get(compare::compare_users))
        .route(
            "/profiles/:user_id",
            get(profiles::get_profile).put(profiles::upsert_profile),
        )
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
