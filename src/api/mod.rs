//! HTTP API server

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::store::PeakStore;

pub mod docs;
pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api", get(handlers::api_redirect))
        .route("/api/docs", get(docs::openapi))
        .route("/api/peak", post(handlers::create_peak))
        .route(
            "/api/peak/:id",
            get(handlers::get_peak)
                .put(handlers::update_peak)
                .delete(handlers::delete_peak),
        )
        .route(
            "/api/peaks",
            get(handlers::list_peaks).post(handlers::peaks_in_box),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience helper wiring a store straight into a router
pub fn create_router_with_store(store: Arc<dyn PeakStore>) -> Router {
    create_router(AppState::new(store))
}
