//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for spending entries and the summary dashboard
//! - Response types and error mapping
//! - The router with CORS and request tracing

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tally_core::spending::EntryStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Spending entry storage.
    pub entries: Arc<dyn EntryStore>,
}

impl AppState {
    /// Creates state around an entry store.
    pub fn new(entries: Arc<dyn EntryStore>) -> Self {
        Self { entries }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
