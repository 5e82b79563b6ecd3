pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Assemble the full application.
///
/// The dashboard frontend runs on its own origin during development, so the
/// API is served with permissive CORS.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::api_router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
