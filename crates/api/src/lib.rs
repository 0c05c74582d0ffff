//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes
//! - Request extractors
//! - Error responses
//! - Panic and fallback handlers

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;

use axum::Router;
use convertly_core::currency::RateCache;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Exchange rate cache.
    pub rates: RateCache,
}

impl AppState {
    /// Creates the state around a rate cache.
    #[must_use]
    pub fn new(rates: RateCache) -> Self {
        Self { rates }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .nest("/api/conversion", routes::api_routes())
        .fallback(middleware::not_found)
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
