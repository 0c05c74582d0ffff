//! Health check endpoints.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::AppState;

/// Root response.
#[derive(Serialize)]
pub struct RootResponse {
    /// Greeting confirming the API is up.
    pub message: &'static str,
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// GET `/` - Confirms the API is running.
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "API de Conversión de Unidades funcionando correctamente",
    })
}

/// Health check handler.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
