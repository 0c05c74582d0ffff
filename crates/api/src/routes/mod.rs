//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod conversion;
pub mod currency;
pub mod health;

/// Creates the `/api/conversion` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(conversion::routes())
        .merge(currency::routes())
}
