//! # rr-api
//!
//! The web routing and orchestration layer for Rusty-Reviews.
//!
//! The path is never consulted: `GET` lists, `POST` submits, and any
//! other verb gets a JSON 405, on `/` and everywhere else.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod params;
pub mod response;

use axum::Router;

pub use error::ApiError;
pub use handlers::{AppState, SharedState};

/// Builds the application router around `state`.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .fallback(handlers::dispatch)
        .layer(middleware::trace_layer())
        .with_state(state)
}
