//! Health HTTP Routes

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::book_routes::CatalogState;
use crate::catalog::ErrorResponse;
use crate::store::BookStore;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// False when the backing file could not be loaded at startup
    pub books_loaded: bool,
}

/// Health check route at `/health`
pub fn health_routes<S: BookStore + 'static>(state: Arc<CatalogState<S>>) -> Router {
    Router::new()
        .route("/health", get(health_handler::<S>))
        .with_state(state)
}

async fn health_handler<S: BookStore>(State(state): State<Arc<CatalogState<S>>>) -> impl IntoResponse {
    let books_loaded = state
        .read()
        .map(|catalog| catalog.is_loaded())
        .unwrap_or(false);

    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        books_loaded,
    };

    (StatusCode::OK, Json(response))
}

/// Answer for paths no route matches
pub async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Ruta no encontrada")))
}
