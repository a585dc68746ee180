//! # Catalog Errors
//!
//! Every failure maps to an HTTP status and a `{ "error": ... }` body.
//! Messages are in Spanish, the language the service answers in.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Message sent for any failure the client cannot act on
pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";

/// Catalog errors
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    // ==================
    // Client Errors (4xx)
    // ==================
    #[error("Id inválido")]
    InvalidId,

    #[error("Faltan campos obligatorios o datos inválidos")]
    MissingFields,

    #[error("Año inválido")]
    InvalidYear,

    #[error("Libro no existe")]
    NotFound,

    #[error("Ya existe un libro con el mismo título y año")]
    Conflict,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// The collection could not be loaded at startup
    #[error("Error al leer datos")]
    StorageUnavailable,

    /// Writing the collection failed after a mutation (already rolled back)
    #[error("Fallo al escribir datos: {0}")]
    Persistence(#[from] StoreError),

    /// Request body that is not a JSON object or array
    #[error("Cuerpo JSON inválido: {0}")]
    MalformedBody(String),

    #[error("Error interno: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::InvalidId => StatusCode::BAD_REQUEST,
            CatalogError::MissingFields => StatusCode::BAD_REQUEST,
            CatalogError::InvalidYear => StatusCode::BAD_REQUEST,
            CatalogError::NotFound => StatusCode::NOT_FOUND,
            CatalogError::Conflict => StatusCode::CONFLICT,
            CatalogError::StorageUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::MalformedBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed to clients. Unexpected failures are masked.
    pub fn public_message(&self) -> String {
        if self.is_unexpected() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }

    /// Failures answered by the catch-all 500 and logged in full
    pub fn is_unexpected(&self) -> bool {
        matches!(
            self,
            CatalogError::Persistence(_)
                | CatalogError::MalformedBody(_)
                | CatalogError::Internal(_)
        )
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

impl From<CatalogError> for ErrorResponse {
    fn from(err: CatalogError) -> Self {
        Self::new(err.public_message())
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        if self.is_unexpected() {
            tracing::error!(error = %self, "unexpected error while handling request");
        }

        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
