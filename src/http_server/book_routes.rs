//! Book HTTP Routes
//!
//! CRUD endpoints for the catalog under `/api/libros`.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::catalog::{Book, Catalog, CatalogError, CatalogResult};
use crate::store::BookStore;

// ==================
// Shared State
// ==================

/// Catalog state shared across handlers.
///
/// Create and delete hold the write lock across mutation and persistence, so
/// two mutations never interleave.
pub struct CatalogState<S> {
    catalog: RwLock<Catalog<S>>,
}

impl<S: BookStore> CatalogState<S> {
    pub fn new(catalog: Catalog<S>) -> Self {
        Self {
            catalog: RwLock::new(catalog),
        }
    }

    pub fn read(&self) -> CatalogResult<RwLockReadGuard<'_, Catalog<S>>> {
        self.catalog
            .read()
            .map_err(|_| CatalogError::Internal("Lock poisoned".to_string()))
    }

    pub fn write(&self) -> CatalogResult<RwLockWriteGuard<'_, Catalog<S>>> {
        self.catalog
            .write()
            .map_err(|_| CatalogError::Internal("Lock poisoned".to_string()))
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct DeleteBookResponse {
    pub message: String,
    pub book: Book,
}

// ==================
// Book Routes
// ==================

/// Create book routes
pub fn book_routes<S: BookStore + 'static>(state: Arc<CatalogState<S>>) -> Router {
    Router::new()
        .route(
            "/api/libros",
            get(list_books_handler::<S>).post(create_book_handler::<S>),
        )
        .route(
            "/api/libros/:id",
            get(get_book_handler::<S>).delete(delete_book_handler::<S>),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Only `application/json` bodies are read; anything else carries no fields
fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

/// Decode a create body.
///
/// A non-JSON content type or an empty body yields an empty object. A
/// JSON body must be an object or an array; anything unparsable is a
/// `MalformedBody` and answers 500 like any other unexpected failure.
fn parse_payload(headers: &HeaderMap, body: &[u8]) -> CatalogResult<Value> {
    if !has_json_content_type(headers) || body.is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    let decoded: Result<Json<Value>, JsonRejection> = Json::from_bytes(body);
    match decoded {
        Ok(Json(value @ (Value::Object(_) | Value::Array(_)))) => Ok(value),
        Ok(Json(other)) => Err(CatalogError::MalformedBody(format!(
            "expected an object or array, found {other}"
        ))),
        Err(rejection) => Err(CatalogError::MalformedBody(rejection.body_text())),
    }
}

// ==================
// Handlers
// ==================

async fn list_books_handler<S: BookStore>(
    State(state): State<Arc<CatalogState<S>>>,
) -> CatalogResult<Json<Vec<Book>>> {
    let catalog = state.read()?;
    Ok(Json(catalog.list()?.to_vec()))
}

async fn get_book_handler<S: BookStore>(
    State(state): State<Arc<CatalogState<S>>>,
    Path(id): Path<String>,
) -> CatalogResult<Json<Book>> {
    let catalog = state.read()?;
    Ok(Json(catalog.get(&id)?.clone()))
}

async fn create_book_handler<S: BookStore>(
    State(state): State<Arc<CatalogState<S>>>,
    headers: HeaderMap,
    body: Bytes,
) -> CatalogResult<(StatusCode, Json<Book>)> {
    let mut catalog = state.write()?;
    catalog.ensure_loaded()?;

    let payload = parse_payload(&headers, &body)?;
    let book = catalog.create(&payload)?;

    Ok((StatusCode::CREATED, Json(book)))
}

async fn delete_book_handler<S: BookStore>(
    State(state): State<Arc<CatalogState<S>>>,
    Path(id): Path<String>,
) -> CatalogResult<Json<DeleteBookResponse>> {
    let mut catalog = state.write()?;
    let book = catalog.delete(&id)?;

    Ok(Json(DeleteBookResponse {
        message: "Libro eliminado correctamente".to_string(),
        book,
    }))
}
