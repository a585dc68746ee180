//! # HTTP Server Module
//!
//! Axum server exposing the book catalog.
//!
//! # Endpoints
//!
//! - `GET /api/libros` - List every book
//! - `GET /api/libros/:id` - Fetch one book
//! - `POST /api/libros` - Create a book
//! - `DELETE /api/libros/:id` - Delete a book
//! - `GET /health` - Health check

pub mod book_routes;
pub mod config;
pub mod health_routes;
pub mod server;

pub use book_routes::CatalogState;
pub use config::{ConfigError, HttpServerConfig};
pub use server::HttpServer;
