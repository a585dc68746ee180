//! biblioteca - a book catalog HTTP service backed by a JSON file
//!
//! - `catalog`: book record, validation and the write-through repository
//! - `store`: persistence backends for the collection
//! - `http_server`: axum routes and server
//! - `observability`: logging setup
//! - `cli`: command line entry point

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;

pub use catalog::{Book, BookDraft, Catalog, CatalogError, CatalogResult};
pub use http_server::{HttpServer, HttpServerConfig};
pub use store::{BookStore, JsonFileStore, MemoryStore, StoreError};
