//! # Book Catalog
//!
//! The book record, input validation and the `Catalog` repository that keeps
//! the collection in memory and writes it through to a [`BookStore`] on every
//! mutation.
//!
//! [`BookStore`]: crate::store::BookStore

pub mod book;
pub mod errors;
pub mod service;
pub mod validation;

pub use book::{Book, BookDraft};
pub use errors::{CatalogError, CatalogResult, ErrorResponse};
pub use service::Catalog;
