//! # Store Backend Trait

use std::sync::Arc;

use super::errors::StoreResult;
use crate::catalog::Book;

/// Backend trait for the book collection
pub trait BookStore: Send + Sync + std::fmt::Debug {
    /// Read the full collection
    fn load(&self) -> StoreResult<Vec<Book>>;

    /// Overwrite the stored collection with `books`
    fn save(&self, books: &[Book]) -> StoreResult<()>;

    /// Human readable location, used in log lines
    fn describe(&self) -> String;
}

// A shared store can back a catalog while the caller keeps its own handle.
impl<S: BookStore + ?Sized> BookStore for Arc<S> {
    fn load(&self) -> StoreResult<Vec<Book>> {
        (**self).load()
    }

    fn save(&self, books: &[Book]) -> StoreResult<()> {
        (**self).save(books)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
