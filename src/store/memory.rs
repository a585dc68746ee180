//! # In-Memory Backend
//!
//! Keeps the collection in process memory. Loads and saves can be forced to
//! fail, which is how the rollback paths of the catalog are exercised.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use super::backend::BookStore;
use super::errors::{StoreError, StoreResult};
use crate::catalog::Book;

/// In-memory book store
#[derive(Debug, Default)]
pub struct MemoryStore {
    books: RwLock<Vec<Book>>,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `books`
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
            ..Default::default()
        }
    }

    /// Make every following load fail
    pub fn fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Make every following save fail
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of what was last saved
    pub fn snapshot(&self) -> StoreResult<Vec<Book>> {
        self.books
            .read()
            .map(|books| books.clone())
            .map_err(|_| StoreError::Unavailable("Lock poisoned".to_string()))
    }
}

impl BookStore for MemoryStore {
    fn load(&self) -> StoreResult<Vec<Book>> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("load disabled".to_string()));
        }
        self.snapshot()
    }

    fn save(&self, books: &[Book]) -> StoreResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Io("save disabled".to_string()));
        }

        let mut stored = self
            .books
            .write()
            .map_err(|_| StoreError::Unavailable("Lock poisoned".to_string()))?;
        *stored = books.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
