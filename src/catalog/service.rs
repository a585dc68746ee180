//! # Catalog Repository
//!
//! Owns the in-memory collection and its store. The collection is loaded once
//! when the catalog is opened; if that load fails the catalog stays in the
//! load-failed state and every operation reports `StorageUnavailable`.
//!
//! Mutations write the full collection back to the store before returning.
//! When that write fails the in-memory change is undone first, so memory and
//! store never disagree after an operation returns.

use serde_json::Value;
use uuid::Uuid;

use super::book::{Book, BookDraft};
use super::errors::{CatalogError, CatalogResult};
use super::validation::lookup_key;
use crate::store::BookStore;

/// Book collection with write-through persistence
#[derive(Debug)]
pub struct Catalog<S> {
    store: S,
    /// `None` when the initial load failed
    books: Option<Vec<Book>>,
}

impl<S: BookStore> Catalog<S> {
    /// Load the collection from `store`. A failed load is logged, not returned.
    pub fn open(store: S) -> Self {
        let books = match store.load() {
            Ok(books) => {
                tracing::info!(count = books.len(), source = %store.describe(), "catalog loaded");
                Some(books)
            }
            Err(e) => {
                tracing::error!(error = %e, source = %store.describe(), "failed to load catalog");
                None
            }
        };

        Self { store, books }
    }

    pub fn is_loaded(&self) -> bool {
        self.books.is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fail with `StorageUnavailable` unless the collection was loaded
    pub fn ensure_loaded(&self) -> CatalogResult<()> {
        self.list().map(|_| ())
    }

    /// All books in insertion order
    pub fn list(&self) -> CatalogResult<&[Book]> {
        self.books
            .as_deref()
            .ok_or(CatalogError::StorageUnavailable)
    }

    /// Look up a book by its textual id
    pub fn get(&self, id: &str) -> CatalogResult<&Book> {
        let key = lookup_key(id)?;
        self.list()?
            .iter()
            .find(|book| Some(book.id) == key)
            .ok_or(CatalogError::NotFound)
    }

    /// Validate `payload` and add the resulting book
    pub fn create(&mut self, payload: &Value) -> CatalogResult<Book> {
        self.ensure_loaded()?;
        let draft = BookDraft::from_json(payload)?;
        self.insert(draft)
    }

    /// Add an already validated book under a fresh id
    pub fn insert(&mut self, draft: BookDraft) -> CatalogResult<Book> {
        let books = self
            .books
            .as_mut()
            .ok_or(CatalogError::StorageUnavailable)?;

        if books.iter().any(|book| draft.conflicts_with(book)) {
            return Err(CatalogError::Conflict);
        }

        let book = draft.into_book(Uuid::new_v4());
        books.push(book.clone());

        if let Err(e) = self.store.save(books) {
            books.pop();
            tracing::error!(error = %e, id = %book.id, "persisting new book failed, rolled back");
            return Err(e.into());
        }

        tracing::info!(id = %book.id, title = %book.title, "book created");
        Ok(book)
    }

    /// Remove a book by its textual id and return it
    pub fn delete(&mut self, id: &str) -> CatalogResult<Book> {
        let key = lookup_key(id)?;
        let books = self
            .books
            .as_mut()
            .ok_or(CatalogError::StorageUnavailable)?;

        let index = books
            .iter()
            .position(|book| Some(book.id) == key)
            .ok_or(CatalogError::NotFound)?;
        let removed = books.remove(index);

        if let Err(e) = self.store.save(books) {
            tracing::error!(error = %e, id = %removed.id, "persisting deletion failed, rolled back");
            books.insert(index, removed);
            return Err(e.into());
        }

        tracing::info!(id = %removed.id, "book deleted");
        Ok(removed)
    }
}
