//! # Book Record

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::errors::{CatalogError, CatalogResult};
use super::validation::{current_year, normalize_text, parse_year};

/// A persisted book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    /// Publication year; written as `null` when unknown
    #[serde(default)]
    pub year: Option<i32>,
}

/// Validated input for a new book, before an id is assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
}

impl BookDraft {
    /// Validate a request payload against the current calendar year
    pub fn from_json(payload: &Value) -> CatalogResult<Self> {
        Self::from_json_until(payload, current_year())
    }

    /// Validate a request payload, accepting years up to `max_year`.
    ///
    /// Missing title/author is reported before an invalid year.
    pub fn from_json_until(payload: &Value, max_year: i32) -> CatalogResult<Self> {
        let title = normalize_text(payload.get("title"));
        let author = normalize_text(payload.get("author"));
        let year = parse_year(payload.get("year"), max_year);

        if title.is_empty() || author.is_empty() {
            return Err(CatalogError::MissingFields);
        }

        Ok(Self {
            title,
            author,
            year: year?,
        })
    }

    /// Same lowercased title and same year (two unknown years are equal)
    pub fn conflicts_with(&self, book: &Book) -> bool {
        book.year == self.year && book.title.to_lowercase() == self.title.to_lowercase()
    }

    pub fn into_book(self, id: Uuid) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            year: self.year,
        }
    }
}
