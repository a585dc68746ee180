//! # JSON File Backend
//!
//! The collection lives in a single pretty-printed JSON array. Every save
//! rewrites the file in full with a blocking write.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::backend::BookStore;
use super::errors::{StoreError, StoreResult};
use crate::catalog::Book;

/// Default backing file name
pub const DEFAULT_DATA_FILE: &str = "libros.json";

/// Book store backed by one JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the file at `path`. The file is not touched.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file with an empty collection if it does not exist.
    ///
    /// Returns `true` when a new file was written.
    pub fn init(&self) -> StoreResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        self.save(&[])?;
        Ok(true)
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> StoreResult<Vec<Book>> {
        let raw = fs::read_to_string(&self.path)?;
        let root: Value = serde_json::from_str(&raw)?;

        if !root.is_array() {
            return Err(StoreError::Format("JSON root is not an array".to_string()));
        }

        Ok(serde_json::from_value(root)?)
    }

    fn save(&self, books: &[Book]) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(books)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use uuid::Uuid;

    fn sample_book(title: &str, year: Option<i32>) -> Book {
        Book {
            id: Uuid::new_v4(),
            title: title.to_string(),
            author: "Someone".to_string(),
            year,
        }
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("libros.json"));

        let books = vec![sample_book("Dune", Some(1965)), sample_book("Untitled", None)];
        store.save(&books).unwrap();

        assert_eq!(store.load().unwrap(), books);
    }

    #[test]
    fn test_file_is_pretty_printed() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("libros.json"));

        store.save(&[sample_book("Dune", None)]).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.starts_with("[\n  {\n    \"id\""));
        assert!(raw.contains("\"year\": null"));
    }

    #[test]
    fn test_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("missing.json"));

        assert!(matches!(store.load(), Err(StoreError::Io(_))));
    }

    #[test]
    fn test_non_array_root_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("libros.json");
        fs::write(&path, r#"{"books": []}"#).unwrap();

        let result = JsonFileStore::new(&path).load();
        assert!(matches!(result, Err(StoreError::Format(_))));
    }

    #[test]
    fn test_malformed_json_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("libros.json");
        fs::write(&path, "[{").unwrap();

        assert!(matches!(JsonFileStore::new(&path).load(), Err(StoreError::Format(_))));
    }

    #[test]
    fn test_record_without_year_loads_as_none() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("libros.json");
        fs::write(
            &path,
            r#"[{"id":"9b2f6c1e-3d4a-4f5b-8c6d-7e8f9a0b1c2d","title":"Ficciones","author":"Borges"}]"#,
        )
        .unwrap();

        let books = JsonFileStore::new(&path).load().unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].year, None);
    }

    #[test]
    fn test_init_creates_empty_collection_once() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("nested/dir/libros.json"));

        assert!(store.init().unwrap());
        assert!(store.load().unwrap().is_empty());

        store.save(&[sample_book("Dune", Some(1965))]).unwrap();
        assert!(!store.init().unwrap());
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
