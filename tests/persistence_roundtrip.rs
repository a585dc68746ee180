//! Backing file round-trip tests.
//!
//! After every successful mutation, reopening the file must reproduce the
//! in-memory collection exactly.

use std::fs;

use biblioteca::{BookStore, Catalog, CatalogError, JsonFileStore};
use serde_json::json;
use tempfile::TempDir;

fn open(temp: &TempDir) -> Catalog<JsonFileStore> {
    let store = JsonFileStore::new(temp.path().join("libros.json"));
    store.init().unwrap();
    Catalog::open(store)
}

#[test]
fn test_reopen_after_creates_and_delete() {
    let temp = TempDir::new().unwrap();
    let mut catalog = open(&temp);

    catalog
        .create(&json!({
            "title": "Cien años de soledad",
            "author": "Gabriel García Márquez",
            "year": 1967
        }))
        .unwrap();
    let doomed = catalog
        .create(&json!({
            "title": "La ciudad y los perros",
            "author": "Mario Vargas Llosa",
            "year": 1963
        }))
        .unwrap();
    catalog
        .create(&json!({"title": "El Aleph", "author": "Jorge Luis Borges"}))
        .unwrap();
    let before_delete = catalog.list().unwrap().to_vec();

    let reopened = open(&temp);
    assert_eq!(reopened.list().unwrap(), before_delete.as_slice());

    catalog.delete(&doomed.id.to_string()).unwrap();
    let reopened = open(&temp);
    assert_eq!(reopened.list().unwrap(), catalog.list().unwrap());
    assert_eq!(reopened.list().unwrap().len(), 2);
}

#[test]
fn test_file_matches_store_reload() {
    let temp = TempDir::new().unwrap();
    let mut catalog = open(&temp);
    let book = catalog
        .create(&json!({"title": "  Pedro Páramo ", "author": "Juan Rulfo", "year": "1955"}))
        .unwrap();

    let raw = fs::read_to_string(temp.path().join("libros.json")).unwrap();
    assert!(raw.contains("\"title\": \"Pedro Páramo\""));
    assert!(raw.contains("\"year\": 1955"));

    let loaded = catalog.store().load().unwrap();
    assert_eq!(loaded, vec![book]);
}

#[test]
fn test_unwritable_file_rolls_back_mutations() {
    let temp = TempDir::new().unwrap();
    let mut catalog = open(&temp);
    let kept = catalog
        .create(&json!({"title": "Dune", "author": "Frank Herbert", "year": 1965}))
        .unwrap();

    // a directory in place of the file makes every write fail
    let path = temp.path().join("libros.json");
    fs::remove_file(&path).unwrap();
    fs::create_dir(&path).unwrap();

    let err = catalog
        .create(&json!({"title": "Neuromancer", "author": "William Gibson", "year": 1984}))
        .unwrap_err();
    assert!(matches!(err, CatalogError::Persistence(_)));
    assert_eq!(catalog.list().unwrap(), &[kept.clone()]);

    let err = catalog.delete(&kept.id.to_string()).unwrap_err();
    assert!(matches!(err, CatalogError::Persistence(_)));
    assert_eq!(catalog.list().unwrap(), &[kept]);
}
