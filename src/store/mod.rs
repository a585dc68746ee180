//! # Book Store
//!
//! Persistence backends for the book collection. A store always reads and
//! writes the whole collection; there is no incremental log.

pub mod backend;
pub mod errors;
pub mod json_file;
pub mod memory;

pub use backend::BookStore;
pub use errors::{StoreError, StoreResult};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
