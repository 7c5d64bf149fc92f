pub mod json_backend;

use std::path::Path;

use crate::{books::Books, errors::Result};

/// Abstraction over persistence backends capable of storing books snapshots.
///
/// Backends store the full snapshot; summaries are always re-derived from it
/// on load, never persisted.
pub trait StorageBackend: Send + Sync {
    fn save(&self, books: &Books, name: &str) -> Result<()>;
    fn load(&self, name: &str) -> Result<Books>;
    fn list_books(&self) -> Result<Vec<String>>;

    /// Optional helpers for ad-hoc file operations. Default implementations
    /// forward to the JSON codec.
    fn save_to_path(&self, books: &Books, path: &Path) -> Result<()> {
        json_backend::save_books_to_path(books, path)
    }

    fn load_from_path(&self, path: &Path) -> Result<Books> {
        json_backend::load_books_from_path(path)
    }
}

pub use json_backend::{load_books_from_path, save_books_to_path, JsonStorage};
