use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    books::Books,
    errors::{BooksError, Result},
};

use super::StorageBackend;

const TMP_SUFFIX: &str = "tmp";

/// File-per-books JSON storage rooted at a caller-chosen directory.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    books_dir: PathBuf,
}

impl JsonStorage {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let books_dir: PathBuf = root.into();
        fs::create_dir_all(&books_dir)?;
        Ok(Self { books_dir })
    }

    pub fn books_path(&self, name: &str) -> PathBuf {
        self.books_dir.join(format!("{}.json", canonical_name(name)))
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, books: &Books, name: &str) -> Result<()> {
        let path = self.books_path(name);
        save_books_to_path(books, &path)?;
        tracing::debug!(name, path = %path.display(), "books saved");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Books> {
        let path = self.books_path(name);
        if !path.exists() {
            return Err(BooksError::NotFound(format!("books `{name}`")));
        }
        load_books_from_path(&path)
    }

    fn list_books(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.books_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Writes the books to disk atomically by staging to a temporary file.
pub fn save_books_to_path(books: &Books, path: &Path) -> Result<()> {
    let tmp = tmp_path(path);
    let json = serde_json::to_string_pretty(books)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads a books snapshot from disk, returning structured errors on failure.
pub fn load_books_from_path(path: &Path) -> Result<Books> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn canonical_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                ch.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
