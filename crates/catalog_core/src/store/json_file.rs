//! Flat-file JSON store.
//!
//! # Responsibility
//! - Persist the collection as pretty-printed JSON at a fixed path.
//! - Keep replace-entire-file semantics atomic against partial writes.
//!
//! # Invariants
//! - A missing file is a valid empty-start state, not an error.
//! - Writes land via temp file + rename in the target's directory, so a
//!   crash mid-write leaves the previous file intact.

use crate::model::product::Product;
use crate::store::{CatalogStore, StoreError, StoreResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Production store: one JSON document holding the ordered collection.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "catalog".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl CatalogStore for JsonFileStore {
    fn load(&self) -> StoreResult<Option<Vec<Product>>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::Io(err)),
        };

        let products: Vec<Product> = serde_json::from_str(&text)?;
        Ok(Some(products))
    }

    fn save(&self, products: &[Product]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let text = serde_json::to_string_pretty(products)?;
        let temp = self.temp_path();
        fs::write(&temp, text)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}
