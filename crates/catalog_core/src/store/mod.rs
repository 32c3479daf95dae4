//! Persistence-medium contract and implementations.
//!
//! # Responsibility
//! - Define the whole-collection read/write contract the repository drives.
//! - Keep file-format details out of repository orchestration.
//!
//! # Invariants
//! - `save` replaces the entire stored collection, never appends or patches.
//! - `load` distinguishes "never written" (`Ok(None)`) from real failures.

use crate::model::product::Product;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures of the persistence medium.
#[derive(Debug)]
pub enum StoreError {
    /// The medium exists but could not be read or written.
    Io(std::io::Error),
    /// The stored bytes do not decode as a product collection.
    Format(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "catalog store I/O failure: {err}"),
            Self::Format(err) => write!(f, "catalog store content is malformed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Format(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Format(value)
    }
}

/// Whole-collection persistence contract.
pub trait CatalogStore {
    /// Reads the full stored collection.
    ///
    /// Returns `Ok(None)` when the medium has never been written (first
    /// run), so callers can fall back to their current in-memory view.
    fn load(&self) -> StoreResult<Option<Vec<Product>>>;

    /// Replaces the stored collection with `products`, wholesale.
    fn save(&self, products: &[Product]) -> StoreResult<()>;
}

impl<T: CatalogStore + ?Sized> CatalogStore for &T {
    fn load(&self) -> StoreResult<Option<Vec<Product>>> {
        (**self).load()
    }

    fn save(&self, products: &[Product]) -> StoreResult<()> {
        (**self).save(products)
    }
}

impl<T: CatalogStore + ?Sized> CatalogStore for std::sync::Arc<T> {
    fn load(&self) -> StoreResult<Option<Vec<Product>>> {
        (**self).load()
    }

    fn save(&self, products: &[Product]) -> StoreResult<()> {
        (**self).save(products)
    }
}
