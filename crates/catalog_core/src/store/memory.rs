//! In-memory store for tests.
//!
//! # Responsibility
//! - Mirror `JsonFileStore` semantics without touching disk.
//! - Let tests inject load/save failures to exercise the I/O error paths.

use crate::model::product::Product;
use crate::store::{CatalogStore, StoreError, StoreResult};
use std::io::{Error as IoError, ErrorKind};
use std::sync::Mutex;

#[derive(Default)]
struct MemoryState {
    /// `None` mirrors the never-written file state.
    products: Option<Vec<Product>>,
    fail_next_load: bool,
    fail_next_save: bool,
}

/// Test double holding the collection behind a mutex.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a one-shot I/O failure on the next `load`.
    pub fn fail_next_load(&self) {
        self.state.lock().expect("memory store lock").fail_next_load = true;
    }

    /// Arms a one-shot I/O failure on the next `save`.
    pub fn fail_next_save(&self) {
        self.state.lock().expect("memory store lock").fail_next_save = true;
    }

    /// Returns the stored collection as tests see it on disk.
    pub fn snapshot(&self) -> Option<Vec<Product>> {
        self.state
            .lock()
            .expect("memory store lock")
            .products
            .clone()
    }
}

impl CatalogStore for MemoryStore {
    fn load(&self) -> StoreResult<Option<Vec<Product>>> {
        let mut state = self.state.lock().expect("memory store lock");
        if state.fail_next_load {
            state.fail_next_load = false;
            return Err(StoreError::Io(IoError::new(
                ErrorKind::Other,
                "injected load failure",
            )));
        }
        Ok(state.products.clone())
    }

    fn save(&self, products: &[Product]) -> StoreResult<()> {
        let mut state = self.state.lock().expect("memory store lock");
        if state.fail_next_save {
            state.fail_next_save = false;
            return Err(StoreError::Io(IoError::new(
                ErrorKind::Other,
                "injected save failure",
            )));
        }
        state.products = Some(products.to_vec());
        Ok(())
    }
}
