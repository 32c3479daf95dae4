//! Product repository over a whole-collection store.
//!
//! # Responsibility
//! - Reconcile the in-memory view with the store before every operation.
//! - Enforce draft validation and business-code uniqueness on add.
//! - Assign monotonic identities and reflect mutations to store and sink.
//!
//! # Invariants
//! - `id` and `code` are unique within the collection.
//! - The identity counter never goes backwards and ids are never reused,
//!   even after removals.
//! - `Added`/`Deleted` events fire after the in-memory mutation and
//!   before persistence, matching the subscriber-visible ordering of the
//!   original wire contract.

use crate::model::product::{Product, ProductDraft, ProductId, ProductValidationError};
use crate::notify::{NotificationSink, ProductEvent};
use crate::store::{CatalogStore, StoreError};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Mutex;

pub type RepoResult<T> = Result<T, RepoError>;

/// Typed outcome for every repository failure path.
#[derive(Debug)]
pub enum RepoError {
    Validation(ProductValidationError),
    /// A record with this business code already exists.
    DuplicateCode(String),
    NotFound(ProductId),
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateCode(code) => {
                write!(f, "a product with code `{code}` already exists")
            }
            Self::NotFound(id) => write!(f, "product not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::DuplicateCode(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<ProductValidationError> for RepoError {
    fn from(value: ProductValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Transient in-memory view plus the process-lifetime identity counter.
struct CatalogState {
    products: Vec<Product>,
    next_id: ProductId,
}

/// The catalog core.
///
/// Holds the store and sink collaborators and a lock serializing every
/// reload → mutate → persist sequence (single-writer discipline).
pub struct ProductRepository<S: CatalogStore, N: NotificationSink> {
    store: S,
    sink: N,
    state: Mutex<CatalogState>,
}

impl<S: CatalogStore, N: NotificationSink> ProductRepository<S, N> {
    /// Creates a repository bound to its two collaborators.
    ///
    /// No I/O happens here; the first operation performs the first load.
    pub fn new(store: S, sink: N) -> Self {
        Self {
            store,
            sink,
            state: Mutex::new(CatalogState {
                products: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Validates `draft`, assigns the next identity, appends, notifies
    /// subscribers with `productAdded`, persists.
    ///
    /// # Errors
    /// - `Validation` when a required field is blank or the price is
    ///   invalid; the collection is untouched and nothing is emitted.
    /// - `DuplicateCode` when `draft.code` collides after reconciliation.
    /// - `Store` when the load or the save fails. A failed save leaves
    ///   the in-memory view mutated; the next successful reconciliation
    ///   restores the disk view.
    pub fn add(&self, draft: ProductDraft) -> RepoResult<Product> {
        let mut state = self.lock_state();
        self.reconcile(&mut state)?;

        draft.validate()?;
        if let Some(existing) = state.products.iter().find(|p| p.code == draft.code) {
            warn!(
                "event=add_rejected module=repo reason=duplicate_code code={} existing_id={}",
                draft.code, existing.id
            );
            return Err(RepoError::DuplicateCode(draft.code));
        }

        let id = state.next_id;
        state.next_id += 1;
        let product = draft.into_product(id);
        state.products.push(product.clone());

        self.sink.emit(&ProductEvent::Added(product.clone()));
        self.store.save(&state.products)?;

        info!(
            "event=product_added module=repo id={} code={} title={}",
            product.id, product.code, product.title
        );
        Ok(product)
    }

    /// Returns the collection in insertion order, truncated to `limit`
    /// when one is given. An empty catalog is an empty vector, not an
    /// error.
    pub fn list(&self, limit: Option<usize>) -> RepoResult<Vec<Product>> {
        let mut state = self.lock_state();
        self.reconcile(&mut state)?;

        let mut products = state.products.clone();
        if let Some(limit) = limit {
            products.truncate(limit);
        }
        Ok(products)
    }

    /// Linear lookup by identity. `Ok(None)` is the absence signal.
    pub fn get(&self, id: ProductId) -> RepoResult<Option<Product>> {
        let mut state = self.lock_state();
        self.reconcile(&mut state)?;

        let found = state.products.iter().find(|p| p.id == id).cloned();
        if found.is_none() {
            debug!("event=lookup_miss module=repo id={id}");
        }
        Ok(found)
    }

    /// Replaces every non-identity attribute of record `id` with those
    /// of `draft`, verbatim, then persists.
    ///
    /// No draft validation is re-applied and no event is emitted: the
    /// wire contract defines exactly two event names, and update is
    /// deliberately not one of them.
    ///
    /// # Errors
    /// - `NotFound` when no record carries `id`; nothing is mutated.
    /// - `Store` on load or save failure.
    pub fn update(&self, id: ProductId, draft: ProductDraft) -> RepoResult<Product> {
        let mut state = self.lock_state();
        self.reconcile(&mut state)?;

        let Some(product) = state.products.iter_mut().find(|p| p.id == id) else {
            warn!("event=update_rejected module=repo reason=not_found id={id}");
            return Err(RepoError::NotFound(id));
        };

        product.apply_draft(draft);
        let updated = product.clone();
        self.store.save(&state.products)?;

        info!("event=product_updated module=repo id={id}");
        Ok(updated)
    }

    /// Removes record `id`, notifies subscribers with `productDeleted`
    /// carrying the pre-removal record, persists. Returns that record.
    ///
    /// # Errors
    /// - `NotFound` when no record carries `id`; nothing is mutated.
    /// - `Store` on load or save failure.
    pub fn remove(&self, id: ProductId) -> RepoResult<Product> {
        let mut state = self.lock_state();
        self.reconcile(&mut state)?;

        let Some(index) = state.products.iter().position(|p| p.id == id) else {
            warn!("event=remove_rejected module=repo reason=not_found id={id}");
            return Err(RepoError::NotFound(id));
        };

        let removed = state.products.remove(index);
        self.sink.emit(&ProductEvent::Deleted(removed.clone()));
        self.store.save(&state.products)?;

        info!(
            "event=product_deleted module=repo id={} code={}",
            removed.id, removed.code
        );
        Ok(removed)
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, CatalogState> {
        // A poisoned lock means a panic mid-operation; the disk view is
        // still authoritative, so recover the guard and reconcile as usual.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Replaces the in-memory view with the stored collection.
    ///
    /// `Ok(None)` from the store (never written) keeps the current view,
    /// which is the empty initial state on first run. The identity
    /// counter only ever advances, so ids stay unique across the process
    /// lifetime even when records were removed on disk.
    fn reconcile(&self, state: &mut CatalogState) -> RepoResult<()> {
        match self.store.load()? {
            Some(products) => {
                let max_id = products.iter().map(|p| p.id).max().unwrap_or(0);
                state.next_id = state.next_id.max(max_id + 1);
                state.products = products;
            }
            None => {
                debug!("event=reconcile_empty_start module=repo");
            }
        }
        Ok(())
    }
}
