//! Core domain logic for the product catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod logging;
pub mod model;
pub mod notify;
pub mod repo;
pub mod store;

pub use logging::{default_log_level, init_logging};
pub use model::product::{Product, ProductDraft, ProductId, ProductValidationError};
pub use notify::{NotificationSink, NullSink, ProductEvent, SubscriberHub};
pub use repo::product_repo::{ProductRepository, RepoError, RepoResult};
pub use store::{CatalogStore, JsonFileStore, MemoryStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
