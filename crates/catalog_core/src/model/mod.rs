//! Domain model for the product catalog.
//!
//! # Responsibility
//! - Define the canonical product record and its draft (pre-identity) form.
//! - Own the record-level validation rules.
//!
//! # Invariants
//! - `Product::id` is assigned by the repository, never by callers.
//! - `Product::code` is the business key, unique across the collection.

pub mod product;
