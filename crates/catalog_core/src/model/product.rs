//! Product record and draft validation.
//!
//! # Responsibility
//! - Define the on-disk/in-memory product shape shared by store and repo.
//! - Validate drafts before the repository assigns an identity.
//!
//! # Invariants
//! - `id` is stable for the lifetime of a record and never reused.
//! - Drafts carry every attribute except `id`.
//! - Zero is a valid `price` and a valid `stock`; blank text fields are not.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Repository-assigned integer identity.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProductId = u64;

/// One catalog entry, identity included.
///
/// Field names double as the serialized attribute names, so the on-disk
/// encoding stays compatible with pre-existing catalog files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Assigned by the repository on add; unique within the collection.
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: f64,
    /// Reference to an image resource.
    pub thumbnail: String,
    /// Business key, unique across the collection and independent of `id`.
    pub code: String,
    pub stock: u32,
}

/// Candidate record supplied by callers on add/update.
///
/// Callers never choose an identity; the repository pairs a draft with
/// the next counter value to form a [`Product`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    pub code: String,
    pub stock: u32,
}

/// Draft-level validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductValidationError {
    /// A required text attribute is empty or whitespace-only.
    BlankField(&'static str),
    /// `price` is negative, NaN or infinite.
    InvalidPrice,
}

impl Display for ProductValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "required field `{field}` is blank"),
            Self::InvalidPrice => write!(f, "price must be a finite, non-negative number"),
        }
    }
}

impl Error for ProductValidationError {}

impl ProductDraft {
    /// Checks the draft against the record-level rules.
    ///
    /// # Contract
    /// - `title`, `description`, `thumbnail`, `code` must contain
    ///   non-whitespace text.
    /// - `price` must be finite and `>= 0.0`; zero is a legitimate price.
    /// - `stock` is unconstrained; zero means out of stock, which is a
    ///   legitimate state, not a missing field.
    pub fn validate(&self) -> Result<(), ProductValidationError> {
        for (name, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("thumbnail", &self.thumbnail),
            ("code", &self.code),
        ] {
            if value.trim().is_empty() {
                return Err(ProductValidationError::BlankField(name));
            }
        }

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ProductValidationError::InvalidPrice);
        }

        Ok(())
    }

    /// Pairs this draft with an identity to form a stored record.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            thumbnail: self.thumbnail,
            code: self.code,
            stock: self.stock,
        }
    }
}

impl Product {
    /// Replaces every non-identity attribute with those of `draft`.
    ///
    /// `id` is preserved; no validation is applied here (the repository
    /// decides which call sites re-validate).
    pub fn apply_draft(&mut self, draft: ProductDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.price = draft.price;
        self.thumbnail = draft.thumbnail;
        self.code = draft.code;
        self.stock = draft.stock;
    }
}
