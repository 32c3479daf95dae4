//! Repository layer: the catalog's single authoritative orchestrator.
//!
//! # Responsibility
//! - Drive reconcile → validate/locate → mutate → persist/notify sequences.
//! - Own identity assignment and the record-level uniqueness invariants.
//!
//! # Invariants
//! - Disk is authoritative: every public operation reconciles first.
//! - The whole sequence runs under one lock, so interleaved callers
//!   cannot overwrite each other's changes.
//! - Every failure path surfaces as a typed `RepoError`, never a silent
//!   no-op.

pub mod product_repo;
