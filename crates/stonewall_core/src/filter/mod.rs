//! Client-side filtering over the loaded feature set.
//!
//! # Responsibility
//! - Derive dropdown vocabularies from the data.
//! - Evaluate the `(text, wall type, vegetation)` predicate.
//!
//! # Invariants
//! - Both operations are pure: no feature is mutated and nothing can fail.
//! - Filtering is stable and idempotent.

pub mod evaluate;
pub mod vocab;

pub use evaluate::{evaluate, matches, search_blob};
pub use vocab::{derive_vocabularies, Vocabularies, VEGETATION_BANDS};
