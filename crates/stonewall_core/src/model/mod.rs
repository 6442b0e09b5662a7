//! Survey data model.
//!
//! # Responsibility
//! - Define the immutable records loaded from the point-entry document.
//! - Define the filter criteria tuple read by the engine.
//!
//! # Invariants
//! - Every `Feature` in a `FeatureSet` has a unique `EntryId`.
//! - Features are never mutated after load.

pub mod criteria;
pub mod feature;
