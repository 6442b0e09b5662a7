//! Filter vocabularies derived from the data.
//!
//! # Invariants
//! - Only distinct, non-empty string values are collected.
//! - Wall types keep first-seen document order.
//! - Vegetation values follow the canonical coverage bands first (low to
//!   high), then any other value alphabetically, ignoring case.

use crate::model::feature::Feature;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Canonical coverage bands, lowest coverage first.
pub const VEGETATION_BANDS: [&str; 4] = [
    "Clear (0-25% covered)",
    "Some overgrowth (25-50% covered)",
    "Quite covered (50-75% covered)",
    "Hidden (75-100% covered)",
];

/// Selectable values for the two categorical filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabularies {
    pub wall_types: Vec<String>,
    pub vegetation: Vec<String>,
}

/// Collects the distinct wall types and vegetation covers of `features`.
pub fn derive_vocabularies<'a, I>(features: I) -> Vocabularies
where
    I: IntoIterator<Item = &'a Feature>,
{
    let mut wall_types = Vec::new();
    let mut vegetation = Vec::new();
    let mut seen_walls = HashSet::new();
    let mut seen_vegetation = HashSet::new();

    for feature in features {
        if let Some(value) = feature.wall_type() {
            if seen_walls.insert(value) {
                wall_types.push(value.to_string());
            }
        }
        if let Some(value) = feature.vegetation_cover() {
            if seen_vegetation.insert(value) {
                vegetation.push(value.to_string());
            }
        }
    }

    sort_vegetation(&mut vegetation);
    Vocabularies {
        wall_types,
        vegetation,
    }
}

/// Orders vegetation values by coverage band, then alphabetically.
pub fn sort_vegetation(values: &mut [String]) {
    values.sort_by(|a, b| compare_vegetation(a, b));
}

fn compare_vegetation(a: &str, b: &str) -> Ordering {
    let rank = |value: &str| VEGETATION_BANDS.iter().position(|band| *band == value);
    match (rank(a), rank(b)) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b)),
    }
}
