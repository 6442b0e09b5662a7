//! Rendered markers and the entry-to-marker identity index.
//!
//! # Invariants
//! - Every feature with a valid point has exactly one marker.
//! - The index is built once and never modified.

use super::popup::render_popup;
use crate::model::feature::{EntryId, Feature, GeoPoint};
use std::collections::HashMap;
use std::rc::Rc;

/// Circle marker style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub radius: f32,
    pub fill_color: &'static str,
    pub color: &'static str,
    pub weight: f32,
    pub opacity: f32,
    pub fill_opacity: f32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 7.0,
            fill_color: "#ff0000ff",
            color: "#ffffffff",
            weight: 1.0,
            opacity: 0.9,
            fill_opacity: 0.9,
        }
    }
}

/// One rendered entry marker with its bound popup.
#[derive(Debug, PartialEq)]
pub struct Marker {
    pub entry_id: EntryId,
    pub position: GeoPoint,
    pub style: MarkerStyle,
    pub popup_html: String,
}

/// Shared marker handle; clones refer to the same rendered marker.
pub type MarkerHandle = Rc<Marker>;

/// Lookup from entry identity to rendered marker identity.
#[derive(Debug, Default)]
pub struct MarkerIndex {
    markers: HashMap<EntryId, MarkerHandle>,
    order: Vec<EntryId>,
}

impl MarkerIndex {
    /// Builds one marker per feature that has a point.
    pub fn build<'a, I>(features: I) -> Self
    where
        I: IntoIterator<Item = &'a Feature>,
    {
        let mut index = Self::default();
        for feature in features {
            let Some(position) = feature.point() else {
                continue;
            };
            let marker = Rc::new(Marker {
                entry_id: feature.entry_id().clone(),
                position,
                style: MarkerStyle::default(),
                popup_html: render_popup(feature),
            });
            if index
                .markers
                .insert(feature.entry_id().clone(), marker)
                .is_none()
            {
                index.order.push(feature.entry_id().clone());
            }
        }
        index
    }

    pub fn get(&self, entry_id: &EntryId) -> Option<&MarkerHandle> {
        self.markers.get(entry_id)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// All markers in feature order.
    pub fn handles(&self) -> Vec<MarkerHandle> {
        self.order
            .iter()
            .filter_map(|entry_id| self.markers.get(entry_id).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::MarkerIndex;
    use crate::model::feature::{EntryId, Feature, GeoPoint};
    use serde_json::Map;
    use std::rc::Rc;

    #[test]
    fn index_skips_features_without_points() {
        let features = vec![
            Feature::new(EntryId::new("a"), GeoPoint::new(41.5, -71.1), Map::new()),
            Feature::new(EntryId::new("b"), None, Map::new()),
        ];
        let index = MarkerIndex::build(&features);
        assert_eq!(index.len(), 1);
        assert!(index.get(&EntryId::new("a")).is_some());
        assert!(index.get(&EntryId::new("b")).is_none());
    }

    #[test]
    fn lookups_return_the_same_marker_identity() {
        let features = vec![Feature::new(
            EntryId::new("a"),
            GeoPoint::new(41.5, -71.1),
            Map::new(),
        )];
        let index = MarkerIndex::build(&features);
        let first = index.get(&EntryId::new("a")).unwrap();
        let handles = index.handles();
        assert!(Rc::ptr_eq(first, &handles[0]));
    }
}
