//! Filter-and-sync engine.
//!
//! # Responsibility
//! - Own the loaded feature set, its marker index and the visible layer.
//! - Run evaluate + reconcile for every filter change.
//! - Resolve entry selections to the indexed marker.
//!
//! # Invariants
//! - The feature set and marker index never change after construction.
//! - After every reconcile the visible layer holds exactly one marker per
//!   filtered feature with a point, in filtered order, and nothing else.
//! - Markers re-added by reconcile are the indexed handles, never copies.

use crate::filter::{derive_vocabularies, evaluate, Vocabularies};
use crate::layer::{ClusterLayer, MapSurface, MarkerHandle, MarkerIndex, POPUP_MAX_WIDTH};
use crate::model::criteria::FilterCriteria;
use crate::model::feature::{EntryId, Feature, FeatureSet};
use crate::recent::recent_entries;
use log::{debug, info};
use std::collections::HashSet;
use std::rc::Rc;
use std::time::Instant;

/// Replaces the visible layer with the markers of `filtered`.
///
/// Features without a marker (no valid point) are skipped; a feature listed
/// twice contributes one marker.
pub fn reconcile<C: ClusterLayer>(layer: &mut C, index: &MarkerIndex, filtered: &[&Feature]) {
    let mut seen = HashSet::with_capacity(filtered.len());
    let mut handles: Vec<MarkerHandle> = Vec::with_capacity(filtered.len());
    for feature in filtered {
        let entry_id = feature.entry_id();
        if !seen.insert(entry_id) {
            continue;
        }
        if let Some(marker) = index.get(entry_id) {
            handles.push(Rc::clone(marker));
        }
    }

    layer.clear_layers();
    layer.add_markers(&handles);
}

/// Stateful engine constructed once the point entries are loaded.
pub struct FilterEngine<C: ClusterLayer> {
    features: FeatureSet,
    index: MarkerIndex,
    vocabularies: Vocabularies,
    layer: C,
}

impl<C: ClusterLayer> FilterEngine<C> {
    /// Builds the marker index and shows every marker.
    pub fn new(features: FeatureSet, mut layer: C) -> Self {
        let index = MarkerIndex::build(&features);
        let vocabularies = derive_vocabularies(&features);

        layer.clear_layers();
        layer.add_markers(&index.handles());

        info!(
            "event=engine_init module=engine status=ok features={} markers={} wall_types={} vegetation={}",
            features.len(),
            index.len(),
            vocabularies.wall_types.len(),
            vocabularies.vegetation.len()
        );

        Self {
            features,
            index,
            vocabularies,
            layer,
        }
    }

    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    pub fn marker_index(&self) -> &MarkerIndex {
        &self.index
    }

    pub fn vocabularies(&self) -> &Vocabularies {
        &self.vocabularies
    }

    pub fn layer(&self) -> &C {
        &self.layer
    }

    /// Matching features in document order. Pure.
    pub fn evaluate(&self, criteria: &FilterCriteria) -> Vec<&Feature> {
        evaluate(&self.features, criteria)
    }

    /// Evaluates `criteria` and reconciles the visible layer to the result.
    ///
    /// Returns the number of matching features.
    pub fn apply(&mut self, criteria: &FilterCriteria) -> usize {
        let started_at = Instant::now();
        let filtered = evaluate(&self.features, criteria);
        reconcile(&mut self.layer, &self.index, &filtered);

        info!(
            "event=filter_apply module=engine status=ok query_len={} wall_type_set={} vegetation_set={} matched={} visible={} total={} duration_us={}",
            criteria.text.chars().count(),
            !criteria.wall_type.is_empty(),
            !criteria.vegetation.is_empty(),
            filtered.len(),
            self.layer.markers().len(),
            self.features.len(),
            started_at.elapsed().as_micros()
        );
        filtered.len()
    }

    /// Up to `limit` entries, newest first.
    pub fn recent(&self, limit: usize) -> Vec<&Feature> {
        recent_entries(&self.features, limit)
    }

    pub fn marker(&self, entry_id: &EntryId) -> Option<&MarkerHandle> {
        self.index.get(entry_id)
    }

    /// Centers `map` on the entry's marker and opens its popup.
    ///
    /// Returns `false` when the entry has no marker.
    pub fn focus<M: MapSurface>(&self, entry_id: &EntryId, map: &mut M, zoom: u8) -> bool {
        let Some(marker) = self.index.get(entry_id) else {
            debug!("event=entry_focus module=engine status=skipped reason=no_marker");
            return false;
        };
        map.set_view(marker.position, zoom);
        map.open_popup(marker, POPUP_MAX_WIDTH);
        true
    }
}
