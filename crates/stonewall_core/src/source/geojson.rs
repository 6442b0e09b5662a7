//! GeoJSON decoding for the two dashboard documents.
//!
//! # Responsibility
//! - Decode point-entry and wall FeatureCollections into domain types.
//! - Assign entry identities and drop repeated ids.
//!
//! # Invariants
//! - The top-level document must be a `FeatureCollection`.
//! - Document order is preserved for entries and attribute keys.
//! - Unknown geometry types are ignored, never rejected.
//! - A malformed geometry only affects its own feature.

use super::walls::WallLayer;
use super::{SourceError, SourceResult};
use crate::model::feature::{EntryId, Feature, FeatureSet, GeoPoint, ENTRY_ID_KEY};
use log::{info, warn};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashSet;

const FEATURE_COLLECTION: &str = "FeatureCollection";

type Position = Vec<f64>;

#[derive(Debug, Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(default)]
    geometry: Option<Value>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub(crate) enum RawGeometry {
    Point {
        coordinates: Position,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    GeometryCollection {
        geometries: Vec<RawGeometry>,
    },
    #[serde(other)]
    Unsupported,
}

impl RawGeometry {
    /// Line strings and polygon rings reachable from this geometry.
    pub(crate) fn paths(&self) -> Vec<Vec<GeoPoint>> {
        let paths = match self {
            Self::LineString { coordinates } => vec![to_path(coordinates)],
            Self::MultiLineString { coordinates } | Self::Polygon { coordinates } => {
                coordinates.iter().map(|line| to_path(line)).collect()
            }
            Self::MultiPolygon { coordinates } => coordinates
                .iter()
                .flat_map(|polygon| polygon.iter().map(|ring| to_path(ring)))
                .collect(),
            Self::GeometryCollection { geometries } => {
                geometries.iter().flat_map(RawGeometry::paths).collect()
            }
            Self::Point { .. } | Self::Unsupported => Vec::new(),
        };
        paths.into_iter().filter(|path| !path.is_empty()).collect()
    }
}

fn to_path(positions: &[Position]) -> Vec<GeoPoint> {
    positions
        .iter()
        .filter_map(|position| GeoPoint::from_position(position))
        .collect()
}

/// Decodes one feature geometry. Unreadable geometry yields `None`.
fn decode_geometry(value: Option<Value>, index: usize) -> Option<RawGeometry> {
    match serde_json::from_value(value?) {
        Ok(geometry) => Some(geometry),
        Err(err) => {
            warn!(
                "event=geometry_decode module=source status=skipped index={} error={}",
                index, err
            );
            None
        }
    }
}

fn parse_collection(text: &str) -> SourceResult<RawCollection> {
    let collection: RawCollection = serde_json::from_str(text)?;
    if collection.kind != FEATURE_COLLECTION {
        return Err(SourceError::NotAFeatureCollection(collection.kind));
    }
    Ok(collection)
}

/// Decodes the point-entry document.
///
/// # Contract
/// - `entry_id` strings are used verbatim; numeric ids become decimal text.
/// - A missing id becomes `feature-<index>`.
/// - A feature repeating an earlier id is dropped with a warning.
/// - Non-point or invalid geometry leaves the feature without a point.
pub fn parse_entries(text: &str) -> SourceResult<FeatureSet> {
    let collection = parse_collection(text)?;
    let total = collection.features.len();
    let mut seen = HashSet::with_capacity(total);
    let mut features = Vec::with_capacity(total);
    let mut without_point = 0usize;

    for (index, raw) in collection.features.into_iter().enumerate() {
        let properties = raw.properties.unwrap_or_default();
        let entry_id = entry_id_for(&properties, index);
        if !seen.insert(entry_id.clone()) {
            warn!(
                "event=entry_duplicate module=source status=skipped index={}",
                index
            );
            continue;
        }

        let point = match decode_geometry(raw.geometry, index) {
            Some(RawGeometry::Point { coordinates }) => GeoPoint::from_position(&coordinates),
            _ => None,
        };
        if point.is_none() {
            without_point += 1;
        }

        features.push(Feature::new(entry_id, point, properties));
    }

    info!(
        "event=entries_parse module=source status=ok total={} kept={} without_point={}",
        total,
        features.len(),
        without_point
    );
    Ok(FeatureSet::new(features))
}

/// Decodes the wall geometry document. Attributes are not consumed.
pub fn parse_walls(text: &str) -> SourceResult<WallLayer> {
    let collection = parse_collection(text)?;
    let total = collection.features.len();
    let paths = collection
        .features
        .into_iter()
        .enumerate()
        .filter_map(|(index, feature)| decode_geometry(feature.geometry, index))
        .flat_map(|geometry| geometry.paths())
        .collect::<Vec<_>>();

    info!(
        "event=walls_parse module=source status=ok features={} paths={}",
        total,
        paths.len()
    );
    Ok(WallLayer::new(paths))
}

fn entry_id_for(properties: &Map<String, Value>, index: usize) -> EntryId {
    match properties.get(ENTRY_ID_KEY) {
        Some(Value::String(value)) if !value.is_empty() => EntryId::new(value.as_str()),
        Some(Value::Number(value)) => EntryId::new(value.to_string()),
        _ => EntryId::new(format!("feature-{index}")),
    }
}
