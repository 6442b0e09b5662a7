//! Surveyed entry records.
//!
//! # Responsibility
//! - Hold one surveyed entry: identity, optional point and raw attributes.
//! - Expose typed accessors for the attributes the dashboard reads.
//!
//! # Invariants
//! - Attribute key order is the source document's order.
//! - An attribute that is absent, `null` or an empty string is "not given".
//! - `GeoPoint` values are always finite and inside WGS84 ranges.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};

/// Attribute key for the stable entry identifier.
pub const ENTRY_ID_KEY: &str = "entry_id";
pub const WALL_TYPE_KEY: &str = "Wall_Type";
pub const WALL_CONDITION_KEY: &str = "Wall_Condition";
pub const VEGETATION_COVER_KEY: &str = "Vegetation_Cover";
pub const STONE_SHAPE_KEY: &str = "Stone_Shape";
pub const SURVEYOR_NAME_KEY: &str = "Surveyor_Name";
pub const PHOTO_URL_KEY: &str = "Photo_URL";
pub const CREATED_AT_KEY: &str = "created_at";

/// Stable identifier linking a feature to its rendered marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for EntryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// WGS84 coordinate in map order (latitude first).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Builds a point, rejecting non-finite or out-of-range coordinates.
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        valid.then_some(Self { lat, lng })
    }

    /// Builds a point from a GeoJSON position (`[lng, lat, ...]`).
    pub fn from_position(position: &[f64]) -> Option<Self> {
        match position {
            [lng, lat, ..] => Self::new(*lat, *lng),
            _ => None,
        }
    }
}

/// Axis-aligned geographic bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Empty bounds; invalid until extended by at least one point.
    pub fn empty() -> Self {
        Self {
            south: f64::INFINITY,
            west: f64::INFINITY,
            north: f64::NEG_INFINITY,
            east: f64::NEG_INFINITY,
        }
    }

    pub fn extend(&mut self, point: GeoPoint) {
        self.south = self.south.min(point.lat);
        self.north = self.north.max(point.lat);
        self.west = self.west.min(point.lng);
        self.east = self.east.max(point.lng);
    }

    pub fn is_valid(&self) -> bool {
        self.south.is_finite()
            && self.north.is_finite()
            && self.west.is_finite()
            && self.east.is_finite()
            && self.south <= self.north
            && self.west <= self.east
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<GeoPoint> for Bounds {
    fn from_iter<T: IntoIterator<Item = GeoPoint>>(iter: T) -> Self {
        let mut bounds = Self::empty();
        for point in iter {
            bounds.extend(point);
        }
        bounds
    }
}

/// One surveyed entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    entry_id: EntryId,
    point: Option<GeoPoint>,
    properties: Map<String, Value>,
}

impl Feature {
    pub fn new(entry_id: EntryId, point: Option<GeoPoint>, properties: Map<String, Value>) -> Self {
        Self {
            entry_id,
            point,
            properties,
        }
    }

    pub fn entry_id(&self) -> &EntryId {
        &self.entry_id
    }

    /// Point geometry; `None` when the source geometry was absent or invalid.
    pub fn point(&self) -> Option<GeoPoint> {
        self.point
    }

    /// Raw attributes in document order.
    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// Returns a string attribute, or `None` when it is not given.
    pub fn text_attribute(&self, key: &str) -> Option<&str> {
        match self.properties.get(key) {
            Some(Value::String(value)) if !value.is_empty() => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn wall_type(&self) -> Option<&str> {
        self.text_attribute(WALL_TYPE_KEY)
    }

    pub fn wall_condition(&self) -> Option<&str> {
        self.text_attribute(WALL_CONDITION_KEY)
    }

    pub fn vegetation_cover(&self) -> Option<&str> {
        self.text_attribute(VEGETATION_COVER_KEY)
    }

    pub fn surveyor_name(&self) -> Option<&str> {
        self.text_attribute(SURVEYOR_NAME_KEY)
    }

    pub fn photo_url(&self) -> Option<&str> {
        self.text_attribute(PHOTO_URL_KEY)
    }

    /// Raw creation timestamp value (string or epoch milliseconds).
    pub fn created_at(&self) -> Option<&Value> {
        self.properties
            .get(CREATED_AT_KEY)
            .filter(|value| !value.is_null())
    }

    /// Stone shapes as a list. A bare string counts as a one-item list.
    pub fn stone_shapes(&self) -> Vec<&str> {
        match self.properties.get(STONE_SHAPE_KEY) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .filter(|item| !item.is_empty())
                .collect(),
            Some(Value::String(value)) if !value.is_empty() => vec![value.as_str()],
            _ => Vec::new(),
        }
    }
}

/// Ordered, immutable collection of features loaded from one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureSet {
    features: Vec<Feature>,
}

impl FeatureSet {
    /// Wraps already de-duplicated features.
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Bounds over every feature with a valid point.
    pub fn bounds(&self) -> Bounds {
        self.features.iter().filter_map(Feature::point).collect()
    }
}

impl<'a> IntoIterator for &'a FeatureSet {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}
