#![allow(dead_code)]

use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use stonewall_core::{parse_entries, FeatureSet};

pub const CLEAR: &str = "Clear (0-25% covered)";
pub const SOME: &str = "Some overgrowth (25-50% covered)";
pub const QUITE: &str = "Quite covered (50-75% covered)";
pub const HIDDEN: &str = "Hidden (75-100% covered)";

pub fn entry(
    id: &str,
    lng: f64,
    lat: f64,
    wall_type: &str,
    condition: &str,
    vegetation: &str,
    created_at: &str,
) -> Value {
    json!({
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": [lng, lat] },
        "properties": {
            "entry_id": id,
            "Wall_Type": wall_type,
            "Wall_Condition": condition,
            "Vegetation_Cover": vegetation,
            "Stone_Shape": ["Round", "Flat"],
            "Surveyor_Name": null,
            "Photo_URL": null,
            "created_at": created_at
        }
    })
}

pub fn collection(features: Vec<Value>) -> Value {
    json!({ "type": "FeatureCollection", "features": features })
}

/// Twelve entries around Little Compton with mixed attributes.
pub fn survey_document() -> Value {
    let mut features = vec![
        entry("e01", -71.171, 41.510, "Dry Stone", "Good", CLEAR, "2025-05-01T09:00:00Z"),
        entry("e02", -71.172, 41.511, "Mortared", "Fair", SOME, "2025-05-02T09:00:00Z"),
        entry("e03", -71.173, 41.512, "Dry Stone", "Poor", HIDDEN, "2025-05-03T09:00:00Z"),
        entry("e04", -71.174, 41.513, "Dry Stone", "Good", CLEAR, "2025-05-04T09:00:00Z"),
        entry("e05", -71.175, 41.514, "Single Stack", "Good", QUITE, "2025-05-05T09:00:00Z"),
        entry("e06", -71.176, 41.515, "Mortared", "Collapsed", CLEAR, "2025-05-06T09:00:00Z"),
        entry("e07", -71.177, 41.516, "Dry Stone", "Fair", SOME, "2025-05-07T09:00:00Z"),
        entry("e08", -71.178, 41.517, "Double Wall", "Good", "Unknown", "2025-05-08T09:00:00Z"),
        entry("e09", -71.179, 41.518, "Dry Stone", "Good", CLEAR, "not a date"),
        entry("e10", -71.180, 41.519, "Single Stack", "Poor", HIDDEN, "2025-05-10T09:00:00Z"),
        entry("e11", -71.181, 41.520, "Dry Stone", "Good", QUITE, "2025-05-11T09:00:00Z"),
    ];
    features.push(json!({
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": [-71.182, 41.521] },
        "properties": {
            "entry_id": "e12",
            "Wall_Type": "Dry Stone",
            "Wall_Condition": "Good",
            "Vegetation_Cover": CLEAR,
            "Stone_Shape": ["Angular", "Boulder"],
            "Surveyor_Name": "Hester Bright",
            "Photo_URL": "https://example.org/e12.jpg",
            "created_at": "2025-05-12T09:00:00Z"
        }
    }));
    collection(features)
}

pub fn walls_document() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[-71.19, 41.50], [-71.16, 41.53]]
                },
                "properties": { "OBJECTID": 1 }
            },
            {
                "type": "Feature",
                "geometry": {
                    "type": "MultiLineString",
                    "coordinates": [[[-71.18, 41.505], [-71.17, 41.506]]]
                },
                "properties": { "OBJECTID": 2 }
            }
        ]
    })
}

pub fn survey() -> FeatureSet {
    parse_entries(&survey_document().to_string()).unwrap()
}

pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, value.to_string()).unwrap();
    path
}
