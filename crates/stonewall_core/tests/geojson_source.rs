mod common;

use common::{survey_document, walls_document, write_json};
use serde_json::json;
use stonewall_core::{
    load_dashboard_sources, load_entries, load_walls, DashboardConfig, MarkerIndex, SourceError,
};

#[test]
fn load_entries_reads_features_in_document_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(dir.path(), "data.geojson", &survey_document());

    let set = load_entries(&path).unwrap();
    assert_eq!(set.len(), 12);
    assert_eq!(set.features()[0].entry_id().as_str(), "e01");
    assert_eq!(set.features()[11].entry_id().as_str(), "e12");

    let keys = set.features()[0]
        .properties()
        .keys()
        .cloned()
        .collect::<Vec<_>>();
    assert_eq!(keys[0], "entry_id");
    assert_eq!(keys[1], "Wall_Type");
    assert_eq!(keys.last().unwrap(), "created_at");
}

#[test]
fn every_located_feature_gets_exactly_one_marker() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(dir.path(), "data.geojson", &survey_document());
    let set = load_entries(&path).unwrap();

    let index = MarkerIndex::build(&set);
    assert_eq!(index.len(), set.len());
    for feature in &set {
        let marker = index.get(feature.entry_id()).unwrap();
        assert_eq!(Some(marker.position), feature.point());
    }
}

#[test]
fn broken_geometries_do_not_fail_the_entries_load() {
    let dir = tempfile::tempdir().unwrap();
    let mut document = survey_document();
    document["features"][0]["geometry"] = json!({ "type": "Point", "coordinates": null });
    document["features"][1]["geometry"] = json!({ "coordinates": [-71.1, 41.5] });
    let path = write_json(dir.path(), "data.geojson", &document);

    let set = load_entries(&path).unwrap();
    assert_eq!(set.len(), 12);
    assert!(set.features()[0].point().is_none());
    assert!(set.features()[1].point().is_none());
    assert_eq!(MarkerIndex::build(&set).len(), 10);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.geojson");
    let err = load_walls(&path).unwrap_err();
    assert!(matches!(err, SourceError::Io { .. }));
    assert!(err.to_string().contains("nope.geojson"));
}

#[test]
fn sources_resolve_independently() {
    let dir = tempfile::tempdir().unwrap();
    let config = DashboardConfig {
        data_path: write_json(dir.path(), "data.geojson", &survey_document()),
        walls_path: dir.path().join("missing-walls.geojson"),
        ..DashboardConfig::default()
    };

    let sources = load_dashboard_sources(&config);
    assert!(sources.walls.is_err());
    assert_eq!(sources.entries.unwrap().len(), 12);

    let config = DashboardConfig {
        data_path: dir.path().join("missing-data.geojson"),
        walls_path: write_json(dir.path(), "walls.geojson", &walls_document()),
        ..DashboardConfig::default()
    };
    let sources = load_dashboard_sources(&config);
    assert!(sources.entries.is_err());
    assert_eq!(sources.walls.unwrap().paths().len(), 2);
}
