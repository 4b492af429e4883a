// Integration tests for the full pipeline:
//   column detection, filtering, classification, job hulls, overlay merging,
//   and scene export.

use std::io::Write;

use geo::Coord;
use polemap::{
    build_scene, read_rows_csv_str, scene_to_geojson, MapConfig, MarkerCategory, OverlayLoadError,
    PipelineError, RowTable, ViewMode,
};

const HEADER: [&str; 9] = [
    "job_name", "latitude", "longitude", "node_type", "scid", "MR_level", "MR_cost", "warning", "company_1",
];

fn table(rows: Vec<Vec<&str>>) -> RowTable {
    RowTable::from_records(&HEADER, rows)
}

#[test]
fn mr_example_yields_three_markers_and_one_hull() {
    let table = table(vec![
        vec!["J1", "10", "10", "pole", "1", "No MR", "", "", ""],
        vec!["J1", "10", "11", "pole", "2", "Complex Power MR", "", "", ""],
        vec!["J1", "11", "10", "pole", "3", "No MR", "", "", ""],
    ]);
    let build = build_scene(&table, &MapConfig::new(ViewMode::Mr)).unwrap();
    let scene = &build.scene;

    let colors = scene.markers().iter().map(|m| m.color.as_str()).collect::<Vec<_>>();
    assert_eq!(colors, vec!["green", "red", "green"]);

    assert_eq!(scene.hulls().len(), 1);
    let hull = &scene.hulls()[0];
    assert_eq!(hull.job_name, "J1");
    let ring = &hull.ring().0;
    assert_eq!(ring.len(), 4);
    assert_eq!(ring.first(), ring.last());
    for corner in [Coord { x: 10.0, y: 10.0 }, Coord { x: 11.0, y: 10.0 }, Coord { x: 10.0, y: 11.0 }] {
        assert!(ring.contains(&corner));
    }
    assert!(build.overlay_error.is_none());
}

#[test]
fn missing_columns_abort_the_run() {
    let table = RowTable::from_records(&["job_name", "latitude", "longitude", "node_type", "scid"], Vec::<Vec<&str>>::new());
    let Err(PipelineError::Configuration { missing }) = build_scene(&table, &MapConfig::new(ViewMode::Utility)) else {
        panic!("expected a configuration error");
    };
    assert_eq!(missing, vec!["MR_level*", "*MR_cost*", "*company*"]);
}

#[test]
fn utility_view_prefers_pla_jobs_and_drops_excluded_companies() {
    let table = table(vec![
        vec!["jobA", "26.1", "-97.5", "pole", "1", "", "", "", "AEP"],
        vec!["jobA PLA", "26.1", "-97.5", "pole", "1", "", "", "", "AEP"],
        vec!["jobB", "26.2", "-97.4", "pole", "2", "", "", "", "Charter"],
        vec!["jobB", "26.3", "-97.4", "pole", "3", "", "", "", ""],
        vec!["jobB copy", "26.3", "-97.4", "pole", "4", "", "", "", "AEP"],
    ]);
    let build = build_scene(&table, &MapConfig::new(ViewMode::Utility)).unwrap();

    let jobs = build.scene.markers().iter().map(|m| m.job_name.as_str()).collect::<Vec<_>>();
    assert_eq!(jobs, vec!["jobA PLA", "jobB"]);
    assert_eq!(build.scene.markers()[0].category, MarkerCategory::SingleCompany("AEP".into()));
    assert_eq!(build.scene.markers()[1].category, MarkerCategory::NoCompany);
    assert_eq!(build.stats.superseded, 1);
    assert_eq!(build.stats.excluded_company, 1);
    assert_eq!(build.stats.copies, 1);
}

#[test]
fn every_record_gets_exactly_one_category() {
    let table = table(vec![
        vec!["J1", "1", "1", "pole", "1", "No MR", "$0", "", "AEP"],
        vec!["J1", "1", "2", "pole", "2", "Bogus", "", "", "Lumen"],
        vec!["J1", "2", "1", "pole", "3", "", "", "Pole rotten", "AEP"],
        vec!["J1", "2", "2", "pole", "4", "Deferred", "", "", ""],
    ]);
    for view in [ViewMode::Mr, ViewMode::Utility] {
        let build = build_scene(&table, &MapConfig::new(view)).unwrap();
        assert_eq!(build.scene.markers().len(), 4);
        let again = build_scene(&table, &MapConfig::new(view)).unwrap();
        assert_eq!(build.scene.markers(), again.scene.markers());
    }

    let mr = build_scene(&table, &MapConfig::new(ViewMode::Mr)).unwrap();
    let categories = mr.scene.markers().iter().map(|m| m.category.clone()).collect::<Vec<_>>();
    assert_eq!(categories, vec![
        MarkerCategory::StyledLevel("No MR".into()),
        MarkerCategory::MissingLevel,
        MarkerCategory::Warning,
        MarkerCategory::StyledLevel("Deferred".into()),
    ]);
}

#[test]
fn unreadable_overlay_keeps_markers_and_hulls() {
    let table = table(vec![
        vec!["J1", "10", "10", "pole", "1", "No MR", "", "", ""],
        vec!["J1", "10", "11", "pole", "2", "No MR", "", "", ""],
        vec!["J1", "11", "10", "pole", "3", "No MR", "", "", ""],
    ]);
    let mut overlay = tempfile::NamedTempFile::new().unwrap();
    overlay.write_all(b"{ this is not geojson").unwrap();

    let config = MapConfig::new(ViewMode::Mr).with_overlay(overlay.path());
    let build = build_scene(&table, &config).unwrap();

    assert!(matches!(build.overlay_error, Some(OverlayLoadError::Parse(_))));
    assert_eq!(build.scene.markers().len(), 3);
    assert_eq!(build.scene.hulls().len(), 1);
    assert!(build.scene.overlays().is_empty());
}

#[test]
fn overlay_features_are_merged() {
    let table = table(vec![vec!["J1", "10", "10", "pole", "1", "No MR", "", "", ""]]);
    let mut overlay = tempfile::NamedTempFile::new().unwrap();
    overlay.write_all(br#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "geometry": {"type": "Point", "coordinates": [10, 10]}, "properties": {"label": "Yard"}}
    ]}"#).unwrap();

    let build = build_scene(&table, &MapConfig::new(ViewMode::Mr).with_overlay(overlay.path())).unwrap();
    assert!(build.overlay_error.is_none());
    assert_eq!(build.scene.overlays().len(), 1);
    assert_eq!(build.scene.overlays()[0].color(), "blue");
    assert_eq!(build.scene.overlays()[0].opacity(), 0.95);
}

#[test]
fn csv_input_to_geojson() {
    let csv = "\
job_name,latitude,longitude,node_type,scid,MR_level_1,MR_level_2,MR_cost,company
J1,10,10,Pole,1,,No MR,$10,AEP
J1,10,11,pole,2,Comm MR,,$20,AEP
J1,11,10,pole,3,Simple Power MR,,,AEP
J1,abc,10,pole,4,No MR,,,AEP
J1,11,11,anchor,5,No MR,,,AEP
";
    let table = read_rows_csv_str(csv).unwrap();
    let build = build_scene(&table, &MapConfig::new(ViewMode::Mr)).unwrap();
    assert_eq!(build.stats.missing_coords, 1);
    assert_eq!(build.stats.not_pole, 1);

    let geojson = scene_to_geojson(&build.scene);
    let colors = geojson["features"].as_array().unwrap().iter()
        .filter(|f| f["properties"]["kind"] == "marker")
        .map(|f| f["properties"]["color"].as_str().unwrap().to_string())
        .collect::<Vec<_>>();
    assert_eq!(colors, vec!["green", "yellow", "orange"]);
    assert_eq!(geojson["bbox"], serde_json::json!([10.0, 10.0, 11.0, 11.0]));
}
