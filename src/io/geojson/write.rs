//! Scene export as a single GeoJSON FeatureCollection.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::{json, Value};

use crate::{annotation::Annotation, classify::MarkerFeature, job::JobHullFeature, scene::Scene};

const HULL_WEIGHT: u32 = 2;

/// Serialize a scene to a GeoJSON FeatureCollection.
///
/// Markers become `Point` features (`kind: "marker"`), job hulls become `Polygon` features
/// (`kind: "job"`, `isJobLabel: true`), and overlays are written unchanged. The collection
/// carries the marker bounding box as `bbox`, plus foreign members `view` and `legend`.
pub fn scene_to_geojson(scene: &Scene) -> Value {
    let features = scene.markers().iter().map(marker_to_geojson)
        .chain(scene.hulls().iter().map(hull_to_geojson))
        .chain(scene.overlays().iter().map(|overlay| overlay.to_geojson()))
        .collect::<Vec<_>>();

    let legend = scene.legend().iter()
        .map(|entry| json!({
            "label": entry.label,
            "color": entry.color,
            "swatch": entry.swatch.to_str(),
        }))
        .collect::<Vec<_>>();

    let mut collection = json!({
        "type": "FeatureCollection",
        "view": scene.view().to_str(),
        "legend": legend,
        "features": features,
    });
    if let Some(bounds) = scene.bounds() {
        collection["bbox"] = json!([bounds.min().x, bounds.min().y, bounds.max().x, bounds.max().y]);
    }
    collection
}

/// Write a scene as pretty-printed GeoJSON to `path`.
pub fn write_scene(path: &Path, scene: &Scene) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(&scene_to_geojson(scene))
        .context("[io::geojson::write] Failed to serialize scene to GeoJSON")?;
    fs::write(path, bytes)
        .with_context(|| format!("[io::geojson::write] Failed to write GeoJSON to {}", path.display()))
}

fn marker_to_geojson(marker: &MarkerFeature) -> Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [marker.longitude(), marker.latitude()],
        },
        "properties": {
            "kind": "marker",
            "category": marker.category.to_str(),
            "value": marker.category.value(),
            "color": marker.color,
            "shape": marker.shape.to_str(),
            "radius": marker.radius,
            "fillOpacity": marker.shape.fill_opacity(),
            "stroke": marker.shape.stroke(),
            "tooltip": marker.tooltip_html,
            "popup": marker.popup_text,
            "scid": marker.scid,
            "job": marker.job_name,
        },
    })
}

fn hull_to_geojson(hull: &JobHullFeature) -> Value {
    let style = hull.style();
    let ring = hull.ring().coords().map(|c| [c.x, c.y]).collect::<Vec<_>>();
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Polygon",
            "coordinates": [ring],
        },
        "properties": {
            "kind": "job",
            "label": style.label.unwrap_or_default(),
            "color": style.color,
            "labelSize": style.label_size,
            "opacity": style.opacity,
            "isJobLabel": hull.is_job_label(),
            "weight": HULL_WEIGHT,
            "fill": false,
        },
    })
}

#[cfg(test)]
mod tests {
    use serde_json::Map;

    use super::*;
    use crate::{
        classify::{Classifier, CompanyColorTable},
        config::{StyleConfig, ViewMode},
        job::aggregate,
        overlay::OverlayFeature,
        record::PoleRecord,
        scene::assemble,
    };

    fn scene() -> Scene {
        let styles = StyleConfig::default();
        let table = CompanyColorTable::default();
        let records = vec![
            PoleRecord::new("J1", "1", 10.0, 10.0).with_levels(["No MR"]),
            PoleRecord::new("J1", "2", 10.0, 11.0).with_levels(["Complex Power MR"]),
            PoleRecord::new("J1", "3", 11.0, 10.0),
        ];
        let markers = Classifier::new(ViewMode::Mr, &styles, &table).classify_all(&records);
        let overlay = OverlayFeature::new(json!({"type": "Point", "coordinates": [10.5, 10.5]}), Map::new());
        assemble(markers, aggregate(&records), vec![overlay], ViewMode::Mr, &styles, &table)
    }

    #[test]
    fn collection_layout() {
        let geojson = scene_to_geojson(&scene());
        assert_eq!(geojson["type"], "FeatureCollection");
        assert_eq!(geojson["view"], "mr");
        assert_eq!(geojson["bbox"], json!([10.0, 10.0, 11.0, 11.0]));
        assert_eq!(geojson["legend"].as_array().unwrap().len(), 8);

        let features = geojson["features"].as_array().unwrap();
        assert_eq!(features.len(), 5);
        assert_eq!(features[0]["geometry"]["coordinates"], json!([10.0, 10.0]));
        assert_eq!(features[0]["properties"]["color"], "green");
        assert_eq!(features[2]["properties"]["category"], "missing_level");
        assert_eq!(features[0]["properties"]["fillOpacity"], 0.8);
        assert_eq!(features[0]["properties"]["stroke"], false);
        assert_eq!(features[4]["properties"], json!({}));
    }

    #[test]
    fn hull_feature_properties() {
        let geojson = scene_to_geojson(&scene());
        let hull = &geojson["features"][3];
        assert_eq!(hull["geometry"]["type"], "Polygon");
        assert_eq!(hull["geometry"]["coordinates"][0].as_array().unwrap().len(), 4);
        assert_eq!(hull["properties"], json!({
            "kind": "job",
            "label": "J1",
            "color": "black",
            "labelSize": 10,
            "opacity": 0.95,
            "isJobLabel": true,
            "weight": 2,
            "fill": false,
        }));
    }

    #[test]
    fn writes_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.geojson");
        write_scene(&path, &scene()).unwrap();

        let written: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(written, scene_to_geojson(&scene()));
    }
}
