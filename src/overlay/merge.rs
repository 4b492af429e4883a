use std::{fs, path::Path};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{error::OverlayLoadError, overlay::OverlayFeature};

const GEOMETRY_TYPES: [&str; 6] = ["Point", "MultiPoint", "LineString", "MultiLineString", "Polygon", "MultiPolygon"];

/// Overlay features merged into a scene, plus the load failure, if any.
#[derive(Debug, Default)]
pub struct OverlayMerge {
    pub features: Vec<OverlayFeature>,
    pub error: Option<OverlayLoadError>,
}

/// Load overlay features from an optional GeoJSON source.
///
/// No source yields no features. A source that cannot be read or parsed is reported in
/// [`OverlayMerge::error`] and contributes no features; it never aborts the run.
pub fn merge(source: Option<&Path>) -> OverlayMerge {
    let Some(path) = source else { return OverlayMerge::default() };

    match load(path) {
        Ok(features) => {
            debug!(path = %path.display(), features = features.len(), "merged overlay features");
            OverlayMerge { features, error: None }
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "could not load overlay; continuing without it");
            OverlayMerge { features: Vec::new(), error: Some(error) }
        }
    }
}

/// Parse overlay features from an in-memory GeoJSON document.
pub fn merge_str(document: &str) -> Result<Vec<OverlayFeature>, OverlayLoadError> {
    parse_document(serde_json::from_str(document)?)
}

fn load(path: &Path) -> Result<Vec<OverlayFeature>, OverlayLoadError> {
    let bytes = fs::read(path)
        .map_err(|source| OverlayLoadError::Io { path: path.to_path_buf(), source })?;
    parse_document(serde_json::from_slice(&bytes)?)
}

/// Accept a `FeatureCollection` or a single `Feature`.
fn parse_document(document: Value) -> Result<Vec<OverlayFeature>, OverlayLoadError> {
    match document["type"].as_str() {
        Some("FeatureCollection") => document["features"].as_array()
            .ok_or_else(|| malformed("FeatureCollection has no \"features\" array"))?
            .iter()
            .enumerate()
            .map(|(i, feature)| parse_feature(feature).map_err(|e| malformed(&format!("feature {i}: {e}"))))
            .collect(),
        Some("Feature") => Ok(vec![parse_feature(&document).map_err(|e| malformed(&e))?]),
        Some(other) => Err(malformed(&format!("unsupported document type {other:?}"))),
        None => Err(malformed("document has no \"type\"")),
    }
}

fn parse_feature(feature: &Value) -> Result<OverlayFeature, String> {
    if feature["type"].as_str() != Some("Feature") {
        return Err("not a Feature object".into());
    }
    let geometry = &feature["geometry"];
    check_geometry(geometry)?;

    let properties = match &feature["properties"] {
        Value::Object(properties) => properties.clone(),
        Value::Null => Map::new(),
        _ => return Err("\"properties\" is not an object".into()),
    };
    Ok(OverlayFeature::new(geometry.clone(), properties))
}

fn check_geometry(geometry: &Value) -> Result<(), String> {
    match geometry["type"].as_str() {
        Some("GeometryCollection") => geometry["geometries"].as_array()
            .ok_or_else(|| "GeometryCollection has no \"geometries\" array".to_string())?
            .iter()
            .try_for_each(check_geometry),
        Some(ty) if GEOMETRY_TYPES.contains(&ty) => {
            if geometry["coordinates"].is_array() { Ok(()) } else { Err(format!("{ty} has no \"coordinates\" array")) }
        }
        Some(ty) => Err(format!("unknown geometry type {ty:?}")),
        None => Err("missing geometry".into()),
    }
}

#[inline]
fn malformed(message: &str) -> OverlayLoadError {
    OverlayLoadError::Malformed(message.to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const COLLECTION: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [-97.5, 26.2]}, "properties": {"color": "red"}},
            {"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[-97.5, 26.2], [-97.4, 26.3]]}, "properties": null},
            {"type": "Feature", "geometry": {"type": "GeometryCollection", "geometries": [
                {"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]}
            ]}, "properties": {"opacity": 0.3}}
        ]
    }"#;

    #[test]
    fn no_source_is_empty() {
        let merged = merge(None);
        assert!(merged.features.is_empty());
        assert!(merged.error.is_none());
    }

    #[test]
    fn feature_collection_defaults_style() {
        let features = merge_str(COLLECTION).unwrap();
        assert_eq!(features.len(), 3);
        assert_eq!((features[0].color(), features[0].opacity()), ("red", 0.95));
        assert_eq!((features[1].color(), features[1].opacity()), ("blue", 0.95));
        assert_eq!((features[2].color(), features[2].opacity()), ("blue", 0.3));
        assert_eq!(features[2].geometry_type(), "GeometryCollection");
    }

    #[test]
    fn single_feature_document() {
        let features = merge_str(r#"{"type": "Feature", "geometry": {"type": "Point", "coordinates": [1, 2]}}"#).unwrap();
        assert_eq!(features.len(), 1);
    }

    #[test]
    fn malformed_documents_are_rejected() {
        assert!(matches!(merge_str("{not json"), Err(OverlayLoadError::Parse(_))));
        assert!(matches!(merge_str(r#"{"type": "FeatureCollection"}"#), Err(OverlayLoadError::Malformed(_))));
        assert!(matches!(merge_str(r#"{"type": "Topology"}"#), Err(OverlayLoadError::Malformed(_))));
        let bad_geometry = r#"{"type": "FeatureCollection", "features": [{"type": "Feature", "geometry": {"type": "Circle", "coordinates": [0, 0]}}]}"#;
        assert!(matches!(merge_str(bad_geometry), Err(OverlayLoadError::Malformed(_))));
        let no_coordinates = r#"{"type": "Feature", "geometry": {"type": "Polygon"}}"#;
        assert!(matches!(merge_str(no_coordinates), Err(OverlayLoadError::Malformed(_))));
    }

    #[test]
    fn reads_overlay_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(COLLECTION.as_bytes()).unwrap();

        let merged = merge(Some(file.path()));
        assert!(merged.error.is_none());
        assert_eq!(merged.features.len(), 3);
    }

    #[test]
    fn unreadable_file_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.geojson");
        let merged = merge(Some(path.as_path()));
        assert!(merged.features.is_empty());
        assert!(matches!(merged.error, Some(OverlayLoadError::Io { .. })));
    }
}
