use serde_json::{json, Map, Value};

use crate::annotation::{Annotation, FeatureStyle, DEFAULT_COLOR, DEFAULT_LABEL_SIZE, DEFAULT_OPACITY};

/// An externally authored annotation (point, line, polygon, ...) with free-form properties.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayFeature {
    geometry: Value,
    properties: Map<String, Value>,
}

impl OverlayFeature {
    /// Wrap a geometry and its properties unchanged. Absent style attributes are defaulted on read.
    pub fn new(geometry: Value, properties: Map<String, Value>) -> Self {
        Self { geometry, properties }
    }

    /// GeoJSON geometry object.
    #[inline] pub fn geometry(&self) -> &Value { &self.geometry }

    /// GeoJSON geometry type, e.g. `"Polygon"`.
    #[inline] pub fn geometry_type(&self) -> &str { self.geometry["type"].as_str().unwrap_or_default() }

    #[inline] pub fn properties(&self) -> &Map<String, Value> { &self.properties }

    #[inline]
    pub fn color(&self) -> &str {
        self.properties.get("color").and_then(Value::as_str).unwrap_or(DEFAULT_COLOR)
    }

    #[inline]
    pub fn opacity(&self) -> f64 {
        self.properties.get("opacity").and_then(Value::as_f64).unwrap_or(DEFAULT_OPACITY)
    }

    /// The feature as a GeoJSON `Feature` object.
    pub fn to_geojson(&self) -> Value {
        json!({
            "type": "Feature",
            "geometry": self.geometry,
            "properties": self.properties,
        })
    }
}

impl Annotation for OverlayFeature {
    fn style(&self) -> FeatureStyle {
        FeatureStyle {
            color: self.color().to_string(),
            label: self.properties.get("label")
                .and_then(Value::as_str)
                .filter(|label| !label.is_empty())
                .map(str::to_string),
            label_size: self.properties.get("labelSize")
                .and_then(Value::as_u64)
                .and_then(|size| u32::try_from(size).ok())
                .filter(|&size| size > 0)
                .unwrap_or(DEFAULT_LABEL_SIZE),
            opacity: self.opacity(),
        }
    }

    fn set_style(&mut self, style: &FeatureStyle) {
        self.properties.insert("color".into(), json!(style.color));
        self.properties.insert("label".into(), json!(style.label.clone().unwrap_or_default()));
        self.properties.insert("labelSize".into(), json!(style.label_size));
        self.properties.insert("opacity".into(), json!(style.opacity));
    }

    fn is_job_label(&self) -> bool {
        self.properties.get("isJobLabel").and_then(Value::as_bool).unwrap_or(false)
    }
}
