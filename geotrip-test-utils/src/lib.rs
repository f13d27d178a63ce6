//! geotrip Test Utilities
//!
//! Shared fixtures for the geotrip workspace: the RFC 7946 example
//! documents, JSON builders for features, and generators for large inputs.

use serde_json::{json, Map, Value};

pub mod samples;

/// Builder for Feature objects with common patterns
pub struct FeatureBuilder {
    members: Map<String, Value>,
}

impl FeatureBuilder {
    /// A Feature with only its `type` member
    pub fn new() -> Self {
        let mut members = Map::new();
        members.insert("type".to_string(), Value::String("Feature".to_string()));
        Self { members }
    }

    /// Set a numeric id
    pub fn numeric_id(mut self, id: f64) -> Self {
        self.members.insert("id".to_string(), json!(id));
        self
    }

    /// Set a string id
    pub fn string_id(mut self, id: &str) -> Self {
        self.members
            .insert("id".to_string(), Value::String(id.to_string()));
        self
    }

    /// Set the geometry to a Point
    pub fn point(mut self, x: f64, y: f64) -> Self {
        self.members.insert(
            "geometry".to_string(),
            json!({"type": "Point", "coordinates": [x, y]}),
        );
        self
    }

    /// Set the geometry to an arbitrary JSON value
    pub fn geometry(mut self, geometry: Value) -> Self {
        self.members.insert("geometry".to_string(), geometry);
        self
    }

    /// Set `"geometry": null`
    pub fn null_geometry(mut self) -> Self {
        self.members.insert("geometry".to_string(), Value::Null);
        self
    }

    /// Add one property, creating the properties object if needed
    pub fn property(mut self, key: &str, value: Value) -> Self {
        let entry = self
            .members
            .entry("properties".to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(properties) = entry {
            properties.insert(key.to_string(), value);
        }
        self
    }

    /// Set `"properties": null`
    pub fn null_properties(mut self) -> Self {
        self.members.insert("properties".to_string(), Value::Null);
        self
    }

    /// Add a bbox
    pub fn bbox(mut self, bbox: &[f64]) -> Self {
        self.members.insert("bbox".to_string(), json!(bbox));
        self
    }

    /// Add a member no schema knows about
    pub fn foreign(mut self, key: &str, value: Value) -> Self {
        self.members.insert(key.to_string(), value);
        self
    }

    /// Build the Feature object
    pub fn build(self) -> Value {
        Value::Object(self.members)
    }
}

impl Default for FeatureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate documents with various patterns
pub struct DocumentGenerator;

impl DocumentGenerator {
    /// Wrap features in a FeatureCollection
    pub fn collection(features: Vec<Value>) -> Value {
        json!({"type": "FeatureCollection", "features": features})
    }

    /// A FeatureCollection of `count` features cycling through point,
    /// line and polygon geometries with a few properties each
    pub fn large_collection(count: usize) -> Value {
        let features = (0..count)
            .map(|i| {
                let x = (i % 360) as f64 - 180.0 + 0.25;
                let y = (i % 180) as f64 - 90.0 + 0.5;
                let geometry = match i % 3 {
                    0 => json!({"type": "Point", "coordinates": [x, y]}),
                    1 => json!({"type": "LineString", "coordinates": [[x, y], [x + 1.0, y], [x + 1.0, y + 0.5]]}),
                    _ => json!({"type": "Polygon", "coordinates": [[[x, y], [x + 1.0, y], [x + 1.0, y + 1.0], [x, y + 1.0], [x, y]]]}),
                };
                FeatureBuilder::new()
                    .numeric_id(i as f64)
                    .geometry(geometry)
                    .property("name", Value::String(format!("feature-{}", i)))
                    .property("rank", json!(i % 10))
                    .build()
            })
            .collect();
        Self::collection(features)
    }

    /// GeometryCollections nested `depth` levels deep around one Point
    pub fn nested_geometry_collection(depth: usize) -> Value {
        let mut geometry = json!({"type": "Point", "coordinates": [1, 2]});
        for _ in 0..depth {
            geometry = json!({"type": "GeometryCollection", "geometries": [geometry]});
        }
        geometry
    }

    /// Documents carrying members outside RFC 7946
    pub fn foreign_member_documents() -> Vec<Value> {
        vec![
            json!({"type": "Point", "coordinates": [0, 0], "crs": {"type": "name", "properties": {"name": "EPSG:4326"}}}),
            FeatureBuilder::new()
                .null_geometry()
                .null_properties()
                .foreign("title", json!("Example"))
                .foreign("extra", json!([1, {"deep": true}]))
                .build(),
            json!({"type": "FeatureCollection", "features": [], "meta": null}),
        ]
    }
}

/// Compare two JSON values member-set-wise, treating numbers as equal when
/// their `f64` values are (so `1` matches `1.0`)
pub fn json_equivalent(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| json_equivalent(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| json_equivalent(x, y)))
        }
        _ => a == b,
    }
}

/// Panic unless `actual` is [`json_equivalent`] to `expected`
#[track_caller]
pub fn assert_json_equivalent(actual: &Value, expected: &Value) {
    assert!(
        json_equivalent(actual, expected),
        "JSON values differ\n  actual: {}\nexpected: {}",
        actual,
        expected
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_builder() {
        let feature = FeatureBuilder::new()
            .string_id("a")
            .point(1.0, 2.0)
            .property("k", json!("v"))
            .build();
        assert_eq!(
            feature,
            json!({
                "type": "Feature",
                "id": "a",
                "geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
                "properties": {"k": "v"}
            })
        );
    }

    #[test]
    fn test_large_collection_size() {
        let doc = DocumentGenerator::large_collection(10);
        assert_eq!(doc["features"].as_array().map(Vec::len), Some(10));
    }

    #[test]
    fn test_json_equivalent_ignores_number_form_and_order() {
        let a = json!({"a": [1, 2.5], "b": {"c": null}});
        let b = json!({"b": {"c": null}, "a": [1.0, 2.5]});
        assert!(json_equivalent(&a, &b));
        assert!(!json_equivalent(&a, &json!({"a": [1, 2.5]})));
        assert!(!json_equivalent(&json!([1]), &json!(["1"])));
    }

    #[test]
    fn test_nested_depth() {
        let doc = DocumentGenerator::nested_geometry_collection(2);
        assert_eq!(doc["geometries"][0]["geometries"][0]["type"], "Point");
    }
}
