//! Typed GeoJSON document model
//!
//! Every GeoJSON object is an [`Envelope`] around a kind-specific payload.
//! The envelope keeps the optional bounding box and every member the schema
//! does not model, so a decoded tree re-encodes to the same member set.

use crate::kind::Kind;
use serde_json::{Map, Value};

/// A position: longitude, latitude and optional further components.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Position(pub Vec<f64>);

impl Position {
    /// Build a position from its components.
    pub fn new(components: impl Into<Vec<f64>>) -> Self {
        Position(components.into())
    }

    /// Components in order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the position has no components.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<f64>> for Position {
    fn from(components: Vec<f64>) -> Self {
        Position(components)
    }
}

/// A bounding box: all minima followed by all maxima.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bbox(pub Vec<f64>);

impl Bbox {
    /// Build a bounding box from its components.
    pub fn new(components: impl Into<Vec<f64>>) -> Self {
        Bbox(components.into())
    }

    /// Components in order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the box has no components.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<f64>> for Bbox {
    fn from(components: Vec<f64>) -> Self {
        Bbox(components)
    }
}

/// Shared wrapper around every kind-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    /// Kind-specific data
    pub payload: T,
    /// Optional `bbox` member
    pub bbox: Option<Bbox>,
    /// Members not recognised by the schema, kept verbatim
    pub unknown: Map<String, Value>,
}

impl<T> Envelope<T> {
    /// Wrap a payload with no bbox and no unknown members.
    pub fn new(payload: T) -> Self {
        Self {
            payload,
            bbox: None,
            unknown: Map::new(),
        }
    }

    /// Attach a bounding box.
    pub fn with_bbox(mut self, bbox: impl Into<Bbox>) -> Self {
        self.bbox = Some(bbox.into());
        self
    }

    /// Add an un-modelled member.
    pub fn with_unknown(mut self, name: impl Into<String>, value: Value) -> Self {
        self.unknown.insert(name.into(), value);
        self
    }
}

/// `"Point"`: a single position.
pub type Point = Envelope<Position>;
/// `"MultiPoint"`: an array of positions.
pub type MultiPoint = Envelope<Vec<Position>>;
/// `"LineString"`: an array of positions.
pub type LineString = Envelope<Vec<Position>>;
/// `"MultiLineString"`: an array of position arrays.
pub type MultiLineString = Envelope<Vec<Vec<Position>>>;
/// `"Polygon"`: an array of linear rings.
pub type Polygon = Envelope<Vec<Vec<Position>>>;
/// `"MultiPolygon"`: an array of polygons.
pub type MultiPolygon = Envelope<Vec<Vec<Vec<Position>>>>;
/// `"GeometryCollection"`: an ordered list of geometries.
pub type GeometryCollection = Envelope<Vec<Geometry>>;

/// One of the seven RFC 7946 geometry objects.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Point geometry
    Point(Point),
    /// MultiPoint geometry
    MultiPoint(MultiPoint),
    /// LineString geometry
    LineString(LineString),
    /// MultiLineString geometry
    MultiLineString(MultiLineString),
    /// Polygon geometry
    Polygon(Polygon),
    /// MultiPolygon geometry
    MultiPolygon(MultiPolygon),
    /// Geometry collection, possibly nesting further collections
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// The discriminator kind of this geometry.
    pub fn kind(&self) -> Kind {
        match self {
            Geometry::Point(_) => Kind::Point,
            Geometry::MultiPoint(_) => Kind::MultiPoint,
            Geometry::LineString(_) => Kind::LineString,
            Geometry::MultiLineString(_) => Kind::MultiLineString,
            Geometry::Polygon(_) => Kind::Polygon,
            Geometry::MultiPolygon(_) => Kind::MultiPolygon,
            Geometry::GeometryCollection(_) => Kind::GeometryCollection,
        }
    }

    /// The geometry's bounding box, if it carries one.
    pub fn bbox(&self) -> Option<&Bbox> {
        match self {
            Geometry::Point(g) => g.bbox.as_ref(),
            Geometry::MultiPoint(g) | Geometry::LineString(g) => g.bbox.as_ref(),
            Geometry::MultiLineString(g) | Geometry::Polygon(g) => g.bbox.as_ref(),
            Geometry::MultiPolygon(g) => g.bbox.as_ref(),
            Geometry::GeometryCollection(g) => g.bbox.as_ref(),
        }
    }

    /// Members of this geometry object that the schema does not model.
    pub fn unknown(&self) -> &Map<String, Value> {
        match self {
            Geometry::Point(g) => &g.unknown,
            Geometry::MultiPoint(g) | Geometry::LineString(g) => &g.unknown,
            Geometry::MultiLineString(g) | Geometry::Polygon(g) => &g.unknown,
            Geometry::MultiPolygon(g) => &g.unknown,
            Geometry::GeometryCollection(g) => &g.unknown,
        }
    }
}

/// Feature identifier: a JSON number or a JSON string, never coerced.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureId {
    /// Numeric identifier
    Number(f64),
    /// String identifier
    String(String),
}

impl From<f64> for FeatureId {
    fn from(value: f64) -> Self {
        FeatureId::Number(value)
    }
}

impl From<&str> for FeatureId {
    fn from(value: &str) -> Self {
        FeatureId::String(value.to_string())
    }
}

impl From<String> for FeatureId {
    fn from(value: String) -> Self {
        FeatureId::String(value)
    }
}

/// An object member that may be absent, explicitly `null`, or present.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Member<T> {
    /// The member does not appear in the object.
    #[default]
    Absent,
    /// The member appears with value `null`.
    Null,
    /// The member appears with a value.
    Present(T),
}

impl<T> Member<T> {
    /// The value, if present.
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Member::Present(value) => Some(value),
            Member::Absent | Member::Null => None,
        }
    }

    /// Consume into the value, if present.
    pub fn into_option(self) -> Option<T> {
        match self {
            Member::Present(value) => Some(value),
            Member::Absent | Member::Null => None,
        }
    }

    /// Whether the member is missing from the object.
    pub fn is_absent(&self) -> bool {
        matches!(self, Member::Absent)
    }
}

impl<T> From<Option<T>> for Member<T> {
    /// `None` maps to an explicit `null`, matching RFC 7946's required
    /// `geometry` and `properties` members.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Member::Present(v),
            None => Member::Null,
        }
    }
}

/// Members of a Feature beyond the envelope.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeaturePayload {
    /// Optional `id`
    pub id: Option<FeatureId>,
    /// `geometry`: absent, `null`, or a geometry
    pub geometry: Member<Geometry>,
    /// `properties`: absent, `null`, or an opaque JSON object
    pub properties: Member<Map<String, Value>>,
}

/// `"Feature"`
pub type Feature = Envelope<FeaturePayload>;
/// `"FeatureCollection"`: an ordered list of features.
pub type FeatureCollection = Envelope<Vec<Feature>>;

/// A complete GeoJSON document: exactly one of the nine tagged shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// Any of the seven geometries
    Geometry(Geometry),
    /// A single feature
    Feature(Feature),
    /// A feature collection
    FeatureCollection(FeatureCollection),
}

impl Document {
    /// The discriminator kind of the top-level object.
    pub fn kind(&self) -> Kind {
        match self {
            Document::Geometry(g) => g.kind(),
            Document::Feature(_) => Kind::Feature,
            Document::FeatureCollection(_) => Kind::FeatureCollection,
        }
    }
}

impl From<Geometry> for Document {
    fn from(geometry: Geometry) -> Self {
        Document::Geometry(geometry)
    }
}

impl From<Feature> for Document {
    fn from(feature: Feature) -> Self {
        Document::Feature(feature)
    }
}

impl From<FeatureCollection> for Document {
    fn from(collection: FeatureCollection) -> Self {
        Document::FeatureCollection(collection)
    }
}
