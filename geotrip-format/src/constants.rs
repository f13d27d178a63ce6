//! Member names and numeric constants for GeoJSON objects

/// Discriminator member shared by every GeoJSON object.
pub const TYPE_MEMBER: &str = "type";
/// Optional bounding box member.
pub const BBOX_MEMBER: &str = "bbox";
/// Coordinate payload of the six non-collection geometries.
pub const COORDINATES_MEMBER: &str = "coordinates";
/// Child geometries of a GeometryCollection.
pub const GEOMETRIES_MEMBER: &str = "geometries";
/// Member list of a FeatureCollection.
pub const FEATURES_MEMBER: &str = "features";
/// Feature identifier.
pub const ID_MEMBER: &str = "id";
/// Feature geometry.
pub const GEOMETRY_MEMBER: &str = "geometry";
/// Feature properties object.
pub const PROPERTIES_MEMBER: &str = "properties";

/// Minimum components of a position (RFC 7946 §3.1.1).
pub const MIN_POSITION_LEN: usize = 2;
/// Minimum components of a bounding box (RFC 7946 §5).
pub const MIN_BBOX_LEN: usize = 4;

/// Deepest array/object nesting accepted in input text. Decoding recurses
/// once per level, so this bounds stack use.
pub const MAX_NESTING_DEPTH: usize = 512;

/// Largest magnitude at which every integer is exactly representable as `f64`.
pub const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0; // 2^53
