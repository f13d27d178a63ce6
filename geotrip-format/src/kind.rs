//! Discriminator kinds

use std::fmt;

/// The nine `type` strings a GeoJSON document can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    /// `"Point"`
    Point,
    /// `"MultiPoint"`
    MultiPoint,
    /// `"LineString"`
    LineString,
    /// `"MultiLineString"`
    MultiLineString,
    /// `"Polygon"`
    Polygon,
    /// `"MultiPolygon"`
    MultiPolygon,
    /// `"GeometryCollection"`
    GeometryCollection,
    /// `"Feature"`
    Feature,
    /// `"FeatureCollection"`
    FeatureCollection,
}

impl Kind {
    /// The seven geometry kinds, in RFC 7946 order.
    pub const GEOMETRY: [Kind; 7] = [
        Kind::Point,
        Kind::MultiPoint,
        Kind::LineString,
        Kind::MultiLineString,
        Kind::Polygon,
        Kind::MultiPolygon,
        Kind::GeometryCollection,
    ];

    /// Every kind accepted at the top level of a document.
    pub const ALL: [Kind; 9] = [
        Kind::Point,
        Kind::MultiPoint,
        Kind::LineString,
        Kind::MultiLineString,
        Kind::Polygon,
        Kind::MultiPolygon,
        Kind::GeometryCollection,
        Kind::Feature,
        Kind::FeatureCollection,
    ];

    /// The discriminator string written to and read from the `type` member.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Point => "Point",
            Kind::MultiPoint => "MultiPoint",
            Kind::LineString => "LineString",
            Kind::MultiLineString => "MultiLineString",
            Kind::Polygon => "Polygon",
            Kind::MultiPolygon => "MultiPolygon",
            Kind::GeometryCollection => "GeometryCollection",
            Kind::Feature => "Feature",
            Kind::FeatureCollection => "FeatureCollection",
        }
    }

    /// Exact, case-sensitive lookup of a discriminator string.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_round_trips_every_kind() {
        for kind in Kind::ALL {
            assert_eq!(Kind::from_tag(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_from_tag_is_case_sensitive() {
        assert_eq!(Kind::from_tag("point"), None);
        assert_eq!(Kind::from_tag("POINT"), None);
        assert_eq!(Kind::from_tag("Blob"), None);
        assert_eq!(Kind::from_tag(""), None);
    }

    #[test]
    fn test_tags_are_distinct() {
        let mut tags: Vec<_> = Kind::ALL.iter().map(|k| k.as_str()).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), Kind::ALL.len());
    }

    #[test]
    fn test_multi_line_string_has_its_own_tag() {
        assert_ne!(Kind::MultiLineString.as_str(), Kind::LineString.as_str());
        assert_eq!(Kind::MultiLineString.as_str(), "MultiLineString");
    }

    #[test]
    fn test_geometry_partition() {
        assert_eq!(&Kind::ALL[..Kind::GEOMETRY.len()], &Kind::GEOMETRY[..]);
        assert_eq!(
            &Kind::ALL[Kind::GEOMETRY.len()..],
            &[Kind::Feature, Kind::FeatureCollection][..]
        );
    }
}
