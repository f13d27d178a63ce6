//! Geometry schema: six coordinate-array shapes and the recursive
//! GeometryCollection

use crate::codec::Required;
use crate::deferred::Deferred;
use crate::dispatch::{Case, Dispatcher, Tagged};
use crate::envelope::EnvelopeCodec;
use crate::primitives::{ListOf, PositionCodec};
use geotrip_format::constants::{COORDINATES_MEMBER, GEOMETRIES_MEMBER};
use geotrip_format::{Geometry, Kind};

/// Dispatcher over the seven geometry kinds.
pub type GeometryDispatcher = Dispatcher<Geometry>;

impl Tagged for Geometry {
    fn tag(&self) -> &'static str {
        self.kind().as_str()
    }
}

macro_rules! geometry_case {
    ($variant:ident, $payload:expr) => {
        Case::new(
            EnvelopeCodec::new(Kind::$variant, $payload),
            Geometry::$variant,
            |geometry| match geometry {
                Geometry::$variant(inner) => Some(inner),
                _ => None,
            },
        )
    };
}

/// The seven geometry cases, in RFC 7946 order. The GeometryCollection
/// case decodes its children through `collection_member`, which must be
/// bound to the dispatcher built from these cases before first use.
pub fn geometry_cases(collection_member: &Deferred<GeometryDispatcher>) -> Vec<Case<Geometry>> {
    let positions = || ListOf::new(PositionCodec);
    let lines = || ListOf::new(ListOf::new(PositionCodec));

    vec![
        geometry_case!(Point, Required::new(COORDINATES_MEMBER, PositionCodec)),
        geometry_case!(MultiPoint, Required::new(COORDINATES_MEMBER, positions())),
        geometry_case!(LineString, Required::new(COORDINATES_MEMBER, positions())),
        geometry_case!(MultiLineString, Required::new(COORDINATES_MEMBER, lines())),
        geometry_case!(Polygon, Required::new(COORDINATES_MEMBER, lines())),
        geometry_case!(
            MultiPolygon,
            Required::new(COORDINATES_MEMBER, ListOf::new(lines()))
        ),
        geometry_case!(
            GeometryCollection,
            Required::new(GEOMETRIES_MEMBER, ListOf::new(collection_member.clone()))
        ),
    ]
}
