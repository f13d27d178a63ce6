//! Property tests for the round-trip and tag-fidelity laws over generated
//! documents
//!
//! Documents are generated as typed values, encoded to text, parsed and
//! decoded again, so the laws are checked through the same path the trip
//! driver takes.

use geotrip_codec::Schema;
use geotrip_format::{
    Bbox, DecodeOptions, Document, Envelope, Feature, FeatureId, FeaturePayload, Geometry, Member,
    Position,
};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn coordinate() -> impl Strategy<Value = f64> {
    prop_oneof![
        (-180i32..=180).prop_map(f64::from),
        -180.0f64..180.0,
    ]
}

fn position() -> impl Strategy<Value = Position> {
    prop::collection::vec(coordinate(), 2..=3).prop_map(Position)
}

fn bbox() -> impl Strategy<Value = Option<Bbox>> {
    prop::option::of(prop::collection::vec(coordinate(), 4..=4).prop_map(Bbox))
}

fn foreign_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
    ]
}

/// Members whose names no schema models.
fn foreign_members() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("x-[a-z]{1,6}", foreign_value(), 0..3)
        .prop_map(|members| members.into_iter().collect())
}

fn envelope<T: std::fmt::Debug>(
    payload: impl Strategy<Value = T>,
) -> impl Strategy<Value = Envelope<T>> {
    (payload, bbox(), foreign_members()).prop_map(|(payload, bbox, unknown)| Envelope {
        payload,
        bbox,
        unknown,
    })
}

fn leaf_geometry() -> impl Strategy<Value = Geometry> {
    let line = || prop::collection::vec(position(), 0..4);
    let lines = move || prop::collection::vec(line(), 0..3);
    prop_oneof![
        envelope(position()).prop_map(Geometry::Point),
        envelope(line()).prop_map(Geometry::MultiPoint),
        envelope(line()).prop_map(Geometry::LineString),
        envelope(lines()).prop_map(Geometry::MultiLineString),
        envelope(lines()).prop_map(Geometry::Polygon),
        envelope(prop::collection::vec(lines(), 0..2)).prop_map(Geometry::MultiPolygon),
    ]
}

fn geometry() -> impl Strategy<Value = Geometry> {
    leaf_geometry().prop_recursive(4, 24, 4, |inner| {
        envelope(prop::collection::vec(inner, 0..4)).prop_map(Geometry::GeometryCollection)
    })
}

fn feature() -> impl Strategy<Value = Feature> {
    let id = prop::option::of(prop_oneof![
        coordinate().prop_map(FeatureId::Number),
        "[a-z0-9-]{1,8}".prop_map(FeatureId::String),
    ]);
    let geometry = prop_oneof![
        Just(Member::Absent),
        Just(Member::Null),
        geometry().prop_map(Member::Present),
    ];
    let properties = prop_oneof![
        Just(Member::Absent),
        Just(Member::Null),
        prop::collection::btree_map("[a-z]{1,6}", foreign_value(), 0..4)
            .prop_map(|m| Member::Present(m.into_iter().collect())),
    ];
    envelope((id, geometry, properties).prop_map(|(id, geometry, properties)| FeaturePayload {
        id,
        geometry,
        properties,
    }))
}

fn document() -> impl Strategy<Value = Document> {
    prop_oneof![
        geometry().prop_map(Document::Geometry),
        feature().prop_map(Document::Feature),
        envelope(prop::collection::vec(feature(), 0..4)).prop_map(Document::FeatureCollection),
    ]
}

fn through_text(doc: &Document) -> Document {
    let schema = Schema::shared().unwrap();
    let text = serde_json::to_string(&schema.encode(doc).unwrap()).unwrap();
    let parsed: Value = serde_json::from_str(&text).unwrap();
    schema.decode(parsed, DecodeOptions::default()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_decode_encode_is_identity(doc in document()) {
        prop_assert_eq!(through_text(&doc), doc);
    }

    #[test]
    fn prop_encoded_type_matches_kind(doc in document()) {
        let encoded = Schema::shared().unwrap().encode(&doc).unwrap();
        prop_assert_eq!(encoded["type"].as_str(), Some(doc.kind().as_str()));
    }

    #[test]
    fn prop_unknown_members_survive(geometry in geometry()) {
        let unknown = geometry.unknown().clone();
        let back = through_text(&Document::Geometry(geometry));
        match back {
            Document::Geometry(g) => prop_assert_eq!(g.unknown(), &unknown),
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn prop_length_checks_accept_valid_documents(doc in document()) {
        let schema = Schema::shared().unwrap();
        let encoded = schema.encode(&doc).unwrap();
        let strict = DecodeOptions::default().with_length_checks(true);
        prop_assert_eq!(schema.decode(encoded, strict).unwrap(), doc);
    }
}
