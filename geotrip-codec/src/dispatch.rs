//! Tagged-union dispatch on the `type` member
//!
//! A [`Dispatcher`] owns a table of [`Case`]s keyed by discriminator
//! string. Decoding reads `type`, picks the case with exactly that string
//! and hands it the whole object. Encoding asks the value for its own tag
//! ([`Tagged`]) and lets the matching case project and encode it.
//!
//! Cases are cheap handles (`Arc`s around the case codec), so the same
//! case can be registered with several dispatchers, either directly or
//! through [`Case::lift`] into a wider outer type.

use crate::codec::{expect_object, json_type_name, CaseCodec, Codec};
use crate::context::DecodeContext;
use ahash::AHashMap;
use geotrip_format::constants::TYPE_MEMBER;
use geotrip_format::{GeoJsonError, Result};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::trace;

type DecodeFn<T> = dyn Fn(Map<String, Value>, &mut DecodeContext) -> Result<T> + Send + Sync;
type EncodeFn<T> = dyn Fn(&T) -> Option<Result<Map<String, Value>>> + Send + Sync;

/// Values that know which discriminator string they encode under.
pub trait Tagged {
    /// The `type` string for this value.
    fn tag(&self) -> &'static str;
}

/// One entry of a dispatcher: a discriminator string, the object codec for
/// that shape, an injection into the outer type `T`, and the reverse
/// projection used on encode.
pub struct Case<T> {
    tag: &'static str,
    codec_id: usize,
    decode: Arc<DecodeFn<T>>,
    encode: Arc<EncodeFn<T>>,
}

impl<T> Clone for Case<T> {
    fn clone(&self) -> Self {
        Self {
            tag: self.tag,
            codec_id: self.codec_id,
            decode: Arc::clone(&self.decode),
            encode: Arc::clone(&self.encode),
        }
    }
}

impl<T> std::fmt::Debug for Case<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Case").field("tag", &self.tag).finish()
    }
}

impl<T: 'static> Case<T> {
    /// Build a case from a codec. The discriminator string is the codec's
    /// own tag, so a case cannot be filed under a string its codec does
    /// not write.
    pub fn new<C, I, P>(codec: C, inject: I, project: P) -> Self
    where
        C: CaseCodec + 'static,
        I: Fn(C::Value) -> T + Send + Sync + 'static,
        P: Fn(&T) -> Option<&C::Value> + Send + Sync + 'static,
    {
        let codec = Arc::new(codec);
        let tag = codec.tag();
        let codec_id = Arc::as_ptr(&codec) as *const () as usize;

        let decoder = Arc::clone(&codec);
        let decode: Arc<DecodeFn<T>> =
            Arc::new(move |members: Map<String, Value>, cx: &mut DecodeContext| {
                decoder.decode_object(members, cx).map(&inject)
            });
        let encode: Arc<EncodeFn<T>> =
            Arc::new(move |value: &T| project(value).map(|inner| codec.encode_object(inner)));

        Self {
            tag,
            codec_id,
            decode,
            encode,
        }
    }

    /// The same case seen through a wider outer type `U`. The underlying
    /// codec is shared, not rebuilt.
    pub fn lift<U, I, P>(&self, inject: I, project: P) -> Case<U>
    where
        U: 'static,
        I: Fn(T) -> U + Send + Sync + 'static,
        P: Fn(&U) -> Option<&T> + Send + Sync + 'static,
    {
        let decode = Arc::clone(&self.decode);
        let encode = Arc::clone(&self.encode);
        Case {
            tag: self.tag,
            codec_id: self.codec_id,
            decode: Arc::new(move |members: Map<String, Value>, cx: &mut DecodeContext| {
                decode(members, cx).map(&inject)
            }),
            encode: Arc::new(move |value: &U| project(value).and_then(|inner| encode(inner))),
        }
    }

    /// Discriminator string of this case.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Whether `other` wraps the very same codec instance, possibly
    /// through [`Case::lift`].
    pub fn shares_codec_with<U>(&self, other: &Case<U>) -> bool {
        self.codec_id == other.codec_id
    }

    /// Decode an object already selected for this case.
    pub fn decode_object(
        &self,
        members: Map<String, Value>,
        cx: &mut DecodeContext,
    ) -> Result<T> {
        (self.decode)(members, cx)
    }

    /// Encode a value, or `None` if the value is not of this case.
    pub fn encode_object(&self, value: &T) -> Option<Result<Map<String, Value>>> {
        (self.encode)(value)
    }
}

/// A case used on its own, without dispatch. Decode still checks the
/// discriminator through the case's envelope.
impl<T: 'static> Codec for Case<T> {
    type Value = T;

    fn decode(&self, json: Value, cx: &mut DecodeContext) -> Result<T> {
        let members = expect_object(json, cx)?;
        self.decode_object(members, cx)
    }

    fn encode(&self, value: &T) -> Result<Value> {
        match self.encode_object(value) {
            Some(members) => members.map(Value::Object),
            None => Err(GeoJsonError::Internal(format!(
                "value does not belong to case \"{}\"",
                self.tag
            ))),
        }
    }
}

/// Tagged-union codec over the outer type `T`.
#[derive(Debug)]
pub struct Dispatcher<T> {
    context: &'static str,
    cases: Vec<Case<T>>,
    by_tag: AHashMap<&'static str, usize>,
}

impl<T: 'static> Dispatcher<T> {
    /// Define a dispatcher. `context` labels it in diagnostics. Two cases
    /// with the same discriminator string are rejected here, never at
    /// decode time.
    pub fn new(context: &'static str, cases: impl IntoIterator<Item = Case<T>>) -> Result<Self> {
        let mut table = Vec::new();
        let mut by_tag = AHashMap::new();
        for case in cases {
            if by_tag.insert(case.tag, table.len()).is_some() {
                return Err(GeoJsonError::DuplicateCase {
                    tag: case.tag,
                    context,
                });
            }
            table.push(case);
        }
        trace!(context, cases = table.len(), "defined dispatcher");

        Ok(Self {
            context,
            cases: table,
            by_tag,
        })
    }

    /// Label used in diagnostics.
    pub fn context(&self) -> &'static str {
        self.context
    }

    /// Registered cases, in definition order.
    pub fn cases(&self) -> &[Case<T>] {
        &self.cases
    }

    /// Discriminator strings accepted, in definition order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cases.iter().map(Case::tag)
    }

    /// Case registered under `tag` (exact match).
    pub fn case(&self, tag: &str) -> Option<&Case<T>> {
        self.by_tag.get(tag).map(|&i| &self.cases[i])
    }
}

impl<T: Tagged + 'static> Codec for Dispatcher<T> {
    type Value = T;

    fn decode(&self, json: Value, cx: &mut DecodeContext) -> Result<T> {
        let members = expect_object(json, cx)?;
        let index = match members.get(TYPE_MEMBER) {
            Some(Value::String(tag)) => match self.by_tag.get(tag.as_str()) {
                Some(&i) => i,
                None => {
                    return cx.member(TYPE_MEMBER, |cx| {
                        Err(cx.unknown_variant(tag, self.context))
                    })
                }
            },
            Some(other) => {
                return cx.member(TYPE_MEMBER, |cx| {
                    Err(cx.violation(format!(
                        "expected a string, found {}",
                        json_type_name(other)
                    )))
                })
            }
            None => {
                return Err(cx.violation(format!("missing member \"{}\"", TYPE_MEMBER)));
            }
        };
        self.cases[index].decode_object(members, cx)
    }

    fn encode(&self, value: &T) -> Result<Value> {
        let tag = value.tag();
        let case = self.case(tag).ok_or_else(|| GeoJsonError::UnknownVariant {
            tag: tag.to_string(),
            context: self.context.to_string(),
            path: None,
        })?;
        match case.encode_object(value) {
            Some(members) => members.map(Value::Object),
            None => Err(GeoJsonError::Internal(format!(
                "case \"{}\" of {} rejected a value tagged \"{}\"",
                case.tag, self.context, tag
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Required;
    use crate::envelope::EnvelopeCodec;
    use crate::primitives::{BboxCodec, PositionCodec};
    use geotrip_format::{
        Bbox, DecodeOptions, Envelope, ErrorKind, Kind, Point, Position,
    };
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    enum Shape {
        Point(Point),
        Box(Envelope<Bbox>),
    }

    impl Tagged for Shape {
        fn tag(&self) -> &'static str {
            match self {
                Shape::Point(_) => "Point",
                Shape::Box(_) => "Polygon",
            }
        }
    }

    fn point_case() -> Case<Shape> {
        Case::new(
            EnvelopeCodec::new(Kind::Point, Required::new("coordinates", PositionCodec)),
            Shape::Point,
            |s| match s {
                Shape::Point(p) => Some(p),
                _ => None,
            },
        )
    }

    fn box_case() -> Case<Shape> {
        Case::new(
            EnvelopeCodec::new(Kind::Polygon, Required::new("extent", BboxCodec)),
            Shape::Box,
            |s| match s {
                Shape::Box(b) => Some(b),
                _ => None,
            },
        )
    }

    fn shapes() -> Dispatcher<Shape> {
        Dispatcher::new("Shape", [point_case(), box_case()]).unwrap()
    }

    fn cx() -> DecodeContext {
        DecodeContext::new(DecodeOptions::default())
    }

    #[test]
    fn test_dispatch_selects_case_by_tag() {
        let d = shapes();
        let point = d
            .decode(json!({"type": "Point", "coordinates": [1, 2]}), &mut cx())
            .unwrap();
        assert_eq!(
            point,
            Shape::Point(Envelope::new(Position::new([1.0, 2.0])))
        );

        let boxed = d
            .decode(json!({"type": "Polygon", "extent": [0, 0, 1, 1]}), &mut cx())
            .unwrap();
        assert!(matches!(boxed, Shape::Box(_)));
    }

    #[test]
    fn test_encode_rewrites_tag_of_selected_case() {
        let d = shapes();
        let input = json!({"type": "Polygon", "extent": [0, 0, 1, 1]});
        let value = d.decode(input.clone(), &mut cx()).unwrap();
        assert_eq!(d.encode(&value).unwrap(), input);
    }

    #[test]
    fn test_unknown_tag_names_tag_and_context() {
        let err = shapes()
            .decode(json!({"type": "Blob"}), &mut cx())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownVariant);
        assert_eq!(err.to_string(), "unknown Shape type \"Blob\"");
    }

    #[test]
    fn test_tag_match_is_exact() {
        let err = shapes()
            .decode(json!({"type": "point", "coordinates": [1, 2]}), &mut cx())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownVariant);
    }

    #[test]
    fn test_missing_or_non_string_tag_is_violation() {
        let d = shapes();
        let err = d.decode(json!({"coordinates": [1, 2]}), &mut cx()).unwrap_err();
        assert_eq!(err.to_string(), "missing member \"type\"");

        let mut located = DecodeContext::new(DecodeOptions::default().with_locs(true));
        let err = d.decode(json!({"type": ["Point"]}), &mut located).unwrap_err();
        assert_eq!(err.to_string(), "expected a string, found array at /type");

        let err = d.decode(json!("Point"), &mut cx()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SchemaViolation);
    }

    #[test]
    fn test_duplicate_tags_fail_at_definition() {
        let err = Dispatcher::new("Shape", [point_case(), box_case(), point_case()]).unwrap_err();
        match err {
            GeoJsonError::DuplicateCase { tag, context } => {
                assert_eq!(tag, "Point");
                assert_eq!(context, "Shape");
            }
            other => panic!("expected DuplicateCase, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_without_matching_case_fails() {
        let only_points = Dispatcher::new("Points", [point_case()]).unwrap();
        let value = Shape::Box(Envelope::new(Bbox::new([0.0, 0.0, 1.0, 1.0])));
        let err = only_points.encode(&value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownVariant);
    }

    #[test]
    fn test_lift_shares_codec() {
        #[derive(Debug, PartialEq)]
        enum Outer {
            Shape(Shape),
        }
        impl Tagged for Outer {
            fn tag(&self) -> &'static str {
                match self {
                    Outer::Shape(s) => s.tag(),
                }
            }
        }

        let inner = point_case();
        let lifted = inner.lift(Outer::Shape, |o| match o {
            Outer::Shape(s) => Some(s),
        });
        assert!(lifted.shares_codec_with(&inner));
        assert!(!lifted.shares_codec_with(&point_case()));
        assert_eq!(lifted.tag(), "Point");

        let outer = Dispatcher::new("Outer", [lifted]).unwrap();
        let input = json!({"type": "Point", "coordinates": [3, 4]});
        let value = outer.decode(input.clone(), &mut cx()).unwrap();
        assert!(matches!(value, Outer::Shape(Shape::Point(_))));
        assert_eq!(outer.encode(&value).unwrap(), input);
    }

    #[test]
    fn test_case_as_standalone_codec_checks_tag() {
        let case = point_case();
        let err = case
            .decode(json!({"type": "Polygon", "coordinates": [1, 2]}), &mut cx())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownVariant);

        let value = Shape::Box(Envelope::new(Bbox::default()));
        assert_eq!(case.encode(&value).unwrap_err().kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_tags_in_definition_order() {
        let tags: Vec<_> = shapes().tags().collect();
        assert_eq!(tags, vec!["Point", "Polygon"]);
    }
}
