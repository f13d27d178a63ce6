//! Feature and FeatureCollection schemas

use crate::codec::{
    expect_object, json_type_name, put_nullable, take_nullable, take_optional, Codec,
    PayloadCodec, Required,
};
use crate::context::DecodeContext;
use crate::dispatch::{Case, Tagged};
use crate::envelope::EnvelopeCodec;
use crate::geometry::GeometryDispatcher;
use crate::primitives::{decode_number, encode_number, ListOf};
use geotrip_format::constants::{FEATURES_MEMBER, GEOMETRY_MEMBER, ID_MEMBER, PROPERTIES_MEMBER};
use geotrip_format::{Feature, FeatureCollection, FeatureId, FeaturePayload, Kind, Result};
use serde_json::{Map, Value};
use std::sync::Arc;

impl Tagged for Feature {
    fn tag(&self) -> &'static str {
        Kind::Feature.as_str()
    }
}

impl Tagged for FeatureCollection {
    fn tag(&self) -> &'static str {
        Kind::FeatureCollection.as_str()
    }
}

/// Codec for the `id` member: a JSON number or a JSON string, never
/// converted into one another.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureIdCodec;

impl Codec for FeatureIdCodec {
    type Value = FeatureId;

    fn decode(&self, json: Value, cx: &mut DecodeContext) -> Result<FeatureId> {
        match json {
            Value::String(s) => Ok(FeatureId::String(s)),
            number @ Value::Number(_) => decode_number(number, cx).map(FeatureId::Number),
            other => Err(cx.violation(format!(
                "expected a number or string, found {}",
                json_type_name(&other)
            ))),
        }
    }

    fn encode(&self, value: &FeatureId) -> Result<Value> {
        match value {
            FeatureId::Number(n) => encode_number(*n),
            FeatureId::String(s) => Ok(Value::String(s.clone())),
        }
    }
}

/// Codec for `properties`: any JSON object, kept as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertiesCodec;

impl Codec for PropertiesCodec {
    type Value = Map<String, Value>;

    fn decode(&self, json: Value, cx: &mut DecodeContext) -> Result<Self::Value> {
        expect_object(json, cx)
    }

    fn encode(&self, value: &Self::Value) -> Result<Value> {
        Ok(Value::Object(value.clone()))
    }
}

/// Payload codec for the `id`, `geometry` and `properties` members.
#[derive(Debug, Clone)]
pub struct FeaturePayloadCodec {
    geometry: Arc<GeometryDispatcher>,
}

impl FeaturePayloadCodec {
    /// Decode `geometry` through `geometry`.
    pub fn new(geometry: Arc<GeometryDispatcher>) -> Self {
        Self { geometry }
    }
}

impl PayloadCodec for FeaturePayloadCodec {
    type Value = FeaturePayload;

    fn decode_members(
        &self,
        members: &mut Map<String, Value>,
        cx: &mut DecodeContext,
    ) -> Result<FeaturePayload> {
        let id = take_optional(members, ID_MEMBER, &FeatureIdCodec, cx)?;
        let geometry = take_nullable(members, GEOMETRY_MEMBER, &*self.geometry, cx)?;
        let properties = take_nullable(members, PROPERTIES_MEMBER, &PropertiesCodec, cx)?;
        Ok(FeaturePayload {
            id,
            geometry,
            properties,
        })
    }

    fn encode_members(&self, value: &FeaturePayload, out: &mut Map<String, Value>) -> Result<()> {
        if let Some(id) = &value.id {
            out.insert(ID_MEMBER.to_string(), FeatureIdCodec.encode(id)?);
        }
        put_nullable(out, GEOMETRY_MEMBER, &*self.geometry, &value.geometry)?;
        put_nullable(out, PROPERTIES_MEMBER, &PropertiesCodec, &value.properties)?;
        Ok(())
    }
}

/// The `"Feature"` case, decoding geometries through `geometry`.
pub fn feature_case(geometry: Arc<GeometryDispatcher>) -> Case<Feature> {
    Case::new(
        EnvelopeCodec::new(Kind::Feature, FeaturePayloadCodec::new(geometry)),
        |feature| feature,
        |feature| Some(feature),
    )
}

/// The `"FeatureCollection"` case. Members of `features` are decoded with
/// `feature` directly, without dispatch.
pub fn feature_collection_case(feature: Case<Feature>) -> Case<FeatureCollection> {
    Case::new(
        EnvelopeCodec::new(
            Kind::FeatureCollection,
            Required::new(FEATURES_MEMBER, ListOf::new(feature)),
        ),
        |collection| collection,
        |collection| Some(collection),
    )
}
