//! Codec traits and member helpers
//!
//! Three layers of codec cooperate:
//!
//! - [`Codec`] maps one JSON value to a typed value and back.
//! - [`ObjectCodec`] maps a whole JSON object (its member map) and back.
//!   Dispatcher cases are object codecs.
//! - [`PayloadCodec`] consumes only the members it models from an object,
//!   leaving the rest for the enclosing envelope to capture.

use crate::context::DecodeContext;
use geotrip_format::{Member, Result};
use serde_json::{Map, Value};

/// Bidirectional mapping between a JSON value and `Self::Value`.
pub trait Codec: Send + Sync {
    /// Typed value produced by decode.
    type Value;

    /// Decode an owned JSON value.
    fn decode(&self, json: Value, cx: &mut DecodeContext) -> Result<Self::Value>;

    /// Encode a typed value.
    fn encode(&self, value: &Self::Value) -> Result<Value>;
}

/// Bidirectional mapping between a JSON object's members and `Self::Value`.
pub trait ObjectCodec: Send + Sync {
    /// Typed value produced by decode.
    type Value;

    /// Decode from the full member map, discriminator included.
    fn decode_object(&self, members: Map<String, Value>, cx: &mut DecodeContext)
        -> Result<Self::Value>;

    /// Encode to a member map, discriminator included.
    fn encode_object(&self, value: &Self::Value) -> Result<Map<String, Value>>;
}

/// An object codec that always writes one fixed discriminator string.
pub trait CaseCodec: ObjectCodec {
    /// The discriminator string this codec reads and writes.
    fn tag(&self) -> &'static str;
}

/// Codec for the kind-specific members of an object.
pub trait PayloadCodec: Send + Sync {
    /// Typed payload.
    type Value;

    /// Remove and decode the members this codec models.
    fn decode_members(
        &self,
        members: &mut Map<String, Value>,
        cx: &mut DecodeContext,
    ) -> Result<Self::Value>;

    /// Insert the members this codec models.
    fn encode_members(&self, value: &Self::Value, out: &mut Map<String, Value>) -> Result<()>;
}

impl<C: Codec + ?Sized> Codec for std::sync::Arc<C> {
    type Value = C::Value;

    fn decode(&self, json: Value, cx: &mut DecodeContext) -> Result<Self::Value> {
        (**self).decode(json, cx)
    }

    fn encode(&self, value: &Self::Value) -> Result<Value> {
        (**self).encode(value)
    }
}

/// Name of a JSON value's type, for diagnostics.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Require an object.
pub fn expect_object(json: Value, cx: &DecodeContext) -> Result<Map<String, Value>> {
    match json {
        Value::Object(members) => Ok(members),
        other => Err(cx.violation(format!(
            "expected an object, found {}",
            json_type_name(&other)
        ))),
    }
}

/// Require an array.
pub fn expect_array(json: Value, cx: &DecodeContext) -> Result<Vec<Value>> {
    match json {
        Value::Array(items) => Ok(items),
        other => Err(cx.violation(format!(
            "expected an array, found {}",
            json_type_name(&other)
        ))),
    }
}

/// Remove and decode a member that must be present.
pub fn take_required<C: Codec + ?Sized>(
    members: &mut Map<String, Value>,
    name: &'static str,
    codec: &C,
    cx: &mut DecodeContext,
) -> Result<C::Value> {
    match members.remove(name) {
        Some(json) => cx.member(name, |cx| codec.decode(json, cx)),
        None => Err(cx.violation(format!("missing member \"{}\"", name))),
    }
}

/// Remove and decode a member that may be absent. An explicit `null` is
/// handed to the codec, which decides whether to accept it.
pub fn take_optional<C: Codec + ?Sized>(
    members: &mut Map<String, Value>,
    name: &'static str,
    codec: &C,
    cx: &mut DecodeContext,
) -> Result<Option<C::Value>> {
    members
        .remove(name)
        .map(|json| cx.member(name, |cx| codec.decode(json, cx)))
        .transpose()
}

/// Remove and decode a member that may be absent or `null`.
pub fn take_nullable<C: Codec + ?Sized>(
    members: &mut Map<String, Value>,
    name: &'static str,
    codec: &C,
    cx: &mut DecodeContext,
) -> Result<Member<C::Value>> {
    match members.remove(name) {
        None => Ok(Member::Absent),
        Some(Value::Null) => Ok(Member::Null),
        Some(json) => cx
            .member(name, |cx| codec.decode(json, cx))
            .map(Member::Present),
    }
}

/// Encode a three-state member.
pub fn put_nullable<C: Codec + ?Sized>(
    out: &mut Map<String, Value>,
    name: &str,
    codec: &C,
    value: &Member<C::Value>,
) -> Result<()> {
    match value {
        Member::Absent => {}
        Member::Null => {
            out.insert(name.to_string(), Value::Null);
        }
        Member::Present(v) => {
            out.insert(name.to_string(), codec.encode(v)?);
        }
    }
    Ok(())
}

/// Payload made of a single required member.
#[derive(Debug, Clone)]
pub struct Required<C> {
    name: &'static str,
    codec: C,
}

impl<C> Required<C> {
    /// Payload stored under `name` and decoded with `codec`.
    pub fn new(name: &'static str, codec: C) -> Self {
        Self { name, codec }
    }
}

impl<C: Codec> PayloadCodec for Required<C> {
    type Value = C::Value;

    fn decode_members(
        &self,
        members: &mut Map<String, Value>,
        cx: &mut DecodeContext,
    ) -> Result<Self::Value> {
        take_required(members, self.name, &self.codec, cx)
    }

    fn encode_members(&self, value: &Self::Value, out: &mut Map<String, Value>) -> Result<()> {
        out.insert(self.name.to_string(), self.codec.encode(value)?);
        Ok(())
    }
}
