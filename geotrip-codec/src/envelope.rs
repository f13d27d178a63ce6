//! Envelope codec: discriminator, bbox and unknown-member capture around
//! a kind-specific payload

use crate::codec::{json_type_name, CaseCodec, Codec, ObjectCodec, PayloadCodec};
use crate::context::DecodeContext;
use crate::primitives::BboxCodec;
use geotrip_format::constants::{BBOX_MEMBER, TYPE_MEMBER};
use geotrip_format::{Envelope, Kind, Result};
use serde_json::{Map, Value};

/// Object codec for `Envelope<P::Value>` of one fixed kind.
///
/// Decode consumes `type` (which must equal the kind), then `bbox`, then
/// whatever the payload codec takes; every remaining member lands in
/// [`Envelope::unknown`]. Encode writes the unknown members first, then
/// `type`, `bbox` and the payload members, so modelled members win over
/// any same-named entry in `unknown`.
#[derive(Debug, Clone)]
pub struct EnvelopeCodec<P> {
    kind: Kind,
    payload: P,
}

impl<P> EnvelopeCodec<P> {
    /// Envelope of `kind` around `payload`.
    pub fn new(kind: Kind, payload: P) -> Self {
        Self { kind, payload }
    }

    /// The kind this envelope reads and writes.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    fn take_discriminator(
        &self,
        members: &mut Map<String, Value>,
        cx: &mut DecodeContext,
    ) -> Result<()> {
        let expected = self.kind.as_str();
        match members.remove(TYPE_MEMBER) {
            Some(Value::String(tag)) if tag == expected => Ok(()),
            Some(Value::String(tag)) => {
                cx.member(TYPE_MEMBER, |cx| Err(cx.unknown_variant(&tag, expected)))
            }
            Some(other) => cx.member(TYPE_MEMBER, |cx| {
                Err(cx.violation(format!(
                    "expected a string, found {}",
                    json_type_name(&other)
                )))
            }),
            None => Err(cx.violation(format!("missing member \"{}\"", TYPE_MEMBER))),
        }
    }
}

impl<P: PayloadCodec> ObjectCodec for EnvelopeCodec<P> {
    type Value = Envelope<P::Value>;

    fn decode_object(
        &self,
        mut members: Map<String, Value>,
        cx: &mut DecodeContext,
    ) -> Result<Self::Value> {
        self.take_discriminator(&mut members, cx)?;
        let bbox = members
            .remove(BBOX_MEMBER)
            .map(|json| cx.member(BBOX_MEMBER, |cx| BboxCodec.decode(json, cx)))
            .transpose()?;
        let payload = self.payload.decode_members(&mut members, cx)?;

        Ok(Envelope {
            payload,
            bbox,
            unknown: members,
        })
    }

    fn encode_object(&self, value: &Self::Value) -> Result<Map<String, Value>> {
        let mut out = value.unknown.clone();
        out.insert(
            TYPE_MEMBER.to_string(),
            Value::String(self.kind.as_str().to_string()),
        );
        if let Some(bbox) = &value.bbox {
            out.insert(BBOX_MEMBER.to_string(), BboxCodec.encode(bbox)?);
        }
        self.payload.encode_members(&value.payload, &mut out)?;
        Ok(out)
    }
}

impl<P: PayloadCodec> CaseCodec for EnvelopeCodec<P> {
    fn tag(&self) -> &'static str {
        self.kind.as_str()
    }
}
