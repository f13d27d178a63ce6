//! Numeric array codecs for positions and bounding boxes, plus the
//! generic array codec used to nest them

use crate::codec::{expect_array, json_type_name, Codec};
use crate::context::DecodeContext;
use geotrip_format::constants::{MAX_EXACT_INTEGER, MIN_BBOX_LEN, MIN_POSITION_LEN};
use geotrip_format::{Bbox, GeoJsonError, Position, Result};
use serde_json::{Number, Value};

/// Read a JSON number as `f64`.
pub fn decode_number(json: Value, cx: &DecodeContext) -> Result<f64> {
    match &json {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| cx.violation(format!("number {} is not representable", n))),
        other => Err(cx.violation(format!(
            "expected a number, found {}",
            json_type_name(other)
        ))),
    }
}

/// Write an `f64` as a JSON number. Integral values that `f64` holds
/// exactly are written without a fractional part.
pub fn encode_number(value: f64) -> Result<Value> {
    if !value.is_finite() {
        return Err(GeoJsonError::violation(format!(
            "cannot encode non-finite number {}",
            value
        )));
    }
    let negative_zero = value == 0.0 && value.is_sign_negative();
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER && !negative_zero {
        return Ok(Value::from(value as i64));
    }
    Number::from_f64(value)
        .map(Value::Number)
        .ok_or_else(|| GeoJsonError::violation(format!("cannot encode number {}", value)))
}

fn decode_numbers(json: Value, cx: &mut DecodeContext) -> Result<Vec<f64>> {
    let items = expect_array(json, cx)?;
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| cx.index(i, |cx| decode_number(item, cx)))
        .collect()
}

fn encode_numbers(values: &[f64]) -> Result<Value> {
    values
        .iter()
        .map(|v| encode_number(*v))
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

/// Codec for a [`Position`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionCodec;

impl Codec for PositionCodec {
    type Value = Position;

    fn decode(&self, json: Value, cx: &mut DecodeContext) -> Result<Position> {
        let components = decode_numbers(json, cx)?;
        if cx.options().check_lengths && components.len() < MIN_POSITION_LEN {
            return Err(cx.violation(format!(
                "position needs at least {} components, found {}",
                MIN_POSITION_LEN,
                components.len()
            )));
        }
        Ok(Position(components))
    }

    fn encode(&self, value: &Position) -> Result<Value> {
        encode_numbers(value.as_slice())
    }
}

/// Codec for a [`Bbox`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BboxCodec;

impl Codec for BboxCodec {
    type Value = Bbox;

    fn decode(&self, json: Value, cx: &mut DecodeContext) -> Result<Bbox> {
        let components = decode_numbers(json, cx)?;
        if cx.options().check_lengths
            && (components.len() < MIN_BBOX_LEN || components.len() % 2 != 0)
        {
            return Err(cx.violation(format!(
                "bbox needs an even number of components, at least {}, found {}",
                MIN_BBOX_LEN,
                components.len()
            )));
        }
        Ok(Bbox(components))
    }

    fn encode(&self, value: &Bbox) -> Result<Value> {
        encode_numbers(value.as_slice())
    }
}

/// Ordered array whose elements all use one codec.
#[derive(Debug, Clone, Default)]
pub struct ListOf<C> {
    element: C,
}

impl<C> ListOf<C> {
    /// Array of `element`.
    pub fn new(element: C) -> Self {
        Self { element }
    }
}

impl<C: Codec> Codec for ListOf<C> {
    type Value = Vec<C::Value>;

    fn decode(&self, json: Value, cx: &mut DecodeContext) -> Result<Self::Value> {
        let items = expect_array(json, cx)?;
        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.into_iter().enumerate() {
            out.push(cx.index(i, |cx| self.element.decode(item, cx))?);
        }
        Ok(out)
    }

    fn encode(&self, value: &Self::Value) -> Result<Value> {
        value
            .iter()
            .map(|item| self.element.encode(item))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }
}
