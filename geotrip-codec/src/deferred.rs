//! Forward references for self-referential schemas
//!
//! A GeometryCollection holds geometries, so the geometry dispatcher has a
//! case whose payload codec is the geometry dispatcher itself. The case
//! table is built around a [`Deferred`] handle first; once the dispatcher
//! exists, [`Deferred::bind`] points every clone of the handle at it.
//!
//! The handle keeps only a weak reference, so the dispatcher and its own
//! case table do not form an `Arc` cycle. Whoever built the dispatcher
//! keeps the strong reference alive.

use crate::codec::Codec;
use crate::context::DecodeContext;
use geotrip_format::{GeoJsonError, Result};
use serde_json::Value;
use std::sync::{Arc, OnceLock, Weak};

/// A codec resolved after construction.
pub struct Deferred<C> {
    name: &'static str,
    slot: Arc<OnceLock<Weak<C>>>,
}

impl<C> Clone for Deferred<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<C> std::fmt::Debug for Deferred<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deferred")
            .field("name", &self.name)
            .field("bound", &self.is_bound())
            .finish()
    }
}

impl<C> Deferred<C> {
    /// An unbound reference; `name` labels it in diagnostics.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: Arc::new(OnceLock::new()),
        }
    }

    /// Point this reference (and all its clones) at `target`. Binding
    /// twice is an error.
    pub fn bind(&self, target: &Arc<C>) -> Result<()> {
        self.slot
            .set(Arc::downgrade(target))
            .map_err(|_| GeoJsonError::ReboundReference(self.name))
    }

    /// Whether [`Deferred::bind`] has been called.
    pub fn is_bound(&self) -> bool {
        self.slot.get().is_some()
    }

    /// The bound codec. Fails if unbound or if the target was dropped.
    pub fn resolve(&self) -> Result<Arc<C>> {
        self.slot
            .get()
            .and_then(Weak::upgrade)
            .ok_or(GeoJsonError::UnboundReference(self.name))
    }
}

impl<C: Codec> Codec for Deferred<C> {
    type Value = C::Value;

    fn decode(&self, json: Value, cx: &mut DecodeContext) -> Result<Self::Value> {
        self.resolve()?.decode(json, cx)
    }

    fn encode(&self, value: &Self::Value) -> Result<Value> {
        self.resolve()?.encode(value)
    }
}
