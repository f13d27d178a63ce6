//! geotrip Codec - Schema-driven GeoJSON decoding and encoding
//!
//! The building blocks, leaves first:
//!
//! - Codec traits and the decode context that tracks the current path
//! - Position and bbox array codecs
//! - The envelope codec (discriminator, bbox, unknown members)
//! - The tagged-union dispatcher and its cases
//! - Forward references for recursive schemas
//! - The geometry, feature and document schemas

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod codec;
pub mod context;
pub mod deferred;
pub mod dispatch;
pub mod envelope;
pub mod feature;
pub mod geometry;
pub mod primitives;
pub mod schema;

// Re-export commonly used types
pub use codec::{CaseCodec, Codec, ObjectCodec, PayloadCodec, Required};
pub use context::{DecodeContext, Segment};
pub use deferred::Deferred;
pub use dispatch::{Case, Dispatcher, Tagged};
pub use envelope::EnvelopeCodec;
pub use feature::{FeatureIdCodec, FeaturePayloadCodec, PropertiesCodec};
pub use geometry::GeometryDispatcher;
pub use primitives::{BboxCodec, ListOf, PositionCodec};
pub use schema::Schema;
