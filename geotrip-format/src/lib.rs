//! geotrip Format - Core types for lossless GeoJSON round-tripping
//!
//! This crate provides the pieces of the geotrip workspace that carry no
//! codec logic and no I/O:
//!
//! - Discriminator kinds
//! - Member names and RFC 7946 constants
//! - The typed document model (envelopes, geometries, features)
//! - Decode options
//! - Error types

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod kind;
pub mod model;
pub mod options;

// Re-export commonly used types
pub use error::{ErrorKind, GeoJsonError, Location, Result};
pub use kind::Kind;
pub use model::{
    Bbox, Document, Envelope, Feature, FeatureCollection, FeatureId, FeaturePayload, Geometry,
    GeometryCollection, LineString, Member, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon, Position,
};
pub use options::DecodeOptions;
