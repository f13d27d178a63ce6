//! The complete GeoJSON schema
//!
//! Every case is defined once. The geometry dispatcher owns the seven
//! geometry cases; the feature and collection dispatchers own one case
//! each; the document dispatcher registers all nine again through
//! [`Case::lift`], so both views share the same codecs.

use crate::codec::Codec;
use crate::context::DecodeContext;
use crate::deferred::Deferred;
use crate::dispatch::{Case, Dispatcher, Tagged};
use crate::feature::{feature_case, feature_collection_case};
use crate::geometry::{geometry_cases, GeometryDispatcher};
use geotrip_format::{DecodeOptions, Document, Feature, FeatureCollection, Geometry, Result};
use serde_json::Value;
use std::sync::{Arc, OnceLock};
use tracing::trace;

impl Tagged for Document {
    fn tag(&self) -> &'static str {
        self.kind().as_str()
    }
}

/// The dispatchers for every GeoJSON shape.
///
/// Built once and immutable afterwards; a `Schema` can be shared across
/// threads by reference.
#[derive(Debug)]
pub struct Schema {
    geometry: Arc<GeometryDispatcher>,
    feature: Dispatcher<Feature>,
    feature_collection: Dispatcher<FeatureCollection>,
    document: Dispatcher<Document>,
}

static SHARED: OnceLock<Schema> = OnceLock::new();

impl Schema {
    /// Build a fresh schema.
    pub fn new() -> Result<Self> {
        let collection_member = Deferred::new("Geometry");
        let geometry = Arc::new(Dispatcher::new(
            "Geometry",
            geometry_cases(&collection_member),
        )?);
        collection_member.bind(&geometry)?;

        let feature = feature_case(Arc::clone(&geometry));
        let feature_collection = feature_collection_case(feature.clone());

        let document_cases = geometry
            .cases()
            .iter()
            .map(|case| {
                case.lift(Document::Geometry, |document| match document {
                    Document::Geometry(geometry) => Some(geometry),
                    _ => None,
                })
            })
            .chain([
                feature.lift(Document::Feature, |document| match document {
                    Document::Feature(feature) => Some(feature),
                    _ => None,
                }),
                feature_collection.lift(Document::FeatureCollection, |document| match document {
                    Document::FeatureCollection(collection) => Some(collection),
                    _ => None,
                }),
            ])
            .collect::<Vec<Case<Document>>>();

        let schema = Schema {
            feature: Dispatcher::new("Feature", [feature])?,
            feature_collection: Dispatcher::new("FeatureCollection", [feature_collection])?,
            document: Dispatcher::new("GeoJSON", document_cases)?,
            geometry,
        };
        trace!(
            document_cases = schema.document.cases().len(),
            "built GeoJSON schema"
        );
        Ok(schema)
    }

    /// The process-wide schema, built on first use.
    pub fn shared() -> Result<&'static Schema> {
        if let Some(schema) = SHARED.get() {
            return Ok(schema);
        }
        let schema = Schema::new()?;
        // First initialiser wins if two threads race here.
        Ok(SHARED.get_or_init(|| schema))
    }

    /// Dispatcher over the seven geometry kinds.
    pub fn geometry(&self) -> &GeometryDispatcher {
        &self.geometry
    }

    /// Single-case dispatcher for `"Feature"`.
    pub fn feature(&self) -> &Dispatcher<Feature> {
        &self.feature
    }

    /// Single-case dispatcher for `"FeatureCollection"`.
    pub fn feature_collection(&self) -> &Dispatcher<FeatureCollection> {
        &self.feature_collection
    }

    /// Dispatcher over all nine top-level kinds.
    pub fn document(&self) -> &Dispatcher<Document> {
        &self.document
    }

    /// Decode a parsed JSON value as a document.
    pub fn decode(&self, json: Value, options: DecodeOptions) -> Result<Document> {
        let mut cx = DecodeContext::new(options);
        self.document.decode(json, &mut cx)
    }

    /// Encode a document to a JSON value.
    pub fn encode(&self, document: &Document) -> Result<Value> {
        self.document.encode(document)
    }

    /// Decode a parsed JSON value as a geometry.
    pub fn decode_geometry(&self, json: Value, options: DecodeOptions) -> Result<Geometry> {
        let mut cx = DecodeContext::new(options);
        self.geometry.decode(json, &mut cx)
    }
}
