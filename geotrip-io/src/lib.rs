//! geotrip I/O - Trip driver over byte streams
//!
//! This crate bridges byte streams and the GeoJSON schema:
//!
//! - Input sources and document decoding
//! - Layout-selected encoding
//! - The decode-then-encode trip
//! - Parallel batch trips sharing one schema

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod parallel;
pub mod reader;
pub mod writer;

// Re-export commonly used types
pub use geotrip_codec::Schema;
pub use geotrip_format::{DecodeOptions, Document, ErrorKind, GeoJsonError, Kind, Result};
pub use parallel::{trip_batch, ParallelConfig};
pub use reader::{decode_reader, decode_slice, InputSource};
pub use writer::{encode_to_writer, CountingWriter, Layout};

use std::io::{Read, Write};
use tracing::debug;

/// Options for one trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TripOptions {
    /// Output layout
    pub layout: Layout,
    /// Decode behaviour
    pub decode: DecodeOptions,
}

impl TripOptions {
    /// Set the output layout.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the decode options.
    pub fn with_decode(mut self, decode: DecodeOptions) -> Self {
        self.decode = decode;
        self
    }
}

/// What a completed trip processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripSummary {
    /// Kind of the top-level document
    pub kind: Kind,
    /// Bytes read from the input
    pub bytes_read: u64,
    /// Bytes written to the output, trailing newline included
    pub bytes_written: u64,
}

/// Decode all of `input` as one document and re-encode it to `output`.
///
/// Nothing is written when decoding fails.
pub fn trip<R: Read, W: Write>(input: R, output: W, options: &TripOptions) -> Result<TripSummary> {
    let (document, bytes_read) = decode_reader(input, options.decode)?;
    let bytes_written = encode_to_writer(&document, output, options.layout)?;
    let summary = TripSummary {
        kind: document.kind(),
        bytes_read,
        bytes_written,
    };
    debug!(
        kind = %summary.kind,
        bytes_read,
        bytes_written,
        "trip complete"
    );
    Ok(summary)
}

/// Trip `source` to `output`.
pub fn trip_source<W: Write>(
    source: &InputSource,
    output: W,
    options: &TripOptions,
) -> Result<TripSummary> {
    debug!(source = %source, "opening input");
    trip(source.open()?, output, options)
}
