//! Decode context: options plus the path to the value being decoded

use geotrip_format::{DecodeOptions, GeoJsonError};
use smallvec::SmallVec;
use std::fmt::Write;

/// One step from a JSON value into a child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Object member name
    Member(&'static str),
    /// Array index
    Index(usize),
}

/// Per-call decode state threaded through every codec.
#[derive(Debug, Clone, Default)]
pub struct DecodeContext {
    options: DecodeOptions,
    path: SmallVec<[Segment; 8]>,
}

impl DecodeContext {
    /// Start decoding at the document root.
    pub fn new(options: DecodeOptions) -> Self {
        Self {
            options,
            path: SmallVec::new(),
        }
    }

    /// Options for this decode.
    pub fn options(&self) -> DecodeOptions {
        self.options
    }

    /// Current depth below the root.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Run `f` with the path extended by an object member.
    pub fn member<T>(
        &mut self,
        name: &'static str,
        f: impl FnOnce(&mut Self) -> geotrip_format::Result<T>,
    ) -> geotrip_format::Result<T> {
        self.path.push(Segment::Member(name));
        let result = f(self);
        self.path.pop();
        result
    }

    /// Run `f` with the path extended by an array index.
    pub fn index<T>(
        &mut self,
        index: usize,
        f: impl FnOnce(&mut Self) -> geotrip_format::Result<T>,
    ) -> geotrip_format::Result<T> {
        self.path.push(Segment::Index(index));
        let result = f(self);
        self.path.pop();
        result
    }

    /// The current path as an RFC 6901 JSON Pointer (`""` at the root).
    pub fn pointer(&self) -> String {
        let mut out = String::new();
        for segment in &self.path {
            out.push('/');
            match segment {
                Segment::Member(name) => {
                    for ch in name.chars() {
                        match ch {
                            '~' => out.push_str("~0"),
                            '/' => out.push_str("~1"),
                            c => out.push(c),
                        }
                    }
                }
                Segment::Index(i) => {
                    let _ = write!(out, "{}", i);
                }
            }
        }
        out
    }

    fn location(&self) -> Option<String> {
        self.options.locs.then(|| self.pointer())
    }

    /// A schema violation at the current path.
    pub fn violation(&self, message: impl Into<String>) -> GeoJsonError {
        GeoJsonError::SchemaViolation {
            message: message.into(),
            path: self.location(),
        }
    }

    /// An unknown discriminator at the current path.
    pub fn unknown_variant(&self, tag: &str, context: &str) -> GeoJsonError {
        GeoJsonError::UnknownVariant {
            tag: tag.to_string(),
            context: context.to_string(),
            path: self.location(),
        }
    }
}
