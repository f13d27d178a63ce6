//! Input sources and document decoding

use geotrip_codec::Schema;
use geotrip_format::constants::MAX_NESTING_DEPTH;
use geotrip_format::{DecodeOptions, Document, GeoJsonError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;
use tracing::debug;

/// Where a document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    Path(PathBuf),
}

impl InputSource {
    /// Interpret a command-line argument; `-` means standard input.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::Path(PathBuf::from(arg))
        }
    }

    /// Open the source for reading.
    pub fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::Path(path) => {
                let file = File::open(path).map_err(|e| {
                    GeoJsonError::Io(io::Error::new(
                        e.kind(),
                        format!("{}: {}", path.display(), e),
                    ))
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Deepest bracket nesting in `bytes`, ignoring brackets inside strings.
/// Stops counting once `limit` is exceeded.
fn nesting_depth(bytes: &[u8], limit: usize) -> usize {
    let (mut depth, mut deepest) = (0usize, 0usize);
    let (mut in_string, mut escaped) = (false, false);
    for &b in bytes {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                deepest = deepest.max(depth);
                if deepest > limit {
                    break;
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

/// Parse JSON text. serde_json's fixed recursion limit is replaced by
/// [`MAX_NESTING_DEPTH`], checked up front and reported as a schema
/// violation rather than a syntax error.
fn parse_slice(bytes: &[u8], locs: bool) -> Result<Value> {
    if nesting_depth(bytes, MAX_NESTING_DEPTH) > MAX_NESTING_DEPTH {
        return Err(GeoJsonError::violation(format!(
            "document nests deeper than {} levels",
            MAX_NESTING_DEPTH
        )));
    }

    let mut de = serde_json::Deserializer::from_slice(bytes);
    de.disable_recursion_limit();
    let json = Value::deserialize(&mut de).map_err(|e| GeoJsonError::from_parse(e, locs))?;
    de.end().map_err(|e| GeoJsonError::from_parse(e, locs))?;
    Ok(json)
}

/// Parse and decode one document held in memory.
pub fn decode_slice(bytes: &[u8], options: DecodeOptions) -> Result<Document> {
    let json = parse_slice(bytes, options.locs)?;
    let document = Schema::shared()?.decode(json, options)?;
    debug!(kind = %document.kind(), bytes = bytes.len(), "decoded document");
    Ok(document)
}

/// Read `input` to the end, then decode it as one document. Returns the
/// document and the number of bytes consumed.
pub fn decode_reader<R: Read>(mut input: R, options: DecodeOptions) -> Result<(Document, u64)> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    let document = decode_slice(&bytes, options)?;
    Ok((document, bytes.len() as u64))
}
