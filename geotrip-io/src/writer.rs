//! Layout-selected document encoding

use geotrip_codec::Schema;
use geotrip_format::{Document, GeoJsonError, Result};
use std::io::{self, Write};
use tracing::debug;

/// Output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// No insignificant whitespace
    #[default]
    Minify,
    /// Two-space indentation, one member per line
    Indent,
}

impl Layout {
    /// The layout's command-line name.
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Minify => "minify",
            Layout::Indent => "indent",
        }
    }
}

impl std::str::FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "minify" => Ok(Layout::Minify),
            "indent" => Ok(Layout::Indent),
            other => Err(format!("unknown layout \"{}\" (expected indent or minify)", other)),
        }
    }
}

/// Writer adapter counting the bytes that pass through it.
pub struct CountingWriter<W> {
    inner: W,
    written: u64,
}

impl<W: Write> CountingWriter<W> {
    /// Wrap `inner`.
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Bytes written so far.
    pub fn written(&self) -> u64 {
        self.written
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

fn from_serialize(err: serde_json::Error) -> GeoJsonError {
    if err.is_io() {
        GeoJsonError::Io(err.into())
    } else {
        GeoJsonError::Internal(format!("failed to serialize document: {}", err))
    }
}

/// Encode `document`, write it in `layout` followed by a newline, and flush.
/// Returns the number of bytes written.
///
/// Bytes already handed to `output` are not taken back if a later write
/// fails.
pub fn encode_to_writer<W: Write>(document: &Document, output: W, layout: Layout) -> Result<u64> {
    let json = Schema::shared()?.encode(document)?;
    let mut writer = CountingWriter::new(output);
    match layout {
        Layout::Minify => serde_json::to_writer(&mut writer, &json),
        Layout::Indent => serde_json::to_writer_pretty(&mut writer, &json),
    }
    .map_err(from_serialize)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    debug!(layout = layout.as_str(), bytes = writer.written(), "encoded document");
    Ok(writer.written())
}
