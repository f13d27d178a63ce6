//! Error types for geotrip

use std::fmt;
use thiserror::Error;

/// Line and column of a syntax error in the input text (both 1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Line number
    pub line: usize,
    /// Column number
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Broad error category, independent of message and location details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input is not syntactically valid JSON.
    MalformedJson,
    /// A member is missing, has the wrong JSON type, or has the wrong shape.
    SchemaViolation,
    /// A discriminator string matched no case.
    UnknownVariant,
    /// Reading or writing a stream failed.
    Io,
    /// A schema was defined inconsistently.
    Definition,
    /// Internal invariant was violated.
    Internal,
}

/// geotrip error types
#[derive(Debug, Error)]
pub enum GeoJsonError {
    /// Input is not syntactically valid JSON.
    #[error("malformed JSON: {message}{}", at_location(.location))]
    MalformedJson {
        /// Parser message without location suffix
        message: String,
        /// Position of the syntax error, when locations were requested
        location: Option<Location>,
    },
    /// A member is missing, has the wrong JSON type, or has the wrong shape.
    #[error("{message}{}", at_path(.path))]
    SchemaViolation {
        /// What was expected and what was found
        message: String,
        /// JSON Pointer to the offending value, when locations were requested
        path: Option<String>,
    },
    /// A discriminator string matched no case of the active dispatcher.
    #[error("unknown {context} type \"{tag}\"{}", at_path(.path))]
    UnknownVariant {
        /// The offending discriminator string
        tag: String,
        /// Label of the dispatcher or envelope that rejected it
        context: String,
        /// JSON Pointer to the offending object, when locations were requested
        path: Option<String>,
    },
    /// Two cases of one dispatcher share a discriminator string.
    #[error("duplicate case \"{tag}\" in {context} dispatcher")]
    DuplicateCase {
        /// The shared discriminator string
        tag: &'static str,
        /// Label of the dispatcher being defined
        context: &'static str,
    },
    /// A forward schema reference was used before being bound.
    #[error("schema reference {0} used before it was bound")]
    UnboundReference(&'static str),
    /// A forward schema reference was bound more than once.
    #[error("schema reference {0} is already bound")]
    ReboundReference(&'static str),
    /// I/O operation failed while reading or writing data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Internal invariant was violated.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GeoJsonError {
    /// Build a schema violation without location detail.
    pub fn violation(message: impl Into<String>) -> Self {
        GeoJsonError::SchemaViolation {
            message: message.into(),
            path: None,
        }
    }

    /// Classify a `serde_json` parse error, keeping line and column only
    /// when `locs` is set.
    pub fn from_parse(err: serde_json::Error, locs: bool) -> Self {
        if err.is_io() {
            return GeoJsonError::Io(err.into());
        }

        let (line, column) = (err.line(), err.column());
        let full = err.to_string();
        let suffix = format!(" at line {} column {}", line, column);
        let message = full
            .strip_suffix(&suffix)
            .map(str::to_string)
            .unwrap_or(full);
        let location = (locs && line > 0).then_some(Location { line, column });

        GeoJsonError::MalformedJson { message, location }
    }

    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GeoJsonError::MalformedJson { .. } => ErrorKind::MalformedJson,
            GeoJsonError::SchemaViolation { .. } => ErrorKind::SchemaViolation,
            GeoJsonError::UnknownVariant { .. } => ErrorKind::UnknownVariant,
            GeoJsonError::DuplicateCase { .. }
            | GeoJsonError::UnboundReference(_)
            | GeoJsonError::ReboundReference(_) => ErrorKind::Definition,
            GeoJsonError::Io(_) => ErrorKind::Io,
            GeoJsonError::Internal(_) => ErrorKind::Internal,
        }
    }
}

fn at_path(path: &Option<String>) -> String {
    match path {
        Some(p) if p.is_empty() => " at document root".to_string(),
        Some(p) => format!(" at {}", p),
        None => String::new(),
    }
}

fn at_location(location: &Option<Location>) -> String {
    location
        .map(|loc| format!(" at {}", loc))
        .unwrap_or_default()
}

/// Result type alias
pub type Result<T> = std::result::Result<T, GeoJsonError>;
