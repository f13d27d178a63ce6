//! Decode configuration

/// Options controlling how strictly documents are decoded and how much
/// location detail diagnostics carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Attach source locations to errors: JSON Pointer paths for schema
    /// errors, line and column for syntax errors.
    pub locs: bool,
    /// Enforce RFC 7946 arity rules on positions (at least 2 components)
    /// and bounding boxes (even length, at least 4 components).
    pub check_lengths: bool,
}

impl DecodeOptions {
    /// Options with source locations enabled.
    pub fn with_locs(mut self, locs: bool) -> Self {
        self.locs = locs;
        self
    }

    /// Options with arity checks enabled.
    pub fn with_length_checks(mut self, check: bool) -> Self {
        self.check_lengths = check;
        self
    }
}
