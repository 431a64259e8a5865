//! Decoder configuration.
//!
//! Limits guarding the recursive decoding of attachments that embed another
//! TNEF stream. Missing fields in a serialized configuration fall back to the
//! defaults.

use serde::{Deserialize, Serialize};

/// Default number of nested stream levels decoded below the top-level stream
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Default upper bound on the size of one nested stream
pub const DEFAULT_MAX_NESTED_SIZE: usize = 64 * 1024 * 1024;

/// Options for a decode pass
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DecodeOptions {
    /// Nested streams deeper than this are left undecoded (0 disables nesting)
    pub max_depth: usize,
    /// Nested streams larger than this many bytes are left undecoded
    pub max_nested_size: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_nested_size: DEFAULT_MAX_NESTED_SIZE,
        }
    }
}

impl DecodeOptions {
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn with_max_nested_size(mut self, max_nested_size: usize) -> Self {
        self.max_nested_size = max_nested_size;
        self
    }
}
