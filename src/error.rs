//! Error types for TNEF decoding

use thiserror::Error;

/// Errors that can occur while decoding a TNEF stream
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TnefError {
    /// The buffer does not start with the TNEF signature
    #[error("Not a TNEF stream: expected signature 0x223E9F78, found {found:#010X}")]
    NotTnef { found: u32 },

    /// A read ran past the end of the available bytes
    #[error("Truncated input at offset {offset}: needed {needed} bytes, {available} available")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A property list violates its count/length framing
    #[error("Malformed property list at offset {offset}: {reason}")]
    MalformedPropertyList { offset: usize, reason: String },

    /// An attachment-level record arrived before any rendering summary record
    #[error("Attachment record {id:#010X} at offset {offset} has no open attachment")]
    AttachmentRecordWithoutOpenAttachment { id: u32, offset: usize },

    /// A typed value was requested from an incompatible property
    #[error("Cannot decode attribute {id:#06X} (type {data_type:#06X}) as {requested}")]
    TypeMismatch {
        id: u32,
        data_type: u16,
        requested: &'static str,
    },

    /// A nested stream exceeded the configured depth or size guard
    #[error(
        "Nested stream limit exceeded: depth {depth} (max {max_depth}), size {size} bytes (max {max_size})"
    )]
    RecursionLimitExceeded {
        depth: usize,
        max_depth: usize,
        size: usize,
        max_size: usize,
    },

    /// Exporting the decoded model failed
    #[error("Failed to serialize document: {0}")]
    Serialize(String),
}

impl TnefError {
    /// Byte offset the error points at, when the kind carries one
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::NotTnef { .. } => Some(0),
            Self::TruncatedInput { offset, .. }
            | Self::MalformedPropertyList { offset, .. }
            | Self::AttachmentRecordWithoutOpenAttachment { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TnefError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}

/// Result type for TNEF decoding operations
pub type Result<T> = std::result::Result<T, TnefError>;
