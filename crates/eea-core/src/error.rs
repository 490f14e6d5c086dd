//! # Error Hierarchy
//!
//! Structured error types for the workspace, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests. Each failure domain
//! has its own enum; the CLI wraps them with `anyhow` context.
//!
//! - Encoder input errors carry the offending value for diagnostics.
//! - Decoder errors name the structural rule the input broke.
//! - Validation errors name the field and the rule that rejected it.

use thiserror::Error;

/// Errors raised while normalizing encoder input.
///
/// The binary algorithm itself has no failure path; every variant here is
/// produced before any bytes are written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RlpError {
    /// The value is not a string, non-negative integer, boolean, or a
    /// (nested) sequence of those.
    #[error("invalid RLP input kind {kind}: {value}")]
    InvalidInputKind {
        /// Short name of the rejected kind (e.g. `"null"`, `"float"`).
        kind: &'static str,
        /// The offending value, rendered for diagnostics.
        value: String,
    },

    /// A `0x`-prefixed string whose payload is not hexadecimal.
    #[error("invalid hex string {value:?}: {reason}")]
    InvalidHex {
        /// The offending string.
        value: String,
        /// Why the hex decoder rejected it.
        reason: String,
    },
}

/// Errors raised while decoding RLP bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A header or payload runs past the end of the input.
    #[error("input too short: needed {needed} bytes at offset {offset}, {available} available")]
    InputTooShort {
        /// Offset at which the item starts.
        offset: usize,
        /// Bytes required to complete the item.
        needed: usize,
        /// Bytes remaining from `offset`.
        available: usize,
    },

    /// A single byte below `0x80` was wrapped in a `0x81` string header.
    #[error("non-canonical single byte 0x{0:02x} encoded with a length prefix")]
    NonCanonicalSingleByte(u8),

    /// A long-form length header was used for a payload of 55 bytes or less.
    #[error("non-canonical size: long-form header for {0}-byte payload")]
    NonCanonicalSize(usize),

    /// Long-form length bytes start with a zero byte.
    #[error("length prefix has a leading zero byte")]
    LeadingZero,

    /// Declared payload length does not fit in `usize`.
    #[error("declared length overflows usize")]
    Overflow,

    /// The input contains more than one top-level item.
    #[error("trailing bytes: item ends at {consumed} of {total} bytes")]
    TrailingBytes {
        /// Bytes consumed by the first item.
        consumed: usize,
        /// Total input length.
        total: usize,
    },

    /// A list payload does not end on an item boundary.
    #[error("list payload of {expected} bytes does not end on an item boundary")]
    ListLengthMismatch {
        /// Declared list payload length.
        expected: usize,
    },

    /// Nesting deeper than the caller's limit.
    #[error("list nesting exceeds maximum depth {max}")]
    DepthExceeded {
        /// The configured maximum depth.
        max: usize,
    },

    /// The textual input is not valid hex.
    #[error("invalid hex input: {0}")]
    InvalidHex(String),
}

/// Argument validation failure.
///
/// Surfaced synchronously with the offending field and a human-readable
/// description of the rule that failed. There is no fallback path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An argument failed one of the privacy group option rules.
    #[error("invalid argument {field}: {reason}")]
    InvalidArgument {
        /// The field that failed validation.
        field: &'static str,
        /// Which rule failed.
        reason: String,
    },
}

impl ValidationError {
    /// Shorthand for [`ValidationError::InvalidArgument`].
    pub fn invalid_argument(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    /// The field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidArgument { field, .. } => field,
        }
    }
}
