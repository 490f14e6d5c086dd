//! # Encoder Input Normalization
//!
//! [`RlpInput`] is the tagged union of every form the encoder accepts.
//! [`RlpInput::normalize()`] collapses it into an [`RlpValue`] in one pass:
//!
//! 1. `"0x"`-prefixed strings are hex-decoded (case-insensitive; an odd
//!    number of digits is left-padded with a zero).
//! 2. Other strings are taken byte-for-byte as UTF-8.
//! 3. Unsigned integers become their minimal big-endian bytes; `0` is the
//!    empty string.
//! 4. `true` is `[0x01]`, `false` is the empty string.
//! 5. Lists normalize element-wise.
//!
//! `""` and `"0x"` both normalize to the empty string.

use serde_json::Value;

use super::{to_be_bytes_minimal, RlpValue};
use crate::error::RlpError;

/// A value in any of the convenience forms the encoder accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RlpInput {
    /// A hex string (`"0x…"`) or raw text, classified by prefix.
    Str(String),
    /// A non-negative integer.
    Uint(u128),
    /// A boolean.
    Bool(bool),
    /// Raw bytes, passed through unchanged.
    Bytes(Vec<u8>),
    /// A (possibly nested) sequence.
    List(Vec<RlpInput>),
}

impl RlpInput {
    /// Normalize into the two-variant [`RlpValue`] the encoder consumes.
    ///
    /// # Errors
    ///
    /// Returns [`RlpError::InvalidHex`] if a `0x`-prefixed string contains
    /// non-hex characters.
    pub fn normalize(&self) -> Result<RlpValue, RlpError> {
        match self {
            Self::Str(s) => normalize_str(s).map(RlpValue::Bytes),
            Self::Uint(n) => Ok(RlpValue::Bytes(to_be_bytes_minimal(*n))),
            Self::Bool(true) => Ok(RlpValue::Bytes(vec![0x01])),
            Self::Bool(false) => Ok(RlpValue::empty_bytes()),
            Self::Bytes(b) => Ok(RlpValue::Bytes(b.clone())),
            Self::List(items) => items
                .iter()
                .map(Self::normalize)
                .collect::<Result<Vec<_>, _>>()
                .map(RlpValue::List),
        }
    }

    /// Map a JSON value onto the accepted input forms.
    ///
    /// Strings, non-negative integers, booleans, and arrays of those are
    /// accepted. `null`, objects, negative numbers, and floats are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`RlpError::InvalidInputKind`] with the offending value.
    pub fn from_json(value: &Value) -> Result<Self, RlpError> {
        match value {
            Value::String(s) => Ok(Self::Str(s.clone())),
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Ok(Self::Uint(u128::from(u)))
                } else if n.is_i64() {
                    Err(invalid_kind("negative integer", value))
                } else {
                    Err(invalid_kind("float", value))
                }
            }
            Value::Array(items) => items
                .iter()
                .map(Self::from_json)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::List),
            Value::Null => Err(invalid_kind("null", value)),
            Value::Object(_) => Err(invalid_kind("object", value)),
        }
    }
}

impl From<&str> for RlpInput {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for RlpInput {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<u64> for RlpInput {
    fn from(n: u64) -> Self {
        Self::Uint(u128::from(n))
    }
}

impl From<u128> for RlpInput {
    fn from(n: u128) -> Self {
        Self::Uint(n)
    }
}

impl From<bool> for RlpInput {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<u8>> for RlpInput {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

impl From<Vec<RlpInput>> for RlpInput {
    fn from(items: Vec<RlpInput>) -> Self {
        Self::List(items)
    }
}

fn normalize_str(s: &str) -> Result<Vec<u8>, RlpError> {
    let Some(digits) = s.strip_prefix("0x") else {
        return Ok(s.as_bytes().to_vec());
    };
    let decoded = if digits.len() % 2 == 1 {
        hex::decode(format!("0{digits}"))
    } else {
        hex::decode(digits)
    };
    decoded.map_err(|e| RlpError::InvalidHex {
        value: s.to_string(),
        reason: e.to_string(),
    })
}

fn invalid_kind(kind: &'static str, value: &Value) -> RlpError {
    RlpError::InvalidInputKind {
        kind,
        value: value.to_string(),
    }
}
