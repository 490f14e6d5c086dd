//! Normalized RLP value tree.

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// A normalized RLP item: either a raw byte string or an ordered list.
///
/// This is the only type the binary encoder accepts. Convenience forms
/// (text, hex strings, integers, booleans) are turned into `RlpValue` by
/// [`RlpInput::normalize()`](super::RlpInput::normalize).
///
/// Serializes to JSON with byte strings as `0x`-prefixed lowercase hex and
/// lists as arrays.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RlpValue {
    /// A byte string of any length.
    Bytes(Vec<u8>),
    /// An ordered sequence of items. Order is significant.
    List(Vec<RlpValue>),
}

impl RlpValue {
    /// The empty byte string, encoded as `0x80`.
    pub fn empty_bytes() -> Self {
        Self::Bytes(Vec::new())
    }

    /// The empty list, encoded as `0xc0`.
    pub fn empty_list() -> Self {
        Self::List(Vec::new())
    }

    /// Returns the byte payload if this is a byte string.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            Self::List(_) => None,
        }
    }

    /// Returns the items if this is a list.
    pub fn as_list(&self) -> Option<&[RlpValue]> {
        match self {
            Self::Bytes(_) => None,
            Self::List(items) => Some(items),
        }
    }

    /// Returns true for the `List` variant.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Depth of list nesting. A byte string has depth 0, `[]` has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::Bytes(_) => 0,
            Self::List(items) => 1 + items.iter().map(Self::depth).max().unwrap_or(0),
        }
    }
}

impl From<Vec<u8>> for RlpValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for RlpValue {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for RlpValue {
    fn from(bytes: [u8; N]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<Vec<RlpValue>> for RlpValue {
    fn from(items: Vec<RlpValue>) -> Self {
        Self::List(items)
    }
}

impl Serialize for RlpValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bytes(b) => serializer.serialize_str(&format!("0x{}", hex::encode(b))),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}
