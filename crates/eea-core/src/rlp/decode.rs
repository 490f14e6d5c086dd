//! RLP decoder.
//!
//! Accepts exactly one canonical item. Any input that the encoder would
//! not have produced is rejected, which makes `decode` the inverse of
//! [`encode_value`](super::encode_value) on its whole domain.

use super::{RlpValue, SHORT_PAYLOAD_MAX};
use crate::error::DecodeError;

/// Default nesting ceiling for [`decode()`].
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Decoded item header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Header {
    list: bool,
    /// Bytes occupied by the header itself (0 for a bare single byte).
    header_len: usize,
    payload_len: usize,
}

/// Decode a single canonical RLP item, with nesting limited to
/// [`DEFAULT_MAX_DEPTH`].
pub fn decode(input: &[u8]) -> Result<RlpValue, DecodeError> {
    decode_with_depth(input, DEFAULT_MAX_DEPTH)
}

/// Decode a single canonical RLP item, rejecting lists nested deeper than
/// `max_depth`.
pub fn decode_with_depth(input: &[u8], max_depth: usize) -> Result<RlpValue, DecodeError> {
    let (value, consumed) = decode_item(input, 0, 0, max_depth)?;
    if consumed != input.len() {
        return Err(DecodeError::TrailingBytes {
            consumed,
            total: input.len(),
        });
    }
    Ok(value)
}

/// Decode a hex string as produced by [`encode_to_hex`](super::encode_to_hex).
///
/// The `0x` prefix is optional and digits are case-insensitive.
pub fn decode_hex(input: &str) -> Result<RlpValue, DecodeError> {
    decode_hex_with_depth(input, DEFAULT_MAX_DEPTH)
}

/// [`decode_hex()`] with an explicit nesting ceiling.
pub fn decode_hex_with_depth(input: &str, max_depth: usize) -> Result<RlpValue, DecodeError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let bytes = hex::decode(digits).map_err(|e| DecodeError::InvalidHex(e.to_string()))?;
    decode_with_depth(&bytes, max_depth)
}

/// Decode the item starting at `offset`. Returns the value and the offset
/// one past its last byte.
fn decode_item(
    input: &[u8],
    offset: usize,
    depth: usize,
    max_depth: usize,
) -> Result<(RlpValue, usize), DecodeError> {
    let header = read_header(input, offset)?;
    let start = offset + header.header_len;
    let end = start
        .checked_add(header.payload_len)
        .ok_or(DecodeError::Overflow)?;
    if end > input.len() {
        return Err(DecodeError::InputTooShort {
            offset,
            needed: end - offset,
            available: input.len() - offset,
        });
    }

    if !header.list {
        let payload = &input[start..end];
        if header.header_len == 1 && payload.len() == 1 && payload[0] < 0x80 {
            return Err(DecodeError::NonCanonicalSingleByte(payload[0]));
        }
        return Ok((RlpValue::Bytes(payload.to_vec()), end));
    }

    if depth + 1 > max_depth {
        return Err(DecodeError::DepthExceeded { max: max_depth });
    }
    let mut items = Vec::new();
    let mut cursor = start;
    while cursor < end {
        let (item, next) = decode_item(input, cursor, depth + 1, max_depth)?;
        if next > end {
            return Err(DecodeError::ListLengthMismatch {
                expected: header.payload_len,
            });
        }
        items.push(item);
        cursor = next;
    }
    Ok((RlpValue::List(items), end))
}

fn read_header(input: &[u8], offset: usize) -> Result<Header, DecodeError> {
    let Some(&first) = input.get(offset) else {
        return Err(DecodeError::InputTooShort {
            offset,
            needed: 1,
            available: 0,
        });
    };
    let header = match first {
        0x00..=0x7f => Header {
            list: false,
            header_len: 0,
            payload_len: 1,
        },
        0x80..=0xb7 => Header {
            list: false,
            header_len: 1,
            payload_len: usize::from(first - 0x80),
        },
        0xb8..=0xbf => long_header(input, offset, usize::from(first - 0xb7), false)?,
        0xc0..=0xf7 => Header {
            list: true,
            header_len: 1,
            payload_len: usize::from(first - 0xc0),
        },
        0xf8..=0xff => long_header(input, offset, usize::from(first - 0xf7), true)?,
    };
    Ok(header)
}

fn long_header(
    input: &[u8],
    offset: usize,
    len_of_len: usize,
    list: bool,
) -> Result<Header, DecodeError> {
    let start = offset + 1;
    let available = input.len().saturating_sub(start);
    if available < len_of_len {
        return Err(DecodeError::InputTooShort {
            offset,
            needed: 1 + len_of_len,
            available: input.len() - offset,
        });
    }
    let len_bytes = &input[start..start + len_of_len];
    if len_bytes[0] == 0 {
        return Err(DecodeError::LeadingZero);
    }
    if len_of_len > std::mem::size_of::<usize>() {
        return Err(DecodeError::Overflow);
    }
    let payload_len = len_bytes
        .iter()
        .fold(0usize, |acc, b| (acc << 8) | usize::from(*b));
    if payload_len <= SHORT_PAYLOAD_MAX {
        return Err(DecodeError::NonCanonicalSize(payload_len));
    }
    Ok(Header {
        list,
        header_len: 1 + len_of_len,
        payload_len,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::rlp::encode_value;
    use proptest::prelude::*;

    fn rlp_value() -> impl Strategy<Value = RlpValue> {
        let leaf = prop::collection::vec(any::<u8>(), 0..120).prop_map(RlpValue::Bytes);
        leaf.prop_recursive(5, 96, 10, |inner| {
            prop::collection::vec(inner, 0..10).prop_map(RlpValue::List)
        })
    }

    proptest! {
        /// Decoding inverts encoding.
        #[test]
        fn decode_inverts_encode(value in rlp_value()) {
            let encoded = encode_value(&value);
            prop_assert_eq!(decode(&encoded).unwrap(), value);
        }

        /// Decoding arbitrary bytes never panics, and anything accepted
        /// re-encodes to the same bytes.
        #[test]
        fn decode_arbitrary_is_canonical(data in prop::collection::vec(any::<u8>(), 0..256)) {
            if let Ok(value) = decode(&data) {
                prop_assert_eq!(encode_value(&value), data);
            }
        }
    }
}
