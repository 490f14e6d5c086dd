//! RLP encoder.

use super::{to_be_bytes_minimal, RlpInput, RlpValue, SHORT_PAYLOAD_MAX};
use crate::error::RlpError;

/// RLP prefix byte for a 0-length string.
pub const EMPTY_STRING_CODE: u8 = 0x80;

/// RLP prefix byte for a 0-length list.
pub const EMPTY_LIST_CODE: u8 = 0xc0;

/// Encode any accepted input form as a `0x`-prefixed lowercase hex string.
///
/// # Errors
///
/// Fails only during normalization; see [`RlpInput::normalize()`].
pub fn encode(input: &RlpInput) -> Result<String, RlpError> {
    let value = input.normalize()?;
    Ok(encode_to_hex(&value))
}

/// Encode a normalized value as a `0x`-prefixed lowercase hex string.
pub fn encode_to_hex(value: &RlpValue) -> String {
    format!("0x{}", hex::encode(encode_value(value)))
}

/// Encode a normalized value to its canonical bytes.
///
/// The tree is walked twice: once to measure every list payload, once to
/// write. Each node is visited once per walk regardless of depth.
pub fn encode_value(value: &RlpValue) -> Vec<u8> {
    let mut payloads = Vec::new();
    let total = measure(value, &mut payloads);
    let mut out = Vec::with_capacity(total);
    write_value(value, &mut payloads.into_iter(), &mut out);
    out
}

/// Number of bytes `encode_value(value)` produces, computed without
/// allocating.
pub fn encoded_length(value: &RlpValue) -> usize {
    match value {
        RlpValue::Bytes(b) => bytes_length(b),
        RlpValue::List(items) => {
            let payload: usize = items.iter().map(encoded_length).sum();
            length_of_length(payload) + payload
        }
    }
}

/// Size of the header for a payload of `payload_len` bytes.
///
/// One byte for payloads up to 55 bytes, otherwise one byte plus the
/// minimal big-endian width of the length.
pub fn length_of_length(payload_len: usize) -> usize {
    if payload_len <= SHORT_PAYLOAD_MAX {
        1
    } else {
        1 + minimal_len_bytes(payload_len).len()
    }
}

fn bytes_length(b: &[u8]) -> usize {
    if is_single_byte(b) {
        1
    } else {
        length_of_length(b.len()) + b.len()
    }
}

/// Encoded length of `value`. Records each list's payload length in
/// pre-order, the order [`write_value`] consumes them.
fn measure(value: &RlpValue, payloads: &mut Vec<usize>) -> usize {
    match value {
        RlpValue::Bytes(b) => bytes_length(b),
        RlpValue::List(items) => {
            let slot = payloads.len();
            payloads.push(0);
            let payload: usize = items.iter().map(|item| measure(item, payloads)).sum();
            payloads[slot] = payload;
            length_of_length(payload) + payload
        }
    }
}

fn is_single_byte(b: &[u8]) -> bool {
    b.len() == 1 && b[0] < EMPTY_STRING_CODE
}

fn minimal_len_bytes(len: usize) -> Vec<u8> {
    // usize is at most 64 bits on every supported target.
    to_be_bytes_minimal(len as u128)
}

fn write_header(payload_len: usize, offset: u8, out: &mut Vec<u8>) {
    if payload_len <= SHORT_PAYLOAD_MAX {
        out.push(offset + payload_len as u8);
    } else {
        let len_bytes = minimal_len_bytes(payload_len);
        out.push(offset + SHORT_PAYLOAD_MAX as u8 + len_bytes.len() as u8);
        out.extend_from_slice(&len_bytes);
    }
}

fn write_value<I>(value: &RlpValue, payloads: &mut I, out: &mut Vec<u8>)
where
    I: Iterator<Item = usize>,
{
    match value {
        RlpValue::Bytes(b) if is_single_byte(b) => out.push(b[0]),
        RlpValue::Bytes(b) => {
            write_header(b.len(), EMPTY_STRING_CODE, out);
            out.extend_from_slice(b);
        }
        RlpValue::List(items) => {
            // measure() recorded exactly one entry per list.
            let payload = payloads.next().unwrap_or_default();
            write_header(payload, EMPTY_LIST_CODE, out);
            for item in items {
                write_value(item, payloads, out);
            }
        }
    }
}
