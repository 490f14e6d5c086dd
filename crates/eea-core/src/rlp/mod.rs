//! # RLP — Recursive Length Prefix Serialization
//!
//! Canonical byte serialization for byte strings and nested lists, as used
//! by Ethereum clients for hashing and wire encoding.
//!
//! ## Pipeline
//!
//! ```text
//! RlpInput ──normalize()──▶ RlpValue ──encode_value()──▶ Vec<u8> ──▶ "0x…"
//!                               ▲                            │
//!                               └────────── decode() ◀───────┘
//! ```
//!
//! Normalization is the only fallible step on the encoding side. The
//! binary algorithm (`encode_value`) is total over `RlpValue`.
//!
//! ## Encoding rules
//!
//! | Value                               | Encoding                                 |
//! |-------------------------------------|------------------------------------------|
//! | one byte in `0x00..=0x7f`           | the byte itself                          |
//! | string of 0–55 bytes                | `0x80 + len`, bytes                      |
//! | string of more than 55 bytes        | `0xb7 + len(len)`, big-endian len, bytes |
//! | list with 0–55 byte payload         | `0xc0 + len`, payload                    |
//! | list with more than 55 byte payload | `0xf7 + len(len)`, big-endian len, payload |

mod decode;
mod encode;
mod input;
mod value;

pub use decode::{decode, decode_hex, decode_hex_with_depth, decode_with_depth, DEFAULT_MAX_DEPTH};
pub use encode::{
    encode, encode_to_hex, encode_value, encoded_length, length_of_length, EMPTY_LIST_CODE,
    EMPTY_STRING_CODE,
};
pub use input::RlpInput;
pub use value::RlpValue;

/// Longest payload that fits a single-byte header.
pub(crate) const SHORT_PAYLOAD_MAX: usize = 55;

/// Minimal big-endian representation of `n`, with no leading zero bytes.
///
/// Returns an empty vector for zero.
pub(crate) fn to_be_bytes_minimal(n: u128) -> Vec<u8> {
    let bytes = n.to_be_bytes();
    let skip = bytes.iter().take_while(|b| **b == 0).count();
    bytes[skip..].to_vec()
}
