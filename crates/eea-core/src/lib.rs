//! # eea-core — Foundational Types for the EEA Client Toolkit
//!
//! This crate is the leaf of the workspace. It defines the canonical byte
//! serialization used for hashing (Recursive Length Prefix, "RLP") and the
//! identifier newtypes shared by the privacy group deriver and the CLI.
//!
//! ## Key Design Principles
//!
//! 1. **One normalization step.** Callers hand the encoder an [`RlpInput`]
//!    (hex string, text, unsigned integer, boolean, raw bytes, or a list of
//!    those). [`RlpInput::normalize()`] turns it into an [`RlpValue`] up
//!    front, so the binary algorithm only ever sees `Bytes` and `List`.
//!
//! 2. **The binary algorithm cannot fail.** [`encode_value()`] takes a
//!    normalized [`RlpValue`] and returns bytes. All failure paths live in
//!    normalization.
//!
//! 3. **Strict decoding.** [`decode()`] accepts only canonical encodings,
//!    so `decode(encode(v)) == v` and every accepted input re-encodes to
//!    the same bytes.
//!
//! 4. **Validated identifiers.** [`ParticipantKey`] and [`PrivacyGroupId`]
//!    can only be built from well-formed 44-character base64 strings.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `eea-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod rlp;

// Re-export primary types for ergonomic imports.
pub use error::{DecodeError, RlpError, ValidationError};
pub use identity::{is_base64_id, ParticipantKey, PrivacyGroupId, BASE64_ID_LEN, KEY_LEN};
pub use rlp::{
    decode, decode_hex, decode_hex_with_depth, encode, encode_to_hex, encode_value,
    encoded_length, RlpInput, RlpValue, EMPTY_LIST_CODE, EMPTY_STRING_CODE,
};
