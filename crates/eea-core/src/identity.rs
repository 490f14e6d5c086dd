//! # Participant and Privacy Group Identifiers
//!
//! Newtypes for the two base64 identifiers used by private transactions.
//! Both are 44-character, padded, standard-alphabet base64 strings; a
//! participant key additionally decodes to exactly 32 bytes.
//!
//! Trailing bits in the last base64 quantum are not checked, so any
//! string a lenient base64 decoder accepts is accepted here too.

use std::sync::OnceLock;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Length of a base64-encoded 32-byte identifier, including padding.
pub const BASE64_ID_LEN: usize = 44;

/// Raw length of a participant public key.
pub const KEY_LEN: usize = 32;

fn engine() -> &'static GeneralPurpose {
    static ENGINE: OnceLock<GeneralPurpose> = OnceLock::new();
    ENGINE.get_or_init(|| {
        GeneralPurpose::new(
            &alphabet::STANDARD,
            GeneralPurposeConfig::new()
                .with_decode_allow_trailing_bits(true)
                .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
        )
    })
}

fn is_base64_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'+' || c == b'/'
}

/// Whether `s` is a 44-character padded base64 string.
///
/// The body must use the standard alphabet; the final quantum may end in
/// `=` or `==`.
pub fn is_base64_id(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != BASE64_ID_LEN {
        return false;
    }
    let (body, last) = bytes.split_at(BASE64_ID_LEN - 4);
    if !body.iter().copied().all(is_base64_char) {
        return false;
    }
    match last {
        [a, b, b'=', b'='] => is_base64_char(*a) && is_base64_char(*b),
        [a, b, c, b'='] => is_base64_char(*a) && is_base64_char(*b) && is_base64_char(*c),
        [a, b, c, d] => [a, b, c, d].iter().all(|x| is_base64_char(**x)),
        _ => false,
    }
}

/// A participant's 32-byte public key.
///
/// Serializes as its base64 form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticipantKey([u8; KEY_LEN]);

impl ParticipantKey {
    /// Wrap raw key bytes.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a 44-character base64 key.
    ///
    /// `field` names the argument in the returned error.
    pub fn from_base64(value: &str, field: &'static str) -> Result<Self, ValidationError> {
        if !is_base64_id(value) {
            return Err(ValidationError::invalid_argument(
                field,
                format!("must be a base64 encoded string of {BASE64_ID_LEN} characters, got {value:?}"),
            ));
        }
        let decoded = engine().decode(value).map_err(|e| {
            ValidationError::invalid_argument(field, format!("base64 decode failed for {value:?}: {e}"))
        })?;
        let bytes: [u8; KEY_LEN] = decoded.as_slice().try_into().map_err(|_| {
            ValidationError::invalid_argument(
                field,
                format!("must decode to {KEY_LEN} bytes, got {} for {value:?}", decoded.len()),
            )
        })?;
        Ok(Self(bytes))
    }

    /// The raw 32 key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Standard padded base64 rendering.
    pub fn to_base64(&self) -> String {
        engine().encode(self.0)
    }
}

impl std::fmt::Debug for ParticipantKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParticipantKey({})", self.to_base64())
    }
}

impl std::fmt::Display for ParticipantKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl Serialize for ParticipantKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for ParticipantKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_base64(&s, "participantKey").map_err(serde::de::Error::custom)
    }
}

/// An opaque privacy group identifier: 44 base64 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PrivacyGroupId(String);

impl PrivacyGroupId {
    /// Validate a caller-supplied group id.
    pub fn parse(value: &str, field: &'static str) -> Result<Self, ValidationError> {
        if is_base64_id(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(ValidationError::invalid_argument(
                field,
                format!("must be a base64 encoded string of {BASE64_ID_LEN} characters, got {value:?}"),
            ))
        }
    }

    /// Encode a 32-byte digest as a group id.
    pub fn from_digest(digest: &[u8; 32]) -> Self {
        Self(engine().encode(digest))
    }

    /// The base64 string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the base64 string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for PrivacyGroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PrivacyGroupId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for PrivacyGroupId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s, "privacyGroupId").map_err(serde::de::Error::custom)
    }
}
