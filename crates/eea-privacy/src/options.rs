//! # Privacy Group Options
//!
//! The caller-facing description of who a private transaction is for.
//! Either an explicit `privacyGroupId`, or a `privateFrom` sender key plus
//! `privateFor`, which is a list of recipient keys or a single group id.
//!
//! Options arrive as JSON from RPC-shaped callers, so [`PrivacyGroupOptions::from_json`]
//! performs the structural checks (object-ness, string-typed fields) that
//! a dynamically typed caller cannot guarantee.

use eea_core::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Recipients of a private transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrivateFor {
    /// A single string is itself the privacy group id.
    Group(String),
    /// Recipient public keys, base64 encoded.
    Participants(Vec<String>),
}

/// Options identifying a privacy group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacyGroupOptions {
    /// Sender public key, base64 encoded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_from: Option<String>,
    /// Recipient keys, or the group id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_for: Option<PrivateFor>,
    /// Explicit group id. Takes precedence over the other fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy_group_id: Option<String>,
}

impl PrivacyGroupOptions {
    /// Options naming an explicit group.
    pub fn with_group_id(id: impl Into<String>) -> Self {
        Self {
            privacy_group_id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Options deriving a group from a sender and recipients.
    pub fn with_participants<I, S>(private_from: impl Into<String>, private_for: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            private_from: Some(private_from.into()),
            private_for: Some(PrivateFor::Participants(
                private_for.into_iter().map(Into::into).collect(),
            )),
            privacy_group_id: None,
        }
    }

    /// Parse options from an untyped JSON value.
    ///
    /// A present `privacyGroupId` short-circuits: the other fields are not
    /// consulted and are left unset.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `value` is not an object, if it lacks
    /// `privacyGroupId` and either of `privateFrom` or `privateFor`, or if a
    /// field has the wrong JSON type. A missing field is reported before
    /// any type error.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let Value::Object(map) = value else {
            return Err(ValidationError::invalid_argument(
                "privacyGroupOptions",
                format!("must be an object, got {value}"),
            ));
        };

        if let Some(id) = map.get("privacyGroupId") {
            let Value::String(id) = id else {
                return Err(ValidationError::invalid_argument(
                    "privacyGroupId",
                    format!("must be a base64 encoded string of 44 characters, got {id}"),
                ));
            };
            return Ok(Self::with_group_id(id.clone()));
        }

        if !(map.contains_key("privateFrom") && map.contains_key("privateFor")) {
            return Err(missing_participants());
        }

        let private_for = match map.get("privateFor") {
            None => None,
            Some(Value::String(s)) => Some(PrivateFor::Group(s.clone())),
            Some(Value::Array(items)) => {
                let keys = items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => Ok(s.clone()),
                        other => Err(ValidationError::invalid_argument(
                            "privateFor",
                            format!("array elements must be base64 encoded strings, got {other}"),
                        )),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Some(PrivateFor::Participants(keys))
            }
            Some(other) => {
                return Err(ValidationError::invalid_argument(
                    "privateFor",
                    format!(
                        "must be an array of base64 encoded strings or the base64 encoded privacy group id, got {other}"
                    ),
                ))
            }
        };

        let private_from = match map.get("privateFrom") {
            None => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(ValidationError::invalid_argument(
                    "privateFrom",
                    format!("must be a base64 encoded string of 44 characters, got {other}"),
                ))
            }
        };

        Ok(Self {
            private_from,
            private_for,
            privacy_group_id: None,
        })
    }
}

/// Neither an explicit group id nor both participant fields were given.
pub(crate) fn missing_participants() -> ValidationError {
    ValidationError::invalid_argument(
        "privacyGroupOptions",
        "either privacyGroupId or both privateFrom and privateFor must be set",
    )
}
