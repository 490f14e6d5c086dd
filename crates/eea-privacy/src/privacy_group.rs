//! # Privacy Group Id Resolution and Derivation
//!
//! ## Resolution order
//!
//! 1. `privacyGroupId` present: validate and return it unchanged.
//! 2. `privateFrom` and `privateFor` present:
//!    - `privateFor` is a string: it is the group id; validate and return it.
//!    - `privateFor` is a list: it must be non-empty, every element and
//!      `privateFrom` must be 44-character base64 keys; derive the id.
//! 3. Anything else is an `InvalidArgument`.
//!
//! ## Derivation
//!
//! ```text
//! privateFor ++ [privateFrom]   (a multiset: repeated keys are kept)
//!   → order by (sort_key, insertion index)
//!   → RLP list of raw 32-byte keys
//!   → Keccak-256
//!   → base64
//! ```
//!
//! The sort key reproduces a 32-bit string hash bit for bit: start at 1,
//! and for each byte `acc = 31 * acc + (byte as i8)` with wrapping signed
//! arithmetic. Deployed group ids depend on this exact ordering.

use eea_core::{encode_value, ParticipantKey, PrivacyGroupId, RlpValue, ValidationError};

use crate::hash::{Hash256, Keccak256};
use crate::options::{missing_participants, PrivacyGroupOptions, PrivateFor};

/// Resolve the privacy group id named or implied by `options`.
///
/// # Errors
///
/// Returns `InvalidArgument` naming the first field that fails validation.
pub fn resolve_privacy_group_id(
    options: &PrivacyGroupOptions,
) -> Result<PrivacyGroupId, ValidationError> {
    if let Some(id) = &options.privacy_group_id {
        tracing::debug!("using explicit privacy group id");
        return PrivacyGroupId::parse(id, "privacyGroupId");
    }

    let (Some(private_from), Some(private_for)) = (&options.private_from, &options.private_for)
    else {
        return Err(missing_participants());
    };

    let recipients = match private_for {
        PrivateFor::Group(id) => {
            tracing::debug!("privateFor names the privacy group id");
            return PrivacyGroupId::parse(id, "privateFor").map_err(|_| {
                ValidationError::invalid_argument(
                    "privateFor",
                    format!(
                        "when set to the privacy group id it must be a base64 encoded string of 44 characters, got {id:?}"
                    ),
                )
            });
        }
        PrivateFor::Participants(keys) => keys,
    };

    if recipients.is_empty() {
        return Err(ValidationError::invalid_argument(
            "privateFor",
            "empty array of base64 encoded strings",
        ));
    }
    let recipients = recipients
        .iter()
        .map(|key| ParticipantKey::from_base64(key, "privateFor"))
        .collect::<Result<Vec<_>, _>>()?;
    let sender = ParticipantKey::from_base64(private_from, "privateFrom")?;

    Ok(derive_privacy_group_id(&recipients, &sender))
}

/// Derive the Keccak-256 privacy group id for a sender and recipients.
pub fn derive_privacy_group_id(
    private_for: &[ParticipantKey],
    private_from: &ParticipantKey,
) -> PrivacyGroupId {
    derive_privacy_group_id_with::<Keccak256>(private_for, private_from)
}

/// Derive a privacy group id using the hash `H`.
pub fn derive_privacy_group_id_with<H: Hash256>(
    private_for: &[ParticipantKey],
    private_from: &ParticipantKey,
) -> PrivacyGroupId {
    let participants: Vec<ParticipantKey> = private_for
        .iter()
        .chain(std::iter::once(private_from))
        .copied()
        .collect();

    let ordered = order_participants(participants);
    let list = RlpValue::List(
        ordered
            .iter()
            .map(|key| RlpValue::Bytes(key.as_bytes().to_vec()))
            .collect(),
    );
    let encoded = encode_value(&list);
    let digest = H::hash256(&encoded);

    tracing::trace!(
        participants = ordered.len(),
        encoded_len = encoded.len(),
        "derived privacy group id"
    );
    PrivacyGroupId::from_digest(&digest)
}

/// Order participants by ascending [`sort_key`], breaking ties by
/// position in the input.
pub fn order_participants(participants: Vec<ParticipantKey>) -> Vec<ParticipantKey> {
    let mut keyed: Vec<(i32, usize, ParticipantKey)> = participants
        .into_iter()
        .enumerate()
        .map(|(index, key)| (sort_key(key.as_bytes()), index, key))
        .collect();
    keyed.sort_unstable_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));
    keyed.into_iter().map(|(_, _, key)| key).collect()
}

/// Legacy 32-bit string hash used to order participants.
///
/// Each byte is sign-extended from 8 bits before accumulation and all
/// arithmetic wraps modulo 2^32.
pub fn sort_key(bytes: &[u8]) -> i32 {
    bytes.iter().fold(1i32, |acc, &b| {
        acc.wrapping_mul(31).wrapping_add(i32::from(b as i8))
    })
}
