//! # eea-privacy — Privacy Group Identifiers
//!
//! Resolves the privacy group a private transaction is addressed to:
//!
//! - **Explicit ids** supplied by the caller are validated and returned
//!   unchanged.
//! - **Derived ids** are computed from the sender and recipient keys:
//!   participants are ordered by a legacy 32-bit string hash, RLP-encoded
//!   as a list of raw 32-byte keys, hashed with Keccak-256, and rendered as
//!   base64.
//!
//! The hash primitive sits behind the [`Hash256`] trait; [`Keccak256`] is
//! the implementation every deployed network uses.
//!
//! ## Crate Policy
//!
//! - Depends only on `eea-core` internally.
//! - Pure functions: no I/O, no shared state, safe to call from any thread.
//! - The participant sort key is a compatibility requirement and must not
//!   be replaced.

pub mod hash;
pub mod options;
pub mod privacy_group;

pub use hash::{keccak256, Hash256, Keccak256};
pub use options::{PrivacyGroupOptions, PrivateFor};
pub use privacy_group::{
    derive_privacy_group_id, derive_privacy_group_id_with, order_participants,
    resolve_privacy_group_id, sort_key,
};
