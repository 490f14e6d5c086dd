//! # 256-bit Hash Primitive
//!
//! The deriver treats its hash as a black box `bytes -> [u8; 32]`.
//! [`Keccak256`] (original Keccak padding, not NIST SHA3-256) is the only
//! implementation existing privacy groups were created with.

use sha3::{Digest, Keccak256 as Keccak256Hasher};

/// A hash function producing 32-byte digests.
pub trait Hash256 {
    /// Hash `data` into a 32-byte digest.
    fn hash256(data: &[u8]) -> [u8; 32];
}

/// Keccak-256 as used by Ethereum.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256;

impl Hash256 for Keccak256 {
    fn hash256(data: &[u8]) -> [u8; 32] {
        let hash = Keccak256Hasher::digest(data);
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&hash);
        bytes
    }
}

/// Compute the Keccak-256 digest of `data`.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::hash256(data)
}
