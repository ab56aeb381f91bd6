//! Entropy checksum
//!
//! The checksum of 256 bits of entropy is the first byte of its SHA-256
//! digest.

use crate::codec::ENTROPY_LEN;
use sha2::{Digest, Sha256};

/// Checksum byte for 32 bytes of entropy
///
/// Only the entropy is hashed; callers holding the 33-byte
/// entropy-and-checksum buffer pass its first 32 bytes.
#[must_use]
#[inline]
pub fn checksum(entropy: &[u8; ENTROPY_LEN]) -> u8 {
    Sha256::digest(entropy)[0]
}
