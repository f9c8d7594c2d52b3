//! Canonical byte encoding shared by hashing and signing.
//!
//! The load-bearing contract: the bytes a signature covers are exactly the
//! bytes that determine a value's identity, and a block's content hash
//! covers exactly the bytes that determine the block's identity. Both sides
//! therefore read from the same [`Canonical`] encoding.

use sha2::{Digest, Sha256};

pub type Sha256Hash = [u8; 32];

/// Deterministic byte encoding of a structured value.
///
/// Two structurally equal values always encode identically, and any field
/// change changes the encoding. Field order is fixed, integers are
/// little-endian, and variable-length strings are length-prefixed so the
/// encoding stays injective.
pub trait Canonical {
    fn canonical_bytes(&self) -> Vec<u8>;
}

/// SHA-256 digest over a value's canonical encoding.
pub fn content_hash<T: Canonical>(value: &T) -> Sha256Hash {
    let mut hasher = Sha256::new();
    hasher.update(value.canonical_bytes());
    hasher.finalize().into()
}

/// Appends a length-prefixed string field to `buf`.
pub(crate) fn put_str(buf: &mut Vec<u8>, s: &str) {
    buf.extend_from_slice(&(s.len() as u64).to_le_bytes());
    buf.extend_from_slice(s.as_bytes());
}

/// Appends a length-prefixed byte field to `buf`.
pub(crate) fn put_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    buf.extend_from_slice(&(bytes.len() as u64).to_le_bytes());
    buf.extend_from_slice(bytes);
}
