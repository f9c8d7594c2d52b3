//! Cryptographic primitives for signetchain
//!
//! Participants are identified by the lowercase hex encoding of their
//! compressed secp256k1 public key. That string is what appears in the
//! `payer`/`payee` fields of a transaction, and it is the claim a signature
//! is verified against.

use crate::error::{ChainError, Result};
use once_cell::sync::Lazy;
use rand::rngs::OsRng;
use secp256k1::{
    constants::{COMPACT_SIGNATURE_SIZE, PUBLIC_KEY_SIZE, SECRET_KEY_SIZE},
    ecdsa::Signature,
    All, Message, PublicKey, Secp256k1, SecretKey,
};
use sha2::{Digest, Sha256};

/// A thread-safe, lazily initialized Secp256k1 context.
/// This prevents repeated, unnecessary context creation.
static SECP256K1_CONTEXT: Lazy<Secp256k1<All>> = Lazy::new(Secp256k1::new);

/// An identity is the hex form of a compressed public key.
pub type Identity = String;

/// Shortened rendering of an identity for log lines and dumps.
pub fn short_identity(identity: &str) -> String {
    if identity.len() > 20 {
        format!(
            "{}..{}",
            &identity[..10],
            &identity[identity.len() - 6..]
        )
    } else {
        identity.to_string()
    }
}

#[derive(Debug, Clone)]
pub struct KeyPair {
    pub secret_key: SecretKey,
    pub public_key: PublicKey,
}

impl KeyPair {
    /// Generates a new random KeyPair using the OS random number generator.
    pub fn generate() -> Self {
        let secret_key = SecretKey::new(&mut OsRng);
        // Using the context from the static Lazy
        let public_key = PublicKey::from_secret_key(&SECP256K1_CONTEXT, &secret_key);

        KeyPair {
            secret_key,
            public_key,
        }
    }

    /// Creates a KeyPair from an existing SecretKey.
    pub fn from_secret_key(secret_key: SecretKey) -> Self {
        let public_key = PublicKey::from_secret_key(&SECP256K1_CONTEXT, &secret_key);
        KeyPair {
            secret_key,
            public_key,
        }
    }

    /// Creates a KeyPair from raw secret key bytes.
    pub fn from_secret_bytes(bytes: &[u8]) -> Result<Self> {
        let secret_key = SecretKey::from_slice(bytes).map_err(|e| {
            if bytes.len() != SECRET_KEY_SIZE {
                ChainError::MalformedKey(format!(
                    "Secret key must be {} bytes, got {}",
                    SECRET_KEY_SIZE,
                    bytes.len()
                ))
            } else {
                ChainError::MalformedKey(format!("Invalid secret key bytes: {}", e))
            }
        })?;

        Ok(Self::from_secret_key(secret_key))
    }

    /// The public identity of this key pair: the hex encoding of the
    /// compressed public key. Safe to share; used as the participant's
    /// address in transactions.
    pub fn public_identity(&self) -> Identity {
        hex::encode(self.public_key.serialize())
    }

    /// Signs a message (which is first hashed using SHA-256) and returns the
    /// compact signature bytes.
    pub fn sign(&self, message: &[u8]) -> Result<[u8; COMPACT_SIGNATURE_SIZE]> {
        let digest = Sha256::digest(message);

        let message = Message::from_digest_slice(&digest)
            .map_err(|e| ChainError::MalformedKey(format!("Failed to create message: {}", e)))?;

        // Using the context from the static Lazy
        let signature = SECP256K1_CONTEXT.sign_ecdsa(&message, &self.secret_key);

        Ok(signature.serialize_compact())
    }
}

/// Decodes an identity string back into a public key.
///
/// Fails with [`ChainError::MalformedKey`] when the string is not the hex
/// form of a well-formed compressed public key.
pub fn decode_identity(identity: &str) -> Result<PublicKey> {
    let bytes = hex::decode(identity)
        .map_err(|e| ChainError::MalformedKey(format!("Identity is not valid hex: {}", e)))?;

    if bytes.len() != PUBLIC_KEY_SIZE {
        return Err(ChainError::MalformedKey(format!(
            "Public key must be exactly {} bytes (compressed), got {}",
            PUBLIC_KEY_SIZE,
            bytes.len()
        )));
    }

    PublicKey::from_slice(&bytes)
        .map_err(|e| ChainError::MalformedKey(format!("Invalid public key: {}", e)))
}

/// Verifies an ECDSA signature against the identity that claims authorship.
///
/// Returns `Ok(true)` iff `signature` was produced by the secret key behind
/// `identity` over exactly `message`. A mismatched or undecodable signature
/// yields `Ok(false)`, never an error; only a malformed `identity` is a hard
/// failure.
pub fn verify_signature(identity: &str, message: &[u8], signature_bytes: &[u8]) -> Result<bool> {
    let public_key = decode_identity(identity)?;

    let signature = match Signature::from_compact(signature_bytes) {
        Ok(sig) => sig,
        // Not a structurally valid signature, so it was not produced by any
        // key over this message.
        Err(_) => return Ok(false),
    };

    let digest = Sha256::digest(message);
    let message = Message::from_digest_slice(&digest)
        .map_err(|e| ChainError::MalformedKey(format!("Failed to create message: {}", e)))?;

    // Using the context from the static Lazy
    Ok(SECP256K1_CONTEXT
        .verify_ecdsa(&message, &signature, &public_key)
        .is_ok())
}
