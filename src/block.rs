//! Block structure and content hashing.

use crate::encoding::{content_hash, put_bytes, Canonical, Sha256Hash};
use crate::transaction::Transaction;
use std::fmt;

/// An immutable record pairing one transaction with the hash of its
/// predecessor and a wall-clock creation timestamp.
///
/// `previous_hash` is absent only for the genesis block. Timestamps are
/// captured from the wall clock and carry no monotonicity guarantee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    previous_hash: Option<Sha256Hash>,
    transaction: Transaction,
    timestamp_millis: u64,
}

impl Block {
    /// Builds a block stamped with the current wall-clock time.
    pub fn new(previous_hash: Option<Sha256Hash>, transaction: Transaction) -> Self {
        let timestamp_millis = chrono::Utc::now().timestamp_millis() as u64;
        Self::with_timestamp(previous_hash, transaction, timestamp_millis)
    }

    /// Builds a block with an explicit timestamp (genesis, tests).
    pub fn with_timestamp(
        previous_hash: Option<Sha256Hash>,
        transaction: Transaction,
        timestamp_millis: u64,
    ) -> Self {
        Block {
            previous_hash,
            transaction,
            timestamp_millis,
        }
    }

    pub fn previous_hash(&self) -> Option<Sha256Hash> {
        self.previous_hash
    }

    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    pub fn timestamp_millis(&self) -> u64 {
        self.timestamp_millis
    }

    /// Content hash over this block's own canonical encoding.
    ///
    /// Computed on demand rather than cached; blocks never mutate, so
    /// repeated calls always agree.
    pub fn hash(&self) -> Sha256Hash {
        content_hash(self)
    }
}

impl Canonical for Block {
    fn canonical_bytes(&self) -> Vec<u8> {
        let mut message = Vec::new();
        message.extend_from_slice("BLOCK:".as_bytes());
        match &self.previous_hash {
            Some(hash) => {
                message.push(1);
                message.extend_from_slice(hash);
            }
            None => message.push(0),
        }
        put_bytes(&mut message, &self.transaction.canonical_bytes());
        message.extend_from_slice(&self.timestamp_millis.to_le_bytes());
        message
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.previous_hash {
            Some(hash) => writeln!(f, "previous: {}", hex::encode(hash))?,
            None => writeln!(f, "previous: none")?,
        }
        writeln!(f, "transaction: {}", self.transaction)?;
        writeln!(f, "timestamp: {} ms", self.timestamp_millis)?;
        write!(f, "hash: {}", hex::encode(self.hash()))
    }
}
