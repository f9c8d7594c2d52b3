//! Value-transfer records.

use crate::crypto::short_identity;
use crate::encoding::{put_str, Canonical};
use std::fmt;

/// An immutable value-transfer record: `amount` moves from `payer` to
/// `payee`.
///
/// Both identity fields hold the hex form of a public key, except for the
/// genesis transaction whose payer is the sentinel
/// [`GENESIS_PAYER`](crate::ledger::GENESIS_PAYER). A transaction is created
/// by a wallet (or the genesis routine) and consumed exactly once by a
/// successful append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    amount: u64,
    payer: String,
    payee: String,
}

impl Transaction {
    pub fn new(amount: u64, payer: impl Into<String>, payee: impl Into<String>) -> Self {
        Transaction {
            amount,
            payer: payer.into(),
            payee: payee.into(),
        }
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    /// The originator's identity: the one whose secret key must have
    /// produced the signature submitted alongside this transaction.
    pub fn payer(&self) -> &str {
        &self.payer
    }

    pub fn payee(&self) -> &str {
        &self.payee
    }
}

impl Canonical for Transaction {
    fn canonical_bytes(&self) -> Vec<u8> {
        let mut message = Vec::new();
        message.extend_from_slice("TX:".as_bytes());
        message.extend_from_slice(&self.amount.to_le_bytes());
        put_str(&mut message, &self.payer);
        put_str(&mut message, &self.payee);
        message
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} from {} to {}",
            self.amount,
            short_identity(&self.payer),
            short_identity(&self.payee)
        )
    }
}
