//! Wallet operations: a key pair plus the convenience send path.

use crate::block::Block;
use crate::crypto::{Identity, KeyPair};
use crate::encoding::Canonical;
use crate::error::Result;
use crate::ledger::Ledger;
use crate::transaction::Transaction;

/// A participant's key pair. The secret key never leaves this struct; the
/// public identity is the address that appears in transactions.
pub struct Wallet {
    keypair: KeyPair,
}

impl Wallet {
    pub fn new() -> Self {
        Wallet {
            keypair: KeyPair::generate(),
        }
    }

    /// Rebuilds a wallet from raw secret key bytes.
    pub fn from_secret_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Wallet {
            keypair: KeyPair::from_secret_bytes(bytes)?,
        })
    }

    pub fn public_identity(&self) -> Identity {
        self.keypair.public_identity()
    }

    /// Constructs a transfer of `amount` to `payee_identity`, signs its
    /// canonical encoding with this wallet's secret key, and submits it.
    ///
    /// The ledger is mutated iff verification succeeds; on rejection the
    /// error is returned and the chain is unchanged.
    pub fn send_money<'a>(
        &self,
        amount: u64,
        payee_identity: &str,
        ledger: &'a mut Ledger,
    ) -> Result<&'a Block> {
        let identity = self.public_identity();
        let transaction = Transaction::new(amount, identity.clone(), payee_identity);
        let signature = self.keypair.sign(&transaction.canonical_bytes())?;
        ledger.append(transaction, &identity, &signature)
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new()
    }
}
