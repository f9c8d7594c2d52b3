//! The append-only chain of blocks.
//!
//! A [`Ledger`] owns an ordered sequence of blocks starting from a fixed
//! genesis block. Its only mutator is [`Ledger::append`], which admits a
//! transaction iff its signature verifies against the transaction's declared
//! payer, then links a new block to the current tail via the tail's hash.

use crate::block::Block;
use crate::config::GenesisConfig;
use crate::crypto::{short_identity, verify_signature};
use crate::encoding::Canonical;
use crate::error::{ChainError, Result};
use crate::transaction::Transaction;
use log::{debug, info, warn};
use std::fmt;

/// Sentinel payer identity carried by the genesis transaction. It is not a
/// public key; the genesis block is installed at construction and never
/// signature-checked.
pub const GENESIS_PAYER: &str = "genesis";

/// Fixed genesis timestamp so a freshly constructed ledger is reproducible.
const GENESIS_TIMESTAMP_MILLIS: u64 = 1_672_531_200_000;

pub struct Ledger {
    blocks: Vec<Block>,
}

impl Ledger {
    /// Creates a ledger holding exactly the genesis block: the configured
    /// amount, payer [`GENESIS_PAYER`], payee the bootstrap identity, and no
    /// predecessor hash.
    pub fn new(config: &GenesisConfig) -> Self {
        let genesis_tx = Transaction::new(
            config.genesis_amount,
            GENESIS_PAYER,
            config.bootstrap_identity.clone(),
        );
        let genesis = Block::with_timestamp(None, genesis_tx, GENESIS_TIMESTAMP_MILLIS);
        info!(
            "Ledger initialized; genesis block {} credits {}",
            hex::encode(genesis.hash()),
            short_identity(&config.bootstrap_identity)
        );
        Ledger {
            blocks: vec![genesis],
        }
    }

    /// The tail block. Always defined: construction installs genesis and
    /// nothing ever removes blocks.
    pub fn last_block(&self) -> &Block {
        self.blocks.last().expect("ledger is never empty")
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        // Kept for API completeness; the sequence is never empty.
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// Verifies the signature and, on success, links `transaction` into the
    /// chain as a new tail block.
    ///
    /// The signature is checked against the transaction's declared *payer* —
    /// the identity whose secret key must have produced it. A
    /// `signer_identity` that differs from the payer is rejected before any
    /// cryptography runs.
    ///
    /// On rejection the ledger is left exactly as it was; rejection is the
    /// sole recoverable failure path. A malformed `signer_identity`
    /// propagates as [`ChainError::MalformedKey`].
    pub fn append(
        &mut self,
        transaction: Transaction,
        signer_identity: &str,
        signature: &[u8],
    ) -> Result<&Block> {
        if signer_identity != transaction.payer() {
            warn!(
                "Rejected transaction ({}): claimed signer {} is not the payer",
                transaction,
                short_identity(signer_identity)
            );
            return Err(ChainError::InvalidTransaction(format!(
                "claimed signer {} does not match the transaction payer {}",
                short_identity(signer_identity),
                short_identity(transaction.payer())
            )));
        }

        let message = transaction.canonical_bytes();
        if !verify_signature(transaction.payer(), &message, signature)? {
            warn!(
                "Rejected transaction ({}): signature does not verify against payer",
                transaction
            );
            return Err(ChainError::InvalidSignature(format!(
                "signature does not verify against payer {}",
                short_identity(transaction.payer())
            )));
        }

        let previous_hash = self.last_block().hash();
        let block = Block::new(Some(previous_hash), transaction);
        debug!(
            "Appending block {} on top of {}",
            hex::encode(block.hash()),
            hex::encode(previous_hash)
        );
        self.blocks.push(block);
        Ok(self.last_block())
    }

    /// Re-derives every link in the chain: genesis must carry no predecessor
    /// hash, and each later block's stored predecessor hash must equal the
    /// recomputed hash of the block before it.
    pub fn verify_links(&self) -> Result<()> {
        if self.blocks[0].previous_hash().is_some() {
            return Err(ChainError::InvalidBlockLinkage(
                "genesis block must not carry a predecessor hash".to_string(),
            ));
        }

        for i in 1..self.blocks.len() {
            let expected = self.blocks[i - 1].hash();
            match self.blocks[i].previous_hash() {
                Some(actual) if actual == expected => {}
                _ => {
                    return Err(ChainError::InvalidBlockLinkage(format!(
                        "block {} does not link to the hash of block {}",
                        i,
                        i - 1
                    )));
                }
            }
        }
        Ok(())
    }

    /// Machine-readable dump of the full chain, one JSON object per block,
    /// with hashes rendered as hex.
    pub fn dump_json(&self) -> String {
        let blocks: Vec<serde_json::Value> = self
            .blocks
            .iter()
            .map(|block| {
                serde_json::json!({
                    "previous_hash": block.previous_hash().map(hex::encode),
                    "transaction": {
                        "amount": block.transaction().amount(),
                        "payer": block.transaction().payer(),
                        "payee": block.transaction().payee(),
                    },
                    "timestamp_millis": block.timestamp_millis(),
                    "hash": hex::encode(block.hash()),
                })
            })
            .collect();
        serde_json::Value::Array(blocks).to_string()
    }
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            writeln!(f, "block {}", i)?;
            for line in block.to_string().lines() {
                writeln!(f, "  {}", line)?;
            }
        }
        Ok(())
    }
}
