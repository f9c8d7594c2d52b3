//! Configuration management for signetchain

use crate::error::{ChainError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Parameters for the fixed first block of a ledger.
#[derive(Debug, Clone, Deserialize)]
pub struct GenesisConfig {
    /// Identity credited by the genesis transaction.
    pub bootstrap_identity: String,
    #[serde(default = "default_genesis_amount")]
    pub genesis_amount: u64,
}

fn default_genesis_amount() -> u64 {
    100
}

impl GenesisConfig {
    /// Genesis with the default amount, crediting `bootstrap_identity`.
    pub fn for_identity(bootstrap_identity: impl Into<String>) -> Self {
        GenesisConfig {
            bootstrap_identity: bootstrap_identity.into(),
            genesis_amount: default_genesis_amount(),
        }
    }

    /// Loads the genesis parameters from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| ChainError::ConfigError(e.to_string()))
    }
}
