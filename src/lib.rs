//! signetchain - a minimal signature-gated append-only ledger
//!
//! # Architecture
//!
//! The crate is organized into logical modules:
//!
//! ## Core Ledger
//! - [`ledger`] - The append-only chain and its append protocol
//! - [`block`] - Block structure and content hashing
//! - [`transaction`] - Value-transfer records
//!
//! ## Cryptography
//! - [`crypto`] - Key pairs, signatures, and identity encoding (secp256k1)
//! - [`encoding`] - Canonical byte encoding shared by hashing and signing
//!
//! ## Participants
//! - [`wallet`] - Wallet operations and the send path
//!
//! ## Configuration & Utilities
//! - [`config`] - Genesis configuration
//! - [`error`] - Error types

#![forbid(unsafe_code)]

// ============================================================================
// Core Ledger
// ============================================================================
pub mod block;
pub mod ledger;
pub mod transaction;

// ============================================================================
// Cryptography
// ============================================================================
pub mod crypto;
pub mod encoding;

// ============================================================================
// Participants
// ============================================================================
pub mod wallet;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod config;
pub mod error;
