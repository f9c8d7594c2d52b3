//! Integration tests for the append protocol and chain invariants

use signetchain::config::GenesisConfig;
use signetchain::crypto::KeyPair;
use signetchain::encoding::Canonical;
use signetchain::error::ChainError;
use signetchain::ledger::{Ledger, GENESIS_PAYER};
use signetchain::transaction::Transaction;
use signetchain::wallet::Wallet;

/// Helper: a ledger whose genesis credits a fresh wallet.
fn fresh_ledger() -> (Ledger, Wallet) {
    let bootstrap = Wallet::new();
    let ledger = Ledger::new(&GenesisConfig::for_identity(bootstrap.public_identity()));
    (ledger, bootstrap)
}

#[test]
fn test_fresh_ledger_holds_exactly_the_genesis_block() {
    let (ledger, bootstrap) = fresh_ledger();

    assert_eq!(ledger.len(), 1);

    let genesis = ledger.get(0).unwrap();
    assert!(genesis.previous_hash().is_none());
    assert_eq!(genesis.transaction().amount(), 100);
    assert_eq!(genesis.transaction().payer(), GENESIS_PAYER);
    assert_eq!(genesis.transaction().payee(), bootstrap.public_identity());
}

#[test]
fn test_append_success_grows_the_chain_by_one() {
    let (mut ledger, _) = fresh_ledger();
    let alice = Wallet::new();
    let bob = Wallet::new();
    let before = ledger.len();

    alice
        .send_money(42, &bob.public_identity(), &mut ledger)
        .unwrap();

    assert_eq!(ledger.len(), before + 1);
    let tail = ledger.last_block();
    assert_eq!(tail.transaction().amount(), 42);
    assert_eq!(tail.transaction().payer(), alice.public_identity());
    assert_eq!(tail.transaction().payee(), bob.public_identity());
}

#[test]
fn test_forged_signature_leaves_ledger_untouched() {
    let (mut ledger, _) = fresh_ledger();
    let alice = KeyPair::generate();
    let mallory = KeyPair::generate();

    let tx = Transaction::new(42, alice.public_identity(), "cafe01");
    // Mallory signs a transaction that claims to come from Alice.
    let forged = mallory.sign(&tx.canonical_bytes()).unwrap();

    let blocks_before: Vec<_> = ledger.blocks().to_vec();
    let result = ledger.append(tx, &alice.public_identity(), &forged);

    assert!(matches!(result, Err(ChainError::InvalidSignature(_))));
    // Length and content are both unchanged.
    assert_eq!(ledger.blocks(), &blocks_before[..]);
}

#[test]
fn test_swapped_payer_and_payee_is_rejected() {
    let (mut ledger, _) = fresh_ledger();
    let alice = KeyPair::generate();
    let bob = KeyPair::generate();

    // Alice signs, but the transaction declares Bob as the payer.
    let swapped = Transaction::new(42, bob.public_identity(), alice.public_identity());
    let signature = alice.sign(&swapped.canonical_bytes()).unwrap();

    // Submitted under Alice's name: she is not the declared payer.
    let tx = swapped.clone();
    let result = ledger.append(tx, &alice.public_identity(), &signature);
    assert!(matches!(result, Err(ChainError::InvalidTransaction(_))));

    // Submitted under Bob's name: the signature is not his.
    let result = ledger.append(swapped, &bob.public_identity(), &signature);
    assert!(matches!(result, Err(ChainError::InvalidSignature(_))));

    assert_eq!(ledger.len(), 1);
}

#[test]
fn test_every_block_links_to_its_predecessor() {
    let (mut ledger, bootstrap) = fresh_ledger();
    let bob = Wallet::new();

    bootstrap
        .send_money(10, &bob.public_identity(), &mut ledger)
        .unwrap();
    bob.send_money(5, &bootstrap.public_identity(), &mut ledger)
        .unwrap();

    for i in 1..ledger.len() {
        let expected = ledger.get(i - 1).unwrap().hash();
        assert_eq!(ledger.get(i).unwrap().previous_hash(), Some(expected));
    }
    ledger.verify_links().unwrap();
}

#[test]
fn test_three_wallet_scenario() {
    let alice = Wallet::new();
    let bob = Wallet::new();
    let carol = Wallet::new();
    let mut ledger = Ledger::new(&GenesisConfig::for_identity(alice.public_identity()));

    alice
        .send_money(50, &bob.public_identity(), &mut ledger)
        .unwrap();
    carol
        .send_money(100, &alice.public_identity(), &mut ledger)
        .unwrap();
    bob.send_money(500, &alice.public_identity(), &mut ledger)
        .unwrap();

    assert_eq!(ledger.len(), 4);
    ledger.verify_links().unwrap();

    let third = ledger.get(2).unwrap().transaction();
    assert_eq!(third.amount(), 100);
    assert_eq!(third.payer(), carol.public_identity());
    assert_eq!(third.payee(), alice.public_identity());
}

#[test]
fn test_rejection_then_acceptance_keeps_links_intact() {
    let (mut ledger, _) = fresh_ledger();
    let alice = Wallet::new();
    let bob = Wallet::new();
    let mallory = KeyPair::generate();

    // A forged submission first, which must not disturb the chain.
    let tx = Transaction::new(9, alice.public_identity(), bob.public_identity());
    let forged = mallory.sign(&tx.canonical_bytes()).unwrap();
    assert!(ledger
        .append(tx, &alice.public_identity(), &forged)
        .is_err());

    // A legitimate send afterwards lands on the original genesis tail.
    let block = alice
        .send_money(9, &bob.public_identity(), &mut ledger)
        .unwrap();
    assert_eq!(
        block.previous_hash(),
        Some(ledger.get(0).unwrap().hash())
    );
    ledger.verify_links().unwrap();
}

#[test]
fn test_dump_renders_genesis_predecessor_as_none() {
    let (mut ledger, bootstrap) = fresh_ledger();
    let bob = Wallet::new();
    bootstrap
        .send_money(10, &bob.public_identity(), &mut ledger)
        .unwrap();

    let dump = ledger.to_string();
    assert!(dump.contains("block 0"));
    assert!(dump.contains("previous: none"));
    assert!(dump.contains("block 1"));
    assert!(dump.contains(&hex::encode(ledger.get(0).unwrap().hash())));
}
