#![forbid(unsafe_code)]
//! Replay of the classic three-wallet scenario against a fresh ledger.

use colored::*;
use signetchain::config::GenesisConfig;
use signetchain::ledger::Ledger;
use signetchain::wallet::Wallet;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let alice = Wallet::new();
    let bob = Wallet::new();
    let carol = Wallet::new();

    // Genesis credits Alice with the bootstrap amount.
    let mut ledger = Ledger::new(&GenesisConfig::for_identity(alice.public_identity()));

    alice.send_money(50, &bob.public_identity(), &mut ledger)?;
    carol.send_money(100, &alice.public_identity(), &mut ledger)?;
    bob.send_money(500, &alice.public_identity(), &mut ledger)?;

    println!("{}", "signetchain ledger".bright_cyan().bold());
    println!();
    println!("{ledger}");
    ledger.verify_links()?;
    println!(
        "{}",
        format!("{} blocks, all links verified", ledger.len()).green()
    );

    Ok(())
}
