//! Shared fixtures for the ledger integration tests.

use token_ledger::token_ledger::{TokenInitializationParameters, TokenLedger};
use token_types::types::primitives::{AccountAddress, TokenAmount};

/// The account deploying the ledger in tests.
pub const DEPLOYER: AccountAddress = AccountAddress([1u8; 32]);

/// A test account derived from a single tag byte. `account(0)` is the null
/// address.
pub fn account(tag: u8) -> AccountAddress {
    AccountAddress([tag; 32])
}

/// Initialization parameters matching the canonical deployment.
pub fn parity_params(initial_supply: u128) -> TokenInitializationParameters {
    TokenInitializationParameters {
        name: "Parity Token".to_owned(),
        symbol: "PRTY".to_owned(),
        decimals: 18,
        initial_supply: TokenAmount(initial_supply),
    }
}

/// A freshly initialized ledger with the event log drained, so tests only
/// see the events of the operations they perform themselves.
pub fn parity_ledger(initial_supply: u128) -> TokenLedger {
    let mut ledger =
        TokenLedger::initialize(parity_params(initial_supply), DEPLOYER).expect("initialize");
    ledger.take_events();
    ledger
}

/// Assert that the balances sum to the total supply.
pub fn assert_conservation(ledger: &TokenLedger) {
    let sum: u128 = ledger.holders().map(|(_, amount)| amount.0).sum();
    assert_eq!(
        sum,
        ledger.total_supply().0,
        "balances must sum to the total supply"
    );
}
