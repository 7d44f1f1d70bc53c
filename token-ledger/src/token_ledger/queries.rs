//! Read-only queries on the ledger. None of these can fail and none has
//! side effects.

use crate::token_ledger::TokenLedger;
use token_types::types::events::TokenEvent;
use token_types::types::primitives::{AccountAddress, TokenAmount};
use token_types::types::tokens::TokenMetadata;

impl TokenLedger {
    /// Get the token balance of the account. Accounts without an entry
    /// hold a balance of zero.
    pub fn balance_of(&self, account: &AccountAddress) -> TokenAmount {
        self.balances.get(account).copied().unwrap_or_default()
    }

    /// Get the amount `spender` may currently transfer out of `owner`'s
    /// balance.
    pub fn allowance(&self, owner: &AccountAddress, spender: &AccountAddress) -> TokenAmount {
        self.allowances
            .get(owner)
            .and_then(|spenders| spenders.get(spender))
            .copied()
            .unwrap_or_default()
    }

    /// The current total supply.
    pub fn total_supply(&self) -> TokenAmount {
        self.total_supply
    }

    /// The presentation metadata fixed at initialization.
    pub fn metadata(&self) -> &TokenMetadata {
        &self.metadata
    }

    /// The token name.
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// The ticker symbol.
    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    /// The number of decimals used in the presentation of token amounts.
    pub fn decimals(&self) -> u8 {
        self.metadata.decimals
    }

    /// The account currently holding ledger ownership.
    pub fn owner(&self) -> AccountAddress {
        self.owner
    }

    /// Iterate over all accounts with a balance entry, for balance
    /// reporting. Zero-balance entries may appear; absent accounts hold
    /// zero by definition.
    pub fn holders(&self) -> impl Iterator<Item = (&AccountAddress, TokenAmount)> {
        self.balances.iter().map(|(account, amount)| (account, *amount))
    }

    /// Events produced since the last [`take_events`](Self::take_events),
    /// oldest first.
    pub fn events(&self) -> &[TokenEvent] {
        &self.events
    }

    /// Drain the event log, returning the drained events oldest first.
    pub fn take_events(&mut self) -> Vec<TokenEvent> {
        std::mem::take(&mut self.events)
    }
}
