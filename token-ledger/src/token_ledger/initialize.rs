//! Creation of a ledger instance.

use crate::errors::TokenInitializationError;
use crate::token_ledger::TokenLedger;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use token_types::types::events::{TokenEvent, TokenMintEvent};
use token_types::types::primitives::{AccountAddress, TokenAmount};
use token_types::types::tokens::TokenMetadata;

/// Parameters fixed when a ledger is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenInitializationParameters {
    /// Human readable token name.
    pub name: String,
    /// Short ticker symbol.
    pub symbol: String,
    /// Number of decimals used in the presentation of token amounts.
    pub decimals: u8,
    /// Supply credited in full to the deployer account.
    pub initial_supply: TokenAmount,
}

impl TokenLedger {
    /// Create a ledger from the given parameters.
    ///
    /// The full initial supply is credited to the deployer, which also
    /// becomes the ledger owner. A non-zero initial supply is recorded as a
    /// [`TokenEvent::Mint`] in the event log.
    ///
    /// # Errors
    ///
    /// - [`TokenInitializationError::InvalidInitializationParameters`] The
    ///   name or symbol is empty, or the deployer is the null address.
    pub fn initialize(
        params: TokenInitializationParameters,
        deployer: AccountAddress,
    ) -> Result<Self, TokenInitializationError> {
        if params.name.is_empty() {
            return Err(TokenInitializationError::InvalidInitializationParameters(
                "Token name is missing".to_string(),
            ));
        }
        if params.symbol.is_empty() {
            return Err(TokenInitializationError::InvalidInitializationParameters(
                "Token symbol is missing".to_string(),
            ));
        }
        if deployer == AccountAddress::NULL {
            return Err(TokenInitializationError::InvalidInitializationParameters(
                "Deployer is the null address".to_string(),
            ));
        }

        let mut ledger = TokenLedger {
            metadata: TokenMetadata {
                name: params.name,
                symbol: params.symbol,
                decimals: params.decimals,
            },
            owner: deployer,
            balances: BTreeMap::new(),
            allowances: BTreeMap::new(),
            total_supply: TokenAmount::ZERO,
            events: Vec::new(),
        };
        if params.initial_supply > TokenAmount::ZERO {
            ledger.balances.insert(deployer, params.initial_supply);
            ledger.total_supply = params.initial_supply;
            ledger.events.push(TokenEvent::Mint(TokenMintEvent {
                target: deployer,
                amount: params.initial_supply,
            }));
        }
        Ok(ledger)
    }
}
