//! Events produced by ledger operations.
//! Events represent observable changes to the ledger state; every mutating
//! operation that succeeds appends exactly one event, including transfers
//! of a zero amount.

use crate::types::primitives::{AccountAddress, TokenAmount};
use crate::types::tokens::TransferData;
use serde::{Deserialize, Serialize};

/// Observable effect of a ledger operation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum TokenEvent {
    /// A transfer of tokens was performed.
    Transfer(TokenTransferEvent),
    /// The token supply was increased by minting tokens to a holder.
    Mint(TokenMintEvent),
    /// The token supply was decreased by burning tokens from the balance of
    /// a holder.
    Burn(TokenBurnEvent),
    /// An allowance was set to a new value.
    Approval(TokenApprovalEvent),
    /// The ledger owner account changed.
    OwnershipTransferred(TokenOwnershipEvent),
}

/// An event emitted when a transfer of tokens from `from` to `to` is
/// performed.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TokenTransferEvent {
    /// The token holder from which the tokens are debited.
    pub from: AccountAddress,
    /// The token holder to which the tokens are credited.
    pub to: AccountAddress,
    /// The amount of tokens transferred. May be zero.
    pub amount: TokenAmount,
    /// Optional opaque payload attached to the transfer.
    pub data: Option<TransferData>,
}

/// An event emitted when the token supply is increased by minting tokens to
/// a token holder.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TokenMintEvent {
    /// The account whose balance the amount is minted to.
    pub target: AccountAddress,
    /// The minted amount.
    pub amount: TokenAmount,
}

/// An event emitted when the token supply is decreased by burning tokens
/// from the balance of a token holder.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TokenBurnEvent {
    /// The account whose balance the amount is burned from.
    pub target: AccountAddress,
    /// The burned amount.
    pub amount: TokenAmount,
}

/// An event emitted when an allowance is set. The recorded amount is the
/// new absolute allowance, not a delta.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TokenApprovalEvent {
    /// The account whose balance the allowance draws from.
    pub owner: AccountAddress,
    /// The account permitted to spend the allowance.
    pub spender: AccountAddress,
    /// The new allowance amount.
    pub amount: TokenAmount,
}

/// An event emitted when ledger ownership is handed over.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TokenOwnershipEvent {
    /// The account that held ownership before the handover.
    pub previous_owner: AccountAddress,
    /// The account holding ownership from now on.
    pub new_owner: AccountAddress,
}
