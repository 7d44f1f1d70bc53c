//! Errors produced by ledger operations.
//!
//! Leaf errors are small structs carrying the values a caller needs to act
//! on the failure; the per-operation enums compose them. Every error means
//! the operation left the ledger byte-for-byte unchanged.

use token_types::types::primitives::{AccountAddress, TokenAmount};

/// The account has insufficient balance for the attempted debit.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("Insufficient balance on account")]
pub struct InsufficientBalanceError {
    /// Balance available on the debited account.
    pub available: TokenAmount,
    /// Amount the operation attempted to debit.
    pub required: TokenAmount,
}

/// The recipient is the unspendable null address.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("The null address cannot receive tokens")]
pub struct InvalidRecipientError(pub AccountAddress);

/// A credit would push a balance or the total supply past the representable
/// maximum.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("Amount not representable")]
pub struct BalanceOverflowError {
    /// The value the credit would have been applied to.
    pub current: TokenAmount,
    /// The requested credit.
    pub requested: TokenAmount,
    /// Maximum representable amount.
    pub max_representable: TokenAmount,
}

/// The spender's allowance from the owner does not cover the attempted
/// debit.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("Insufficient allowance for spender")]
pub struct InsufficientAllowanceError {
    /// Allowance currently granted to the spender.
    pub available: TokenAmount,
    /// Amount the spender attempted to use.
    pub required: TokenAmount,
}

/// The sender is not permitted to perform the operation.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("Sender is not authorized for this operation")]
pub struct NotAuthorizedError {
    /// The rejected sender.
    pub sender: AccountAddress,
}

/// An invariant of the ledger state that should always hold is broken.
/// This is an error that should never happen and is unrecoverable.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Token ledger state invariant broken: {0}")]
pub struct TokenStateInvariantError(pub String);

/// Reasons why a transfer can fail.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("Insufficient balance for transfer: {0}")]
    InsufficientBalance(#[from] InsufficientBalanceError),
    #[error("{0}")]
    InvalidRecipient(#[from] InvalidRecipientError),
    #[error("Transfer credit overflow: {0}")]
    Overflow(#[from] BalanceOverflowError),
}

/// Reasons why a delegated transfer can fail.
#[derive(Debug, thiserror::Error)]
pub enum TransferFromError {
    #[error("Insufficient allowance for transfer: {0}")]
    InsufficientAllowance(#[from] InsufficientAllowanceError),
    #[error("Insufficient balance for transfer: {0}")]
    InsufficientBalance(#[from] InsufficientBalanceError),
    #[error("{0}")]
    InvalidRecipient(#[from] InvalidRecipientError),
    #[error("Transfer credit overflow: {0}")]
    Overflow(#[from] BalanceOverflowError),
}

impl From<TransferError> for TransferFromError {
    fn from(err: TransferError) -> Self {
        match err {
            TransferError::InsufficientBalance(err) => Self::InsufficientBalance(err),
            TransferError::InvalidRecipient(err) => Self::InvalidRecipient(err),
            TransferError::Overflow(err) => Self::Overflow(err),
        }
    }
}

/// Reasons why a burn can fail.
#[derive(Debug, thiserror::Error)]
pub enum BurnError {
    #[error("Insufficient balance for burn: {0}")]
    InsufficientBalance(#[from] InsufficientBalanceError),
    #[error("{0}")]
    StateInvariantViolation(#[from] TokenStateInvariantError),
}

/// Reasons why an ownership handover can fail.
#[derive(Debug, thiserror::Error)]
pub enum TransferOwnershipError {
    #[error("{0}")]
    NotAuthorized(#[from] NotAuthorizedError),
    #[error("{0}")]
    InvalidRecipient(#[from] InvalidRecipientError),
}

/// Reasons why creating a ledger can fail.
#[derive(Debug, thiserror::Error)]
pub enum TokenInitializationError {
    #[error("Invalid token initialization parameters: {0}")]
    InvalidInitializationParameters(String),
}

/// Reasons why an operation submitted through
/// [`execute_token_operation`](crate::token_ledger::execute_token_operation)
/// can fail. Flattens the per-operation errors into a single surface.
#[derive(Debug, thiserror::Error)]
pub enum TokenUpdateError {
    #[error("Insufficient balance on account: {0}")]
    InsufficientBalance(#[from] InsufficientBalanceError),
    #[error("Insufficient allowance for spender: {0}")]
    InsufficientAllowance(#[from] InsufficientAllowanceError),
    #[error("{0}")]
    InvalidRecipient(#[from] InvalidRecipientError),
    #[error("{0}")]
    Overflow(#[from] BalanceOverflowError),
    #[error("{0}")]
    NotAuthorized(#[from] NotAuthorizedError),
    #[error("{0}")]
    StateInvariantViolation(#[from] TokenStateInvariantError),
}

impl From<TransferError> for TokenUpdateError {
    fn from(err: TransferError) -> Self {
        match err {
            TransferError::InsufficientBalance(err) => Self::InsufficientBalance(err),
            TransferError::InvalidRecipient(err) => Self::InvalidRecipient(err),
            TransferError::Overflow(err) => Self::Overflow(err),
        }
    }
}

impl From<TransferFromError> for TokenUpdateError {
    fn from(err: TransferFromError) -> Self {
        match err {
            TransferFromError::InsufficientAllowance(err) => Self::InsufficientAllowance(err),
            TransferFromError::InsufficientBalance(err) => Self::InsufficientBalance(err),
            TransferFromError::InvalidRecipient(err) => Self::InvalidRecipient(err),
            TransferFromError::Overflow(err) => Self::Overflow(err),
        }
    }
}

impl From<BurnError> for TokenUpdateError {
    fn from(err: BurnError) -> Self {
        match err {
            BurnError::InsufficientBalance(err) => Self::InsufficientBalance(err),
            BurnError::StateInvariantViolation(err) => Self::StateInvariantViolation(err),
        }
    }
}

impl From<TransferOwnershipError> for TokenUpdateError {
    fn from(err: TransferOwnershipError) -> Self {
        match err {
            TransferOwnershipError::NotAuthorized(err) => Self::NotAuthorized(err),
            TransferOwnershipError::InvalidRecipient(err) => Self::InvalidRecipient(err),
        }
    }
}
