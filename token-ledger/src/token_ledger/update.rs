//! Execution of externally submitted ledger operations.
//!
//! The executor is the seam between the ledger and whatever drives it: the
//! caller authenticates a sender by its own means, wraps it in a
//! [`TransactionContext`], and submits one [`TokenOperation`] at a time.
//! Each operation either fully applies or fully fails with a
//! [`TokenUpdateError`](crate::errors::TokenUpdateError).

use crate::errors::TokenUpdateError;
use crate::receiver_interface::{NotifyOutcome, ReceiverRegistry};
use crate::token_ledger::TokenLedger;
use serde::{Deserialize, Serialize};
use token_types::types::primitives::{AccountAddress, TokenAmount};
use token_types::types::tokens::TransferData;

/// The context for a ledger transaction.
#[derive(Debug, Clone, Copy)]
pub struct TransactionContext {
    /// The account on whose behalf the operation executes. Supplied and
    /// authenticated by the caller; the ledger trusts it completely.
    pub sender: AccountAddress,
}

/// A single operation submitted to the ledger on behalf of a sender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TokenOperation {
    /// Move tokens from the sender to `recipient`. When `data` is present,
    /// the recipient's receive hook (if any) is notified with the payload
    /// after the transfer applies.
    Transfer {
        recipient: AccountAddress,
        amount: TokenAmount,
        data: Option<TransferData>,
    },
    /// Move tokens from `owner` to `recipient` using the allowance the
    /// owner granted to the sender.
    TransferFrom {
        owner: AccountAddress,
        recipient: AccountAddress,
        amount: TokenAmount,
    },
    /// Set the allowance of `spender` over the sender's balance.
    Approve {
        spender: AccountAddress,
        amount: TokenAmount,
    },
    /// Create `amount` new tokens on `recipient`'s balance. Not gated on
    /// the sender; see [`TokenLedger::mint`].
    Mint {
        recipient: AccountAddress,
        amount: TokenAmount,
    },
    /// Remove `amount` tokens from the sender's own balance.
    Burn { amount: TokenAmount },
    /// Hand ledger ownership to `new_owner`. Rejected unless the sender is
    /// the current owner.
    TransferOwnership { new_owner: AccountAddress },
}

/// Outcome of a successfully executed operation.
#[derive(Debug, Eq, PartialEq)]
pub enum OperationOutcome {
    /// The operation applied; no notification step was involved.
    Applied,
    /// The operation applied and ended in a notification step with the
    /// given outcome.
    Notified(NotifyOutcome),
}

/// Execute a single token operation on behalf of the context's sender.
///
/// The `receivers` registry is consulted only by transfers carrying a data
/// payload; every other operation ignores it.
///
/// # Errors
///
/// The failure of the underlying operation, flattened into
/// [`TokenUpdateError`]. Any error leaves the ledger unchanged.
pub fn execute_token_operation(
    ledger: &mut TokenLedger,
    receivers: &mut dyn ReceiverRegistry,
    context: &TransactionContext,
    operation: TokenOperation,
) -> Result<OperationOutcome, TokenUpdateError> {
    match operation {
        TokenOperation::Transfer {
            recipient,
            amount,
            data: None,
        } => {
            ledger.transfer(context.sender, recipient, amount)?;
            Ok(OperationOutcome::Applied)
        }
        TokenOperation::Transfer {
            recipient,
            amount,
            data: Some(data),
        } => {
            let outcome =
                ledger.transfer_with_data(receivers, context.sender, recipient, amount, data)?;
            Ok(OperationOutcome::Notified(outcome))
        }
        TokenOperation::TransferFrom {
            owner,
            recipient,
            amount,
        } => {
            ledger.transfer_from(context.sender, owner, recipient, amount)?;
            Ok(OperationOutcome::Applied)
        }
        TokenOperation::Approve { spender, amount } => {
            ledger.approve(context.sender, spender, amount);
            Ok(OperationOutcome::Applied)
        }
        TokenOperation::Mint { recipient, amount } => {
            ledger.mint(recipient, amount)?;
            Ok(OperationOutcome::Applied)
        }
        TokenOperation::Burn { amount } => {
            ledger.burn(context.sender, amount)?;
            Ok(OperationOutcome::Applied)
        }
        TokenOperation::TransferOwnership { new_owner } => {
            ledger.transfer_ownership(context.sender, new_owner)?;
            Ok(OperationOutcome::Applied)
        }
    }
}
