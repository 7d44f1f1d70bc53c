//! Receiver capability interface for transfers carrying a data payload.
//!
//! A recipient account may expose a receive hook. Whether it does is
//! decided by the [`ReceiverRegistry`] collaborator supplied by the caller;
//! the ledger itself only distinguishes "hook present" from "plain
//! recipient". This is abstracted in traits to allow for a testing stub.

use crate::token_ledger::TokenLedger;
use token_types::types::primitives::{AccountAddress, TokenAmount};
use token_types::types::tokens::TransferData;

/// Error returned by a receive hook. A failed hook does not undo the
/// transfer that triggered it.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("Receive hook rejected the transfer: {0}")]
pub struct ReceiveError(pub String);

/// Details of an applied transfer, passed to the recipient's receive hook.
#[derive(Debug, Clone)]
pub struct ReceivedTransfer {
    /// The account the tokens were debited from.
    pub from: AccountAddress,
    /// The credited account the hook is registered for.
    pub to: AccountAddress,
    /// The transferred amount. May be zero.
    pub amount: TokenAmount,
    /// The opaque payload attached by the sender.
    pub data: TransferData,
}

/// Callback capability exposed by an account able to react to incoming
/// transfers.
///
/// The hook runs after the transfer it reports has been applied: the ledger
/// handed to the hook already reflects the credit, and the hook may invoke
/// further ledger operations before returning. A hook failure is reported
/// back to the sender while the transfer itself stands.
pub trait TokenReceiver {
    /// React to an applied transfer towards the account this hook is
    /// registered for.
    fn on_token_transfer(
        &mut self,
        ledger: &mut TokenLedger,
        transfer: ReceivedTransfer,
    ) -> Result<(), ReceiveError>;
}

/// Lookup of the receive capability for an account.
///
/// Accounts without a registered receiver are plain recipients: transfers
/// with data credit them without any notification step.
pub trait ReceiverRegistry {
    /// Get the receive hook registered for the account, if any.
    fn receiver(&mut self, account: &AccountAddress) -> Option<&mut dyn TokenReceiver>;
}

/// Outcome of the notification step of a transfer with data. Produced only
/// after the balance mutation has been applied.
#[derive(Debug, Eq, PartialEq)]
pub enum NotifyOutcome {
    /// The recipient exposes no receive hook; nothing was invoked.
    NoReceiver,
    /// The receive hook ran and accepted the transfer.
    Notified,
    /// The receive hook ran and failed. The transfer stays applied.
    Failed(ReceiveError),
}
