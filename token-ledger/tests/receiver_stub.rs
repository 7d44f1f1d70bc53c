//! Receiver registry stub providing an implementation of
//! [`ReceiverRegistry`] and a scriptable receive hook for driving the
//! notification path in tests.

use std::collections::HashMap;
use token_ledger::receiver_interface::{
    ReceiveError, ReceivedTransfer, ReceiverRegistry, TokenReceiver,
};
use token_ledger::token_ledger::TokenLedger;
use token_types::types::primitives::{AccountAddress, TokenAmount};

/// Registry stub backed by a map from account to its mock receiver.
#[derive(Debug, Default)]
pub struct ReceiverRegistryStub {
    receivers: HashMap<AccountAddress, MockReceiver>,
}

impl ReceiverRegistryStub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a receive hook for the account.
    pub fn register(&mut self, account: AccountAddress, receiver: MockReceiver) {
        self.receivers.insert(account, receiver);
    }

    /// Inspect the state of the hook registered for the account.
    pub fn receiver_state(&self, account: &AccountAddress) -> &MockReceiver {
        self.receivers.get(account).expect("receiver in stub")
    }
}

impl ReceiverRegistry for ReceiverRegistryStub {
    fn receiver(&mut self, account: &AccountAddress) -> Option<&mut dyn TokenReceiver> {
        self.receivers
            .get_mut(account)
            .map(|receiver| receiver as &mut dyn TokenReceiver)
    }
}

/// Registry without any receivers; every account is a plain recipient.
#[derive(Debug, Default)]
pub struct NoReceivers;

impl ReceiverRegistry for NoReceivers {
    fn receiver(&mut self, _account: &AccountAddress) -> Option<&mut dyn TokenReceiver> {
        None
    }
}

/// What the mock hook does after recording the transfer it was notified of.
#[derive(Debug, Clone, Default)]
pub enum ReceiverBehavior {
    /// Accept the transfer and do nothing else.
    #[default]
    Accept,
    /// Fail with the given message.
    Fail(String),
    /// Transfer `amount` back to the original sender, then accept.
    BounceBack { amount: TokenAmount },
    /// Burn `amount` from the received balance, then accept.
    BurnReceived { amount: TokenAmount },
}

/// Scriptable receive hook counting its invocations.
#[derive(Debug, Default)]
pub struct MockReceiver {
    /// Number of times the hook ran.
    pub call_count: usize,
    /// The transfers the hook was notified of, in order.
    pub received: Vec<ReceivedTransfer>,
    /// The recipient balance the hook observed on each invocation, before
    /// acting on its configured behavior.
    pub observed_balances: Vec<TokenAmount>,
    pub behavior: ReceiverBehavior,
}

impl MockReceiver {
    pub fn with_behavior(behavior: ReceiverBehavior) -> Self {
        Self {
            behavior,
            ..Self::default()
        }
    }
}

impl TokenReceiver for MockReceiver {
    fn on_token_transfer(
        &mut self,
        ledger: &mut TokenLedger,
        transfer: ReceivedTransfer,
    ) -> Result<(), ReceiveError> {
        self.call_count += 1;
        self.observed_balances.push(ledger.balance_of(&transfer.to));
        self.received.push(transfer.clone());
        match self.behavior.clone() {
            ReceiverBehavior::Accept => Ok(()),
            ReceiverBehavior::Fail(message) => Err(ReceiveError(message)),
            ReceiverBehavior::BounceBack { amount } => {
                ledger
                    .transfer(transfer.to, transfer.from, amount)
                    .map_err(|err| ReceiveError(err.to_string()))?;
                Ok(())
            }
            ReceiverBehavior::BurnReceived { amount } => {
                ledger
                    .burn(transfer.to, amount)
                    .map_err(|err| ReceiveError(err.to_string()))?;
                Ok(())
            }
        }
    }
}

// Tests for the registry stub

const TEST_ACCOUNT1: AccountAddress = AccountAddress([1u8; 32]);
const TEST_ACCOUNT2: AccountAddress = AccountAddress([2u8; 32]);

/// Test that a registered hook resolves and an unregistered account is a
/// plain recipient.
#[test]
fn test_receiver_lookup() {
    let mut stub = ReceiverRegistryStub::new();
    stub.register(TEST_ACCOUNT1, MockReceiver::default());

    assert!(stub.receiver(&TEST_ACCOUNT1).is_some());
    assert!(stub.receiver(&TEST_ACCOUNT2).is_none());
}

#[test]
fn test_no_receivers_resolves_nothing() {
    let mut stub = NoReceivers;
    assert!(stub.receiver(&TEST_ACCOUNT1).is_none());
}
