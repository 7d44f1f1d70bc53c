use assert_matches::assert_matches;
use receiver_stub::NoReceivers;
use token_ledger::errors::{NotAuthorizedError, TokenUpdateError, TransferOwnershipError};
use token_ledger::token_ledger::{
    execute_token_operation, OperationOutcome, TokenOperation, TransactionContext,
};
use token_types::types::events::{TokenEvent, TokenOwnershipEvent};
use token_types::types::primitives::AccountAddress;

mod receiver_stub;
mod utils;

use utils::{account, parity_ledger, DEPLOYER};

/// The current owner can hand ownership over, observable through the owner
/// query and the event log.
#[test]
fn test_transfer_ownership() {
    let mut ledger = parity_ledger(1_000);
    let new_owner = account(2);

    ledger
        .transfer_ownership(DEPLOYER, new_owner)
        .expect("transfer ownership");

    assert_eq!(ledger.owner(), new_owner);
    assert_eq!(
        ledger.events(),
        [TokenEvent::OwnershipTransferred(TokenOwnershipEvent {
            previous_owner: DEPLOYER,
            new_owner,
        })]
    );
}

/// Rejects the handover for senders other than the current owner.
#[test]
fn test_transfer_ownership_unauthorized() {
    let mut ledger = parity_ledger(1_000);
    let stranger = account(5);

    let res = ledger.transfer_ownership(stranger, stranger);

    assert_matches!(
        res,
        Err(TransferOwnershipError::NotAuthorized(NotAuthorizedError { sender })) => {
            assert_eq!(sender, stranger);
        }
    );
    assert_eq!(ledger.owner(), DEPLOYER);
    assert!(ledger.events().is_empty());
}

/// The null address cannot become the owner.
#[test]
fn test_transfer_ownership_to_null_address() {
    let mut ledger = parity_ledger(1_000);

    let res = ledger.transfer_ownership(DEPLOYER, AccountAddress::NULL);

    assert_matches!(res, Err(TransferOwnershipError::InvalidRecipient(_)));
    assert_eq!(ledger.owner(), DEPLOYER);
}

/// After a handover the previous owner is an ordinary account.
#[test]
fn test_previous_owner_loses_authority() {
    let mut ledger = parity_ledger(1_000);
    let new_owner = account(2);
    ledger
        .transfer_ownership(DEPLOYER, new_owner)
        .expect("transfer ownership");

    let context = TransactionContext { sender: DEPLOYER };
    let res = execute_token_operation(
        &mut ledger,
        &mut NoReceivers,
        &context,
        TokenOperation::TransferOwnership {
            new_owner: DEPLOYER,
        },
    );

    assert_matches!(res, Err(TokenUpdateError::NotAuthorized(_)));
    assert_eq!(ledger.owner(), new_owner);
}

/// The executor path for a successful handover.
#[test]
fn test_transfer_ownership_via_operation() {
    let mut ledger = parity_ledger(1_000);
    let new_owner = account(2);

    let context = TransactionContext { sender: DEPLOYER };
    let outcome = execute_token_operation(
        &mut ledger,
        &mut NoReceivers,
        &context,
        TokenOperation::TransferOwnership { new_owner },
    )
    .expect("execute");

    assert_eq!(outcome, OperationOutcome::Applied);
    assert_eq!(ledger.owner(), new_owner);
}
