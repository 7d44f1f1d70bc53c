//! In-memory fungible-token ledger: per-holder balances, per-owner/spender
//! allowances, the total supply, and the operations that mutate them.
//!
//! The ledger is a library, not a service. Callers supply the identity of
//! the account an operation executes on behalf of, and, for transfers
//! carrying a data payload, a registry resolving recipient accounts to
//! their receive hooks. The ledger trusts both collaborators completely and
//! performs no authentication of its own.

pub mod errors;
pub mod receiver_interface;
pub mod token_ledger;
