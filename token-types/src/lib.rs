//! Types exposed by the token ledger as part of operation execution and
//! queries. The ledger logic itself lives in the `token-ledger` crate; this
//! crate only defines the domain values it operates on.

pub mod types;
