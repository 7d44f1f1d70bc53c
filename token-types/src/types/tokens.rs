//! Token metadata and transfer payload types.

use serde::{Deserialize, Serialize};

/// Presentation metadata for the token, fixed when the ledger is created
/// and never mutated afterwards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Human readable token name.
    pub name: String,
    /// Short ticker symbol.
    pub symbol: String,
    /// Number of decimals used in the presentation of token amounts.
    pub decimals: u8,
}

/// Opaque payload attached to a transfer and forwarded to the recipient's
/// receive hook. The ledger never interprets the contents.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TransferData(pub Vec<u8>);

impl From<Vec<u8>> for TransferData {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for TransferData {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for TransferData {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
