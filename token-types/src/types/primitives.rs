//! Primitive domain values used throughout the ledger.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifier of a token-holding account.
///
/// The address is opaque to the ledger: it carries no meaning beyond
/// equality, ordering and hashing. The all-zero address is reserved as the
/// unspendable null address.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct AccountAddress(pub [u8; 32]);

impl AccountAddress {
    /// The designated unspendable address. Transfers towards it are
    /// rejected, so no balance can ever become unreachable behind it.
    pub const NULL: Self = Self([0u8; 32]);
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// The given string is not a valid hex-encoded account address.
#[derive(Debug, thiserror::Error)]
#[error("Invalid account address: {0}")]
pub struct AccountAddressParseError(String);

impl FromStr for AccountAddress {
    type Err = AccountAddressParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let bytes =
            hex::decode(input).map_err(|err| AccountAddressParseError(err.to_string()))?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|_| AccountAddressParseError("expected 32 bytes".to_string()))?;
        Ok(Self(bytes))
    }
}

/// Addresses serialize as their hex string form so that maps keyed by
/// address stay readable in text formats.
impl Serialize for AccountAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Token amount in the smallest representable unit.
///
/// Amounts are fixed width; all arithmetic on them is checked, never
/// wrapping. The numerical value presented to users is
/// `amount * 10^(-decimals)` with the decimals fixed in the ledger
/// metadata.
#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TokenAmount(pub u128);

impl TokenAmount {
    /// Maximum representable token amount.
    pub const MAX: Self = Self(u128::MAX);
    /// The zero amount.
    pub const ZERO: Self = Self(0);
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
