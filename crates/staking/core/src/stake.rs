//! Stake records and their lifecycle status.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::tiers::TokenId;

/// 20-byte account address, rendered as `0x`-prefixed lowercase hex.
///
/// Stored as raw bytes, so equality is case-insensitive with respect to any
/// textual form the address arrived in.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The all-zero address contracts return for "nobody".
    pub const ZERO: Self = Self([0u8; 20]);

    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == Self::ZERO.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

/// Failure to parse a textual address.
#[derive(Debug, Error, PartialEq)]
pub enum AddressParseError {
    #[error("address must be 40 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("address contains non-hex characters")]
    InvalidHex(#[from] hex::FromHexError),
}

impl FromStr for Address {
    type Err = AddressParseError;

    /// Accepts an optional `0x`/`0X` prefix and mixed-case hex digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.len() != 40 {
            return Err(AddressParseError::InvalidLength(digits.len()));
        }
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes)?;
        Ok(Self(bytes))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// On-chain stake record for a single token, normalized to client types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StakeInfo {
    pub token_id: TokenId,
    /// Unix seconds when the stake began; `0` for never-staked tokens.
    pub start_time: u64,
    /// Unix seconds when the lock expires.
    pub unlock_time: u64,
    pub lock_months: u32,
    pub owner: Address,
}

/// Lifecycle status of a stake record.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StakeStatus {
    /// Token has never been staked.
    #[default]
    Never,
    /// Lock window still open.
    Locked,
    /// Lock expired; the owner can unstake.
    Unlockable,
}

impl StakeInfo {
    /// Status of this stake at `now` (unix seconds).
    ///
    /// Records with no start time or a zero owner have never been staked.
    /// A stake stays `Locked` strictly until its unlock time; at
    /// `unlock_time == now` it is already `Unlockable`.
    pub fn status(&self, now: u64) -> StakeStatus {
        if self.start_time == 0 || self.owner.is_zero() {
            StakeStatus::Never
        } else if self.unlock_time > now {
            StakeStatus::Locked
        } else {
            StakeStatus::Unlockable
        }
    }
}
