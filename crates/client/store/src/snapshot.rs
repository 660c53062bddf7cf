//! Immutable session snapshots.

use serde::{Deserialize, Serialize};
use staking_core::{Address, StakeInfo, StakeStatus, TokenId};

/// Freshness of the chain-derived data in a snapshot.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DataStatus {
    /// Nothing fetched yet.
    #[default]
    Idle,
    /// A refresh is in flight.
    Loading,
    /// Data is current and the wallet has stakes.
    Ready,
    /// Data is current and the wallet has no stakes.
    Empty,
    /// The last refresh failed.
    Error,
}

/// The operation the client is currently busy with, if any.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BusyKind {
    #[default]
    Idle,
    Fetch,
    Approve,
    Stake,
    Unstake,
}

/// Per-token view tracked for the connected wallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenState {
    pub token_id: TokenId,
    /// Stake record when the token is or was staked.
    pub stake: Option<StakeInfo>,
    /// Status derived at sync time.
    pub status: StakeStatus,
}

/// The connected wallet's aggregate position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub effective_vp: u128,
    pub staked_count: u64,
}

/// Pool-wide aggregates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalStats {
    pub total_effective_vp: u128,
    pub total_staked: u64,
}

/// Tokens and lock duration picked for a hypothetical stake.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub token_ids: Vec<TokenId>,
    pub lock_months: u32,
}

/// One immutable view of the whole session.
///
/// Snapshots are handed out as `Arc<SessionSnapshot>` and never mutated in
/// place; the store swaps in a fresh snapshot on every change, so readers
/// can hold one as long as they like.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Connected wallet, if any.
    pub wallet: Option<Address>,
    /// Whether the contract has staking paused.
    pub paused: bool,
    /// Per-token state for the wallet's stakes.
    pub tokens: Vec<TokenState>,
    /// The wallet's aggregate position.
    pub user_stats: UserStats,
    /// Pool-wide aggregates.
    pub global_stats: GlobalStats,
    /// Freshness of the chain-derived fields above.
    pub data_status: DataStatus,
    /// In-flight operation, if any.
    pub busy: BusyKind,
    /// Stake selection driving the live projection.
    pub selection: Selection,
}
