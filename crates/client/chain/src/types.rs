//! Common types for staking contract reads.

use serde::{Deserialize, Serialize};
use staking_core::{Address, StakeInfo, TokenId};

/// Raw 4-field tuple returned by the staking contract's `getStakeInfo`.
///
/// Times are unix seconds. The contract reports lock months as a full-width
/// integer; narrowing to client types happens in [`normalize_stake_info`].
/// Never-staked tokens read back as [`RawStakeTuple::NEVER_STAKED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStakeTuple {
    pub start_time: u64,
    pub unlock_time: u64,
    pub lock_months: u64,
    pub owner: Address,
}

impl RawStakeTuple {
    /// The zeroed tuple a staking contract returns for a token that has
    /// never been staked.
    pub const NEVER_STAKED: Self = Self {
        start_time: 0,
        unlock_time: 0,
        lock_months: 0,
        owner: Address::ZERO,
    };
}

/// Narrows a raw contract tuple into the client's [`StakeInfo`].
///
/// Lock months saturate at `u32::MAX`; times and owner pass through
/// unchanged.
pub fn normalize_stake_info(token_id: TokenId, raw: &RawStakeTuple) -> StakeInfo {
    StakeInfo {
        token_id,
        start_time: raw.start_time,
        unlock_time: raw.unlock_time,
        lock_months: u32::try_from(raw.lock_months).unwrap_or(u32::MAX),
        owner: raw.owner,
    }
}

/// Pool-wide staking totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolTotals {
    /// Effective VP summed across every staker.
    pub global_effective_vp: u128,
    /// Number of tokens currently staked.
    pub total_staked: u64,
}

/// Batching plan for scanning a 1-based token-id range.
///
/// Collections are enumerated `1..=total_supply`; reads go out in batches
/// of `batch_size` so a public RPC endpoint never sees one giant call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanPlan {
    pub total_supply: u32,
    pub batch_size: u32,
}

impl ScanPlan {
    /// Collection size and batch width used by the hosted deployment.
    pub const DEFAULT_TOTAL_SUPPLY: u32 = 1000;
    pub const DEFAULT_BATCH_SIZE: u32 = 100;

    pub fn new(total_supply: u32, batch_size: u32) -> Self {
        Self {
            total_supply,
            batch_size,
        }
    }

    /// Token-id batches in ascending order.
    ///
    /// A zero batch size is treated as one token per batch.
    pub fn batches(&self) -> Vec<Vec<TokenId>> {
        let ids: Vec<TokenId> = (1..=self.total_supply).map(TokenId).collect();
        ids.chunks(self.batch_size.max(1) as usize)
            .map(|chunk| chunk.to_vec())
            .collect()
    }
}

impl Default for ScanPlan {
    fn default() -> Self {
        Self {
            total_supply: Self::DEFAULT_TOTAL_SUPPLY,
            batch_size: Self::DEFAULT_BATCH_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_narrows_lock_months() {
        let owner: Address = "0x00112233445566778899aabbccddeeff00112233"
            .parse()
            .unwrap();
        let raw = RawStakeTuple {
            start_time: 1_700_000_000,
            unlock_time: 1_707_776_000,
            lock_months: 3,
            owner,
        };

        let info = normalize_stake_info(TokenId(42), &raw);

        assert_eq!(info.token_id, TokenId(42));
        assert_eq!(info.start_time, 1_700_000_000);
        assert_eq!(info.unlock_time, 1_707_776_000);
        assert_eq!(info.lock_months, 3);
        assert_eq!(info.owner, owner);
    }

    #[test]
    fn oversized_lock_months_saturate() {
        let raw = RawStakeTuple {
            lock_months: u64::MAX,
            ..RawStakeTuple::NEVER_STAKED
        };

        assert_eq!(normalize_stake_info(TokenId(1), &raw).lock_months, u32::MAX);
    }

    #[test]
    fn scan_plan_covers_the_whole_range_without_overlap() {
        let plan = ScanPlan::new(10, 4);
        let batches = plan.batches();

        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].len(), 4);
        assert_eq!(batches[2].len(), 2);

        let flat: Vec<u32> = batches.iter().flatten().map(|t| t.value()).collect();
        assert_eq!(flat, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn degenerate_scan_plans_stay_usable() {
        assert!(ScanPlan::new(0, 100).batches().is_empty());
        assert_eq!(ScanPlan::new(3, 0).batches().len(), 3);
    }

    #[test]
    fn default_plan_matches_the_deployment() {
        let plan = ScanPlan::default();
        assert_eq!(plan.total_supply, 1000);
        assert_eq!(plan.batch_size, 100);
        assert_eq!(plan.batches().len(), 10);
    }
}
