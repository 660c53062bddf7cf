//! Reward projection for hypothetical stake actions.
//!
//! The engine combines the tier table and the boost schedule with current
//! pool totals to answer "what would staking these tokens for this long get
//! me": boosted voting power, share of the pool, and the projected reward
//! accrual rate. Nothing is cached or mutated; each preview is an
//! independent computation over caller-supplied inputs.

use crate::boost::boost_multiplier;
use crate::config::{PoolConfig, VP_SCALE};
use crate::tiers::{TokenId, VotingPowerTable};

/// Effective voting power in the integer unit tracked on-chain, already
/// including boost and scaling.
pub type EffectiveVp = u128;

/// Inputs for one hypothetical stake action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreviewRequest {
    /// Candidate tokens. Duplicates double-count.
    pub token_ids: Vec<TokenId>,
    /// Committed lock duration in months.
    pub lock_months: u32,
    /// Pool-wide effective VP before this stake.
    pub global_effective_vp: EffectiveVp,
    /// The staker's own effective VP before this stake.
    pub user_effective_vp: EffectiveVp,
}

impl PreviewRequest {
    /// Request for a staker with no prior stake (`user_effective_vp` zero).
    pub fn new(
        token_ids: Vec<TokenId>,
        lock_months: u32,
        global_effective_vp: EffectiveVp,
    ) -> Self {
        Self {
            token_ids,
            lock_months,
            global_effective_vp,
            user_effective_vp: 0,
        }
    }

    /// Sets the staker's pre-existing effective VP.
    pub fn with_user_effective_vp(mut self, user_effective_vp: EffectiveVp) -> Self {
        self.user_effective_vp = user_effective_vp;
        self
    }
}

/// Projection of the outcome of a stake action before it is submitted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StakingPreview {
    /// Sum of unboosted voting power across the candidate tokens.
    pub total_base_vp: u64,
    /// `total_base_vp` after the lock boost.
    pub boosted_vp: f64,
    /// The boost factor that was applied.
    pub boost_multiplier: f64,
    /// Estimated reward accrual at the projected share of the pool.
    pub projected_points_per_day: f64,
    /// Projected share of the pool as a percentage in `[0, 100]`.
    pub projected_pool_share: f64,
}

/// Converts boosted (floating) voting power into the integer effective-VP
/// unit: `floor(boosted_vp * VP_SCALE)`.
pub fn scale_effective_vp(boosted_vp: f64) -> EffectiveVp {
    (boosted_vp * VP_SCALE as f64).floor() as EffectiveVp
}

/// Computes [`StakingPreview`] records from a voting power table and a pool
/// configuration.
///
/// The engine is stateless; concurrent callers need no coordination.
pub struct PreviewEngine<'a> {
    table: &'a dyn VotingPowerTable,
    pool: PoolConfig,
}

impl<'a> PreviewEngine<'a> {
    pub fn new(table: &'a dyn VotingPowerTable, pool: PoolConfig) -> Self {
        Self { table, pool }
    }

    /// Projects the outcome of staking `request.token_ids` for
    /// `request.lock_months` months.
    ///
    /// Performs no defensive validation: ids outside the table's domain
    /// resolve to the default tier, and callers validate totals before
    /// invoking. Share and rate are both `0` when the hypothetical new
    /// global total is zero.
    pub fn preview(&self, request: &PreviewRequest) -> StakingPreview {
        let boost = boost_multiplier(request.lock_months);

        let total_base_vp: u64 = request
            .token_ids
            .iter()
            .map(|&token| u64::from(self.table.base_voting_power(token)))
            .sum();

        let boosted_vp = total_base_vp as f64 * boost;
        let scaled = scale_effective_vp(boosted_vp);
        let new_user = request.user_effective_vp + scaled;
        let new_global = request.global_effective_vp + scaled;

        let pool_ratio = if new_global == 0 {
            0.0
        } else {
            new_user as f64 / new_global as f64
        };

        StakingPreview {
            total_base_vp,
            boosted_vp,
            boost_multiplier: boost,
            projected_points_per_day: pool_ratio * self.pool.points_per_day(),
            projected_pool_share: pool_ratio * 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiers::{Tier, TierTable};

    fn rare_table() -> TierTable {
        [(TokenId(1), Tier::Rare)].into_iter().collect()
    }

    #[test]
    fn empty_selection_projects_nothing() {
        let table = TierTable::new();
        let engine = PreviewEngine::new(&table, PoolConfig::new());

        let preview = engine.preview(&PreviewRequest::new(vec![], 0, 0));

        assert_eq!(preview.total_base_vp, 0);
        assert_eq!(preview.boosted_vp, 0.0);
        assert_eq!(preview.boost_multiplier, 1.0);
        assert_eq!(preview.projected_pool_share, 0.0);
        assert_eq!(preview.projected_points_per_day, 0.0);
    }

    #[test]
    fn empty_selection_ignores_lock_months() {
        let table = rare_table();
        let engine = PreviewEngine::new(&table, PoolConfig::new());

        let preview = engine.preview(&PreviewRequest::new(vec![], 24, 9000));

        assert_eq!(preview.total_base_vp, 0);
        assert_eq!(preview.boosted_vp, 0.0);
        assert_eq!(preview.projected_pool_share, 0.0);
    }

    #[test]
    fn first_staker_takes_the_whole_pool() {
        let table = rare_table();
        let engine = PreviewEngine::new(&table, PoolConfig::new());

        let preview = engine.preview(&PreviewRequest::new(vec![TokenId(1)], 1, 0));

        assert_eq!(preview.total_base_vp, 10);
        assert_eq!(preview.boost_multiplier, 1.05);
        assert_eq!(preview.boosted_vp, 10.5);
        assert_eq!(scale_effective_vp(preview.boosted_vp), 1050);
        assert_eq!(preview.projected_pool_share, 100.0);
    }

    #[test]
    fn long_lock_against_an_existing_pool() {
        let table = rare_table();
        let engine = PreviewEngine::new(&table, PoolConfig::new());

        let preview = engine.preview(&PreviewRequest::new(vec![TokenId(1)], 12, 9000));

        // 1 + 0.6 + 0.01 * 66 = 2.26
        assert!((preview.boost_multiplier - 2.26).abs() < 1e-12);
        assert!((preview.boosted_vp - 22.6).abs() < 1e-12);
        assert_eq!(scale_effective_vp(preview.boosted_vp), 2260);
        // 2260 of a new global total of 11260
        assert!((preview.projected_pool_share - 20.071).abs() < 1e-3);
    }

    #[test]
    fn rate_stays_proportional_to_share() {
        let table = rare_table();
        let pool = PoolConfig::new();
        let engine = PreviewEngine::new(&table, pool.clone());

        let preview = engine.preview(&PreviewRequest::new(vec![TokenId(1)], 6, 42_000));

        let expected = preview.projected_pool_share / 100.0 * pool.points_per_day();
        assert!((preview.projected_points_per_day - expected).abs() < 1e-9);
    }

    #[test]
    fn longer_locks_never_project_less() {
        let table = rare_table();
        let engine = PreviewEngine::new(&table, PoolConfig::new());

        let mut last = engine.preview(&PreviewRequest::new(vec![TokenId(1)], 0, 9000));
        for months in 1..=24 {
            let next = engine.preview(&PreviewRequest::new(vec![TokenId(1)], months, 9000));
            assert!(next.boosted_vp >= last.boosted_vp);
            assert!(next.projected_pool_share >= last.projected_pool_share);
            assert!(next.projected_points_per_day >= last.projected_points_per_day);
            last = next;
        }
    }

    #[test]
    fn duplicate_ids_double_count() {
        let table = rare_table();
        let engine = PreviewEngine::new(&table, PoolConfig::new());

        let preview = engine.preview(&PreviewRequest::new(vec![TokenId(1), TokenId(1)], 0, 0));

        assert_eq!(preview.total_base_vp, 20);
    }

    #[test]
    fn unknown_ids_count_at_the_default_tier() {
        let table = TierTable::new();
        let engine = PreviewEngine::new(&table, PoolConfig::new());

        let preview = engine.preview(&PreviewRequest::new(vec![TokenId(999)], 0, 0));

        assert_eq!(preview.total_base_vp, 1);
    }

    #[test]
    fn mixed_tiers_sum_their_base_power() {
        let table: TierTable = [
            (TokenId(1), Tier::Common),
            (TokenId(2), Tier::Epic),
            (TokenId(3), Tier::Legendary),
        ]
        .into_iter()
        .collect();
        let engine = PreviewEngine::new(&table, PoolConfig::new());

        let preview =
            engine.preview(&PreviewRequest::new(vec![TokenId(1), TokenId(2), TokenId(3)], 0, 0));

        assert_eq!(preview.total_base_vp, 126);
    }

    #[test]
    fn prior_stake_raises_the_projected_share() {
        let table = rare_table();
        let engine = PreviewEngine::new(&table, PoolConfig::new());

        let request =
            PreviewRequest::new(vec![TokenId(1)], 1, 10_000).with_user_effective_vp(5_000);
        let preview = engine.preview(&request);

        // (5000 + 1050) / (10000 + 1050) * 100
        let expected = 6050.0 / 11050.0 * 100.0;
        assert!((preview.projected_pool_share - expected).abs() < 1e-9);
    }

    #[test]
    fn scaling_floors_fractional_power() {
        assert_eq!(scale_effective_vp(0.0), 0);
        assert_eq!(scale_effective_vp(10.5), 1050);
        assert_eq!(scale_effective_vp(1.239), 123);
    }
}
