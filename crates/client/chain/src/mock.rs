//! Mock staking provider for tests and offline sessions.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use staking_core::{Address, TokenId};

use crate::traits::{ChainError, PoolReader, StakeReader, StakingProvider};
use crate::types::{PoolTotals, RawStakeTuple};

/// In-memory staking provider.
///
/// Simulates contract reads without a network. Unknown tokens read back as
/// zeroed tuples, the way the staking contract reports never-staked ids.
#[derive(Clone, Default)]
pub struct MockStakingProvider {
    stakes: Arc<Mutex<HashMap<TokenId, RawStakeTuple>>>,
    totals: Arc<Mutex<PoolTotals>>,
    user_vp: Arc<Mutex<HashMap<Address, u128>>>,
    paused: Arc<Mutex<bool>>,
}

impl MockStakingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the stake record read back for `token`.
    pub fn seed_stake(&self, token: TokenId, raw: RawStakeTuple) {
        self.stakes.lock().unwrap().insert(token, raw);
    }

    /// Sets the pool totals reads will report.
    pub fn set_totals(&self, totals: PoolTotals) {
        *self.totals.lock().unwrap() = totals;
    }

    /// Sets the effective VP attributed to `owner`.
    pub fn set_user_vp(&self, owner: Address, effective_vp: u128) {
        self.user_vp.lock().unwrap().insert(owner, effective_vp);
    }

    /// Pauses or resumes staking.
    pub fn set_paused(&self, paused: bool) {
        *self.paused.lock().unwrap() = paused;
    }
}

#[async_trait]
impl StakeReader for MockStakingProvider {
    async fn stake_info(&self, token: TokenId) -> Result<RawStakeTuple, ChainError> {
        let stakes = self.stakes.lock().unwrap();
        Ok(stakes
            .get(&token)
            .copied()
            .unwrap_or(RawStakeTuple::NEVER_STAKED))
    }
}

#[async_trait]
impl PoolReader for MockStakingProvider {
    async fn is_paused(&self) -> Result<bool, ChainError> {
        Ok(*self.paused.lock().unwrap())
    }

    async fn pool_totals(&self) -> Result<PoolTotals, ChainError> {
        Ok(*self.totals.lock().unwrap())
    }

    async fn user_effective_vp(&self, owner: Address) -> Result<u128, ChainError> {
        Ok(self
            .user_vp
            .lock()
            .unwrap()
            .get(&owner)
            .copied()
            .unwrap_or(0))
    }
}

impl StakingProvider for MockStakingProvider {
    fn name(&self) -> &str {
        "MockStaking"
    }

    fn network(&self) -> &str {
        "mock-network"
    }
}
