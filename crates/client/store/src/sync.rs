//! Chain-to-store synchronization.

use std::sync::Arc;

use client_chain::{ChainError, PoolTotals, ScanPlan, StakingProvider};
use staking_core::{Address, StakeInfo};

use crate::snapshot::{BusyKind, DataStatus, GlobalStats, TokenState, UserStats};
use crate::store::{ChangeScope, SessionStore};

/// One full chain read, gathered before any store update happens.
struct Fetched {
    paused: bool,
    stakes: Vec<StakeInfo>,
    totals: PoolTotals,
    user_effective_vp: u128,
}

/// Pulls a wallet's staking state from a provider into a [`SessionStore`].
///
/// A refresh reads the pause flag, the owner's stakes, pool totals, and the
/// owner's effective VP, then applies them through the store's setters so
/// subscribers see each change as its own event.
pub struct StoreSyncer<P> {
    provider: Arc<P>,
    plan: ScanPlan,
}

impl<P: StakingProvider> StoreSyncer<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            plan: ScanPlan::default(),
        }
    }

    /// Overrides the owner-scan plan (collection size and batch width).
    pub fn with_plan(mut self, plan: ScanPlan) -> Self {
        self.plan = plan;
        self
    }

    async fn fetch(&self, owner: Address) -> Result<Fetched, ChainError> {
        let paused = self.provider.is_paused().await?;
        let stakes = self.provider.stakes_for_owner(owner, self.plan).await?;
        let totals = self.provider.pool_totals().await?;
        let user_effective_vp = self.provider.user_effective_vp(owner).await?;

        Ok(Fetched {
            paused,
            stakes,
            totals,
            user_effective_vp,
        })
    }

    /// Refreshes the store from chain state as seen at `now` (unix seconds).
    ///
    /// The store is marked loading and busy for the duration of the read.
    /// On success every chain-derived field is replaced and the data status
    /// lands on `Ready` (or `Empty` when the owner holds no stakes); on
    /// failure the existing data is left in place and the status lands on
    /// `Error`. Either way the busy flag is cleared before returning.
    pub async fn refresh(&self, store: &SessionStore, owner: Address, now: u64) -> ChangeScope {
        let mut scope =
            store.set_data_status(DataStatus::Loading) | store.set_busy(BusyKind::Fetch);

        match self.fetch(owner).await {
            Ok(fetched) => {
                let tokens: Vec<TokenState> = fetched
                    .stakes
                    .iter()
                    .map(|stake| TokenState {
                        token_id: stake.token_id,
                        stake: Some(*stake),
                        status: stake.status(now),
                    })
                    .collect();

                let status = if tokens.is_empty() {
                    DataStatus::Empty
                } else {
                    DataStatus::Ready
                };

                tracing::debug!(
                    stakes = tokens.len(),
                    global_vp = fetched.totals.global_effective_vp,
                    paused = fetched.paused,
                    "Session refresh complete"
                );

                scope |= store.set_paused(fetched.paused);
                scope |= store.set_tokens(tokens);
                scope |= store.set_user_stats(UserStats {
                    effective_vp: fetched.user_effective_vp,
                    staked_count: fetched.stakes.len() as u64,
                });
                scope |= store.set_global_stats(GlobalStats {
                    total_effective_vp: fetched.totals.global_effective_vp,
                    total_staked: fetched.totals.total_staked,
                });
                scope |= store.set_data_status(status);
            }
            Err(error) => {
                tracing::error!(
                    %error,
                    provider = self.provider.name(),
                    "Session refresh failed"
                );
                scope |= store.set_data_status(DataStatus::Error);
            }
        }

        scope |= store.set_busy(BusyKind::Idle);
        scope
    }
}
