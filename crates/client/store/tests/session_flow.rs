//! End-to-end session flow: refresh from a mock backend, then drive the
//! projection worker through selection and totals changes.

use std::sync::Arc;

use async_trait::async_trait;
use client_chain::{
    ChainError, MockStakingProvider, PoolReader, PoolTotals, RawStakeTuple, ScanPlan, StakeReader,
    StakingProvider,
};
use client_store::{
    BusyKind, ChangeScope, DataStatus, GlobalStats, Selection, SessionStore, StoreSyncer,
    spawn_projection_worker,
};
use staking_core::{Address, PoolConfig, StakeStatus, Tier, TierTable, TokenId};

fn owner() -> Address {
    "0xaaaabbbbccccddddeeeeffff0000111122223333"
        .parse()
        .unwrap()
}

#[tokio::test(start_paused = true)]
async fn refresh_then_selection_drives_the_projection() {
    let provider = Arc::new(MockStakingProvider::new());
    let owner = owner();
    provider.seed_stake(
        TokenId(7),
        RawStakeTuple {
            start_time: 1_700_000_000,
            unlock_time: 1_731_536_000,
            lock_months: 12,
            owner,
        },
    );
    provider.set_totals(PoolTotals {
        global_effective_vp: 9_000,
        total_staked: 4,
    });
    provider.set_user_vp(owner, 0);

    let store = Arc::new(SessionStore::new());
    let syncer = StoreSyncer::new(Arc::clone(&provider)).with_plan(ScanPlan::new(10, 5));

    let scope = syncer.refresh(&store, owner, 1_705_000_000).await;
    assert!(scope.contains(ChangeScope::CHAIN));
    assert!(scope.contains(ChangeScope::STATUS));

    let snapshot = store.snapshot();
    assert_eq!(snapshot.data_status, DataStatus::Ready);
    assert_eq!(snapshot.busy, BusyKind::Idle);
    assert_eq!(snapshot.tokens.len(), 1);
    assert_eq!(snapshot.tokens[0].token_id, TokenId(7));
    assert_eq!(snapshot.tokens[0].status, StakeStatus::Locked);
    assert_eq!(snapshot.user_stats.staked_count, 1);
    assert_eq!(snapshot.global_stats.total_effective_vp, 9_000);

    let table: TierTable = [(TokenId(7), Tier::Rare)].into_iter().collect();
    let mut view_rx =
        spawn_projection_worker(Arc::clone(&store), Arc::new(table), PoolConfig::new());

    store.set_selection(Selection {
        token_ids: vec![TokenId(7)],
        lock_months: 12,
    });

    view_rx.changed().await.unwrap();
    let view = view_rx.borrow_and_update().clone();
    assert_eq!(view.selected, 1);
    assert_eq!(view.lock_label, "12 months");
    assert!((view.preview.boost_multiplier - 2.26).abs() < 1e-12);
    assert!((view.preview.projected_pool_share - 20.071).abs() < 1e-3);

    // A totals update alone must also refresh the view.
    store.set_global_stats(GlobalStats {
        total_effective_vp: 20_000,
        total_staked: 8,
    });

    view_rx.changed().await.unwrap();
    let view = view_rx.borrow_and_update().clone();
    let expected = 2_260.0 / 22_260.0 * 100.0;
    assert!((view.preview.projected_pool_share - expected).abs() < 1e-9);
}

#[tokio::test(start_paused = true)]
async fn empty_wallet_lands_on_empty_status() {
    let provider = Arc::new(MockStakingProvider::new());
    provider.set_totals(PoolTotals {
        global_effective_vp: 9_000,
        total_staked: 4,
    });

    let store = SessionStore::new();
    let syncer = StoreSyncer::new(Arc::clone(&provider)).with_plan(ScanPlan::new(4, 2));

    syncer.refresh(&store, owner(), 0).await;

    let snapshot = store.snapshot();
    assert_eq!(snapshot.data_status, DataStatus::Empty);
    assert_eq!(snapshot.user_stats.staked_count, 0);
    assert_eq!(snapshot.global_stats.total_effective_vp, 9_000);
}

struct FailingProvider;

#[async_trait]
impl StakeReader for FailingProvider {
    async fn stake_info(&self, _token: TokenId) -> Result<RawStakeTuple, ChainError> {
        Err(ChainError::NetworkError("connection refused".into()))
    }
}

#[async_trait]
impl PoolReader for FailingProvider {
    async fn is_paused(&self) -> Result<bool, ChainError> {
        Err(ChainError::NetworkError("connection refused".into()))
    }

    async fn pool_totals(&self) -> Result<PoolTotals, ChainError> {
        Err(ChainError::NetworkError("connection refused".into()))
    }

    async fn user_effective_vp(&self, _owner: Address) -> Result<u128, ChainError> {
        Err(ChainError::NetworkError("connection refused".into()))
    }
}

impl StakingProvider for FailingProvider {
    fn name(&self) -> &str {
        "FailingStaking"
    }

    fn network(&self) -> &str {
        "mock-network"
    }
}

#[tokio::test]
async fn failed_refresh_reports_an_error_status() {
    let store = SessionStore::new();
    let syncer = StoreSyncer::new(Arc::new(FailingProvider));

    syncer.refresh(&store, owner(), 0).await;

    let snapshot = store.snapshot();
    assert_eq!(snapshot.data_status, DataStatus::Error);
    assert_eq!(snapshot.busy, BusyKind::Idle);
    assert!(snapshot.tokens.is_empty());
}
