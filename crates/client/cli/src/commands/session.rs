//! Run the full session stack against a seeded in-memory backend.
//!
//! Seeds a mock provider from flags, refreshes a session store through the
//! syncer, then drives the projection worker with a selection. Exercises the
//! same path a wallet-connected client takes, with no network involved.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use client_chain::{MockStakingProvider, PoolTotals, RawStakeTuple, ScanPlan, StakingProvider};
use client_store::{
    ProjectionView, Selection, SessionSnapshot, SessionStore, StoreSyncer, spawn_projection_worker,
};
use staking_core::{
    Address, PoolConfig, Tier, TokenId, format_countdown, lock_label, scale_effective_vp,
};

use crate::utils::{build_tier_table, current_timestamp};

const DAY: u64 = 24 * 60 * 60;

/// Run the full session stack against a seeded in-memory backend
#[derive(Parser)]
pub struct Session {
    /// Wallet address that owns the seeded stakes
    #[arg(
        long,
        value_name = "ADDRESS",
        default_value = "0x00000000000000000000000000000000000000a1"
    )]
    wallet: Address,

    /// Token ids seeded as already staked by the wallet (comma-separated)
    #[arg(long, value_name = "IDS", value_delimiter = ',')]
    staked: Vec<u32>,

    /// Lock length of the seeded stakes, in months
    #[arg(long, value_name = "MONTHS", default_value_t = 3)]
    staked_months: u32,

    /// Token ids selected for a hypothetical new stake (comma-separated)
    #[arg(short, long, value_name = "IDS", value_delimiter = ',')]
    tokens: Vec<u32>,

    /// Lock duration in months for the selection
    #[arg(short, long, value_name = "MONTHS", default_value_t = 1)]
    months: u32,

    /// Pool-wide effective VP seeded into the backend
    #[arg(long, value_name = "VP", default_value_t = 0)]
    global_vp: u128,

    /// Wallet's effective VP seeded into the backend
    #[arg(long, value_name = "VP", default_value_t = 0)]
    user_vp: u128,

    /// Tier assignment for a token (repeatable, e.g. --tier 7=rare)
    #[arg(long = "tier", value_name = "ID=TIER")]
    tiers: Vec<String>,

    /// Tier assumed for tokens without an explicit assignment
    #[arg(long, value_name = "TIER", default_value = "common")]
    fallback_tier: Tier,

    /// Collection size scanned for the wallet's stakes
    #[arg(long, value_name = "COUNT", default_value_t = 100)]
    total_supply: u32,
}

impl Session {
    pub async fn execute(self) -> Result<()> {
        let now = current_timestamp();
        let provider = Arc::new(self.seed_provider(now));

        tracing::info!(
            backend = provider.name(),
            network = provider.network(),
            wallet = %self.wallet,
            "Refreshing session"
        );

        let store = Arc::new(SessionStore::new());
        let plan = ScanPlan::new(self.total_supply, ScanPlan::DEFAULT_BATCH_SIZE);
        let syncer = StoreSyncer::new(Arc::clone(&provider)).with_plan(plan);
        syncer.refresh(&store, self.wallet, now).await;

        let table = build_tier_table(&self.tiers, self.fallback_tier)?;
        let mut view_rx =
            spawn_projection_worker(Arc::clone(&store), Arc::new(table), PoolConfig::new());

        store.set_selection(Selection {
            token_ids: self.tokens.iter().copied().map(TokenId).collect(),
            lock_months: self.months,
        });
        view_rx
            .changed()
            .await
            .context("Projection worker stopped unexpectedly")?;
        let view = view_rx.borrow_and_update().clone();

        print_session(&store.snapshot(), &view, now);
        Ok(())
    }

    /// Builds the mock backend the session runs against.
    fn seed_provider(&self, now: u64) -> MockStakingProvider {
        let provider = MockStakingProvider::new();

        // Seeded stakes started a week ago with a 30-day month, matching the
        // deployment's lock bookkeeping.
        let start_time = now.saturating_sub(7 * DAY);
        let unlock_time = start_time + u64::from(self.staked_months) * 30 * DAY;
        for &id in &self.staked {
            provider.seed_stake(
                TokenId(id),
                RawStakeTuple {
                    start_time,
                    unlock_time,
                    lock_months: u64::from(self.staked_months),
                    owner: self.wallet,
                },
            );
        }

        provider.set_totals(PoolTotals {
            global_effective_vp: self.global_vp,
            total_staked: self.staked.len() as u64,
        });
        provider.set_user_vp(self.wallet, self.user_vp);

        provider
    }
}

fn print_session(snapshot: &SessionSnapshot, view: &ProjectionView, now: u64) {
    println!("{}", style("=== Session ===").bold().green());
    println!();

    println!("{}", style("Pool:").bold().yellow());
    println!("  Status: {}", snapshot.data_status);
    println!("  Paused: {}", snapshot.paused);
    println!(
        "  Global effective VP: {}",
        snapshot.global_stats.total_effective_vp
    );
    println!("  Tokens staked: {}", snapshot.global_stats.total_staked);
    println!();

    println!("{}", style("Your stakes:").bold().yellow());
    if snapshot.tokens.is_empty() {
        println!("  (none)");
    }
    for token in &snapshot.tokens {
        if let Some(stake) = token.stake {
            println!(
                "  {}  {}  {}",
                token.token_id,
                lock_label(stake.lock_months),
                format_countdown(stake.unlock_time, now)
            );
        }
    }
    println!(
        "  Effective VP: {} across {} stakes",
        snapshot.user_stats.effective_vp, snapshot.user_stats.staked_count
    );
    println!();

    println!("{}", style("Projection for selection:").bold().yellow());
    println!("  Tokens: {} ({})", view.selected, view.lock_label);
    println!("  Base VP: {}", view.preview.total_base_vp);
    println!("  Boost: x{:.2}", view.preview.boost_multiplier);
    println!(
        "  Effective VP: {}",
        scale_effective_vp(view.preview.boosted_vp)
    );
    println!("  Pool share: {:.2}%", view.preview.projected_pool_share);
    println!(
        "  Points per day: {:.1}",
        view.preview.projected_points_per_day
    );
}
