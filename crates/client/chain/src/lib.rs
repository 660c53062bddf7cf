//! Chain read abstraction for the staking client.
//!
//! This crate is the boundary between the pure projection engine and the
//! staking contract it previews against.
//!
//! # Architecture
//!
//! ```text
//! StakingProvider (composite trait)
//!          ├── StakeReader  (per-token stake tuples, owner scans)
//!          └── PoolReader   (pause flag, pool totals, user VP)
//! ```
//!
//! Backends implement the composite trait; everything above it (the session
//! store, the planner binary) talks to `&dyn StakingProvider` and never to
//! a concrete chain. The in-memory [`MockStakingProvider`] backs tests and
//! offline sessions.
//!
//! # Usage
//!
//! ```ignore
//! use client_chain::{ChainError, ScanPlan, StakingProvider};
//! use staking_core::Address;
//!
//! async fn load(provider: &dyn StakingProvider, owner: Address) -> Result<(), ChainError> {
//!     let paused = provider.is_paused().await?;
//!     let stakes = provider.stakes_for_owner(owner, ScanPlan::default()).await?;
//!     let totals = provider.pool_totals().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod mock;
pub mod traits;
pub mod types;

// Re-export all traits
pub use traits::{ChainError, PoolReader, SCAN_BATCH_PAUSE, StakeReader, StakingProvider};

// Re-export all types
pub use types::{PoolTotals, RawStakeTuple, ScanPlan, normalize_stake_info};

pub use config::Deployment;
pub use mock::MockStakingProvider;
