//! Staking read traits.
//!
//! Backends implement two domain traits plus the composite:
//! - StakeReader: per-token stake tuples and owner scans
//! - PoolReader: pause flag, pool totals, per-user effective VP
//! - StakingProvider: composite trait consumers depend on

use std::time::Duration;

use async_trait::async_trait;
use staking_core::{Address, StakeInfo, TokenId};

use crate::types::{PoolTotals, RawStakeTuple, ScanPlan, normalize_stake_info};

/// Pause between owner-scan batches so shared RPC endpoints are not
/// hammered with back-to-back multicalls.
pub const SCAN_BATCH_PAUSE: Duration = Duration::from_millis(250);

// ============================================================================
// Error Types
// ============================================================================

/// Chain read errors.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Backend-specific error: {0}")]
    BackendError(String),
}

// ============================================================================
// Domain Traits
// ============================================================================

/// Per-token stake reads.
#[async_trait]
pub trait StakeReader: Send + Sync {
    /// Read the raw stake tuple for one token.
    async fn stake_info(&self, token: TokenId) -> Result<RawStakeTuple, ChainError>;

    /// Read a batch of tokens (default: sequential single reads).
    ///
    /// Backends with multicall support override this with one round trip.
    async fn stake_info_batch(&self, tokens: &[TokenId]) -> Result<Vec<RawStakeTuple>, ChainError> {
        let mut tuples = Vec::with_capacity(tokens.len());
        for &token in tokens {
            tuples.push(self.stake_info(token).await?);
        }
        Ok(tuples)
    }

    /// Scan the collection for stakes currently held by `owner`.
    ///
    /// Walks the plan batch by batch, keeping records whose owner matches
    /// and whose stake has actually started, and pauses for
    /// [`SCAN_BATCH_PAUSE`] after each batch. Owner comparison is on raw
    /// address bytes, so textual case never matters.
    async fn stakes_for_owner(
        &self,
        owner: Address,
        plan: ScanPlan,
    ) -> Result<Vec<StakeInfo>, ChainError> {
        let mut stakes = Vec::new();
        for batch in plan.batches() {
            let tuples = self.stake_info_batch(&batch).await?;
            for (&token, raw) in batch.iter().zip(&tuples) {
                let info = normalize_stake_info(token, raw);
                if info.owner == owner && info.start_time > 0 {
                    stakes.push(info);
                }
            }
            tokio::time::sleep(SCAN_BATCH_PAUSE).await;
        }
        tracing::debug!(owner = %owner, found = stakes.len(), "Owner scan complete");
        Ok(stakes)
    }
}

/// Pool-wide reads.
#[async_trait]
pub trait PoolReader: Send + Sync {
    /// Whether staking is currently paused by the contract owner.
    async fn is_paused(&self) -> Result<bool, ChainError>;

    /// Current pool-wide totals.
    async fn pool_totals(&self) -> Result<PoolTotals, ChainError>;

    /// Effective VP currently attributed to `owner`.
    async fn user_effective_vp(&self, owner: Address) -> Result<u128, ChainError>;
}

// ============================================================================
// Composite Trait
// ============================================================================

/// Complete read surface of a staking deployment.
///
/// All staking backends implement this trait; consumers depend on it and
/// never on a concrete backend.
pub trait StakingProvider: StakeReader + PoolReader + Send + Sync {
    /// Backend name (e.g., "MockStaking", "JsonRpc").
    fn name(&self) -> &str;

    /// Network name (e.g., "sepolia", "mainnet", "local").
    fn network(&self) -> &str;
}
