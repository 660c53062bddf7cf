//! Deterministic staking math and data types shared across clients.
//!
//! `staking-core` defines the canonical projection rules (voting power, lock
//! boost, pool share, reward rate) and exposes pure APIs that can be reused
//! by the session store, the chain boundary, and offline tools. Every
//! function here is a total mapping from arguments to values: no I/O, no
//! clock reads, no globals. Supporting crates depend on the types
//! re-exported here.
pub mod boost;
pub mod config;
pub mod format;
pub mod preview;
pub mod stake;
pub mod tiers;

pub use boost::{BOOST_LINEAR_STEP, BOOST_STACKING_STEP, boost_multiplier};
pub use config::{PoolConfig, VP_SCALE};
pub use format::{format_countdown, format_timestamp, humanize_duration, lock_label};
pub use preview::{EffectiveVp, PreviewEngine, PreviewRequest, StakingPreview, scale_effective_vp};
pub use stake::{Address, AddressParseError, StakeInfo, StakeStatus};
pub use tiers::{Tier, TierTable, TokenId, VotingPowerTable};
