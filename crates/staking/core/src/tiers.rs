//! Token identity and the rarity-tier voting power table.

use std::collections::HashMap;
use std::fmt;

/// Unique identifier for a token in the staked collection.
///
/// Nothing here enforces uniqueness: callers that pass the same id twice
/// simply count its voting power twice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenId(pub u32);

impl TokenId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for TokenId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Rarity tier of a token. Rarer tiers carry more base voting power.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Tier {
    /// Baseline rarity, also the fallback for unassigned ids.
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Tier {
    /// Unboosted voting power granted by this tier.
    pub const fn base_voting_power(self) -> u32 {
        match self {
            Tier::Common => 1,
            Tier::Uncommon => 3,
            Tier::Rare => 10,
            Tier::Epic => 25,
            Tier::Legendary => 100,
        }
    }
}

/// Source of per-token base voting power.
///
/// Implementations map token ids to rarity tiers. Lookups are pure and
/// deterministic: ids outside the table's domain resolve to the default
/// tier ([`Tier::Common`], base voting power 1) rather than failing, so the
/// projection engine stays a total function. Callers that need to
/// distinguish unknown ids use [`VotingPowerTable::tier`] directly.
pub trait VotingPowerTable: Send + Sync {
    /// Returns the tier assigned to `token`, or `None` when the id is
    /// outside this table's domain.
    fn tier(&self, token: TokenId) -> Option<Tier>;

    /// Base (unboosted) voting power for `token`, falling back to the
    /// default tier for unassigned ids.
    fn base_voting_power(&self, token: TokenId) -> u32 {
        self.tier(token).unwrap_or_default().base_voting_power()
    }
}

/// Static voting power table backed by explicit id assignments.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierTable {
    assignments: HashMap<TokenId, Tier>,
    fallback: Tier,
}

impl TierTable {
    /// Empty table; every lookup resolves to the default tier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty table with an explicit fallback tier for unassigned ids.
    pub fn with_fallback(fallback: Tier) -> Self {
        Self {
            assignments: HashMap::new(),
            fallback,
        }
    }

    /// Table assigning the same tier to every id in `1..=total_supply`,
    /// matching how a freshly minted collection is tiered before reveal.
    pub fn uniform(total_supply: u32, tier: Tier) -> Self {
        (1..=total_supply).map(|id| (TokenId(id), tier)).collect()
    }

    /// Assigns a tier to a token id, replacing any previous assignment.
    pub fn assign(&mut self, token: TokenId, tier: Tier) {
        self.assignments.insert(token, tier);
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl FromIterator<(TokenId, Tier)> for TierTable {
    fn from_iter<I: IntoIterator<Item = (TokenId, Tier)>>(iter: I) -> Self {
        Self {
            assignments: iter.into_iter().collect(),
            fallback: Tier::default(),
        }
    }
}

impl VotingPowerTable for TierTable {
    fn tier(&self, token: TokenId) -> Option<Tier> {
        self.assignments.get(&token).copied()
    }

    fn base_voting_power(&self, token: TokenId) -> u32 {
        self.tier(token).unwrap_or(self.fallback).base_voting_power()
    }
}
