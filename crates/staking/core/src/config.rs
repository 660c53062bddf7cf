//! Pool-wide reward constants and tunable parameters.

/// Amplification applied when converting boosted voting power into the
/// integer effective-VP unit tracked on-chain. Scaling before the floor
/// keeps fractional boost from being lost to integer truncation.
pub const VP_SCALE: u128 = 100;

/// Reward pool configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    /// Points distributed across the whole pool per week.
    pub weekly_points_budget: f64,
}

impl PoolConfig {
    pub const DEFAULT_WEEKLY_POINTS_BUDGET: f64 = 500_000.0;

    pub fn new() -> Self {
        Self {
            weekly_points_budget: Self::DEFAULT_WEEKLY_POINTS_BUDGET,
        }
    }

    pub fn with_weekly_budget(weekly_points_budget: f64) -> Self {
        Self {
            weekly_points_budget,
        }
    }

    /// Pool-wide reward rate in points per second.
    pub fn points_per_second(&self) -> f64 {
        self.weekly_points_budget / (7 * 24 * 60 * 60) as f64
    }

    /// Pool-wide reward rate normalized to one day.
    pub fn points_per_day(&self) -> f64 {
        self.points_per_second() * (60 * 60 * 24) as f64
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_budget_is_half_a_million() {
        assert_eq!(PoolConfig::new().weekly_points_budget, 500_000.0);
    }

    #[test]
    fn daily_rate_is_a_seventh_of_the_weekly_budget() {
        let pool = PoolConfig::new();
        assert!((pool.points_per_day() - 500_000.0 / 7.0).abs() < 1e-6);
        assert!((pool.points_per_day() * 7.0 - pool.weekly_points_budget).abs() < 1e-6);
    }

    #[test]
    fn custom_budget_scales_the_rate() {
        let pool = PoolConfig::with_weekly_budget(70_000.0);
        assert!((pool.points_per_day() - 10_000.0).abs() < 1e-9);
    }
}
