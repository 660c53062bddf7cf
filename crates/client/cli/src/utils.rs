//! Shared helpers for stake-planner commands

use anyhow::{Context, Result, bail};
use staking_core::{Tier, TierTable, TokenId};

/// Parse one `ID=TIER` assignment, e.g. `7=rare`.
pub fn parse_tier_assignment(raw: &str) -> Result<(TokenId, Tier)> {
    let Some((id, tier)) = raw.split_once('=') else {
        bail!("Invalid tier assignment '{raw}', expected ID=TIER (e.g. 7=rare)");
    };

    let id: u32 = id
        .trim()
        .parse()
        .with_context(|| format!("Invalid token id in tier assignment '{raw}'"))?;
    let tier: Tier = tier
        .trim()
        .parse()
        .with_context(|| format!("Unknown tier in assignment '{raw}'"))?;

    Ok((TokenId(id), tier))
}

/// Build the tier table a command runs against from repeated `ID=TIER`
/// flags plus a fallback for everything unassigned.
pub fn build_tier_table(assignments: &[String], fallback: Tier) -> Result<TierTable> {
    let mut table = TierTable::with_fallback(fallback);
    for raw in assignments {
        let (token, tier) = parse_tier_assignment(raw)?;
        table.assign(token, tier);
    }
    Ok(table)
}

/// Get current unix timestamp in seconds.
pub fn current_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_assignments_parse_case_insensitively() {
        assert_eq!(
            parse_tier_assignment("7=rare").unwrap(),
            (TokenId(7), Tier::Rare)
        );
        assert_eq!(
            parse_tier_assignment(" 42 = Legendary ").unwrap(),
            (TokenId(42), Tier::Legendary)
        );
    }

    #[test]
    fn malformed_assignments_are_rejected() {
        assert!(parse_tier_assignment("7").is_err());
        assert!(parse_tier_assignment("x=rare").is_err());
        assert!(parse_tier_assignment("7=mythic").is_err());
    }

    #[test]
    fn built_table_layers_assignments_over_the_fallback() {
        use staking_core::VotingPowerTable;

        let table = build_tier_table(&["3=epic".to_string()], Tier::Uncommon).unwrap();

        assert_eq!(table.base_voting_power(TokenId(3)), 25);
        assert_eq!(table.base_voting_power(TokenId(4)), 3);
    }
}
