//! Project rewards for a hypothetical stake action.
//!
//! Runs the projection engine over flag-supplied inputs and prints the
//! outcome, without touching any backend.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use staking_core::{
    PoolConfig, PreviewEngine, PreviewRequest, StakingPreview, Tier, TokenId, lock_label,
    scale_effective_vp,
};

use crate::utils::build_tier_table;

/// Project rewards for a hypothetical stake
#[derive(Parser)]
pub struct Preview {
    /// Token ids to stake (comma-separated, e.g. "1,2,7")
    #[arg(short, long, value_name = "IDS", value_delimiter = ',')]
    tokens: Vec<u32>,

    /// Lock duration in months
    #[arg(short, long, value_name = "MONTHS", default_value_t = 1)]
    months: u32,

    /// Pool-wide effective VP before this stake
    #[arg(long, value_name = "VP", default_value_t = 0)]
    global_vp: u128,

    /// Your effective VP before this stake
    #[arg(long, value_name = "VP", default_value_t = 0)]
    user_vp: u128,

    /// Tier assignment for a token (repeatable, e.g. --tier 7=rare)
    #[arg(long = "tier", value_name = "ID=TIER")]
    tiers: Vec<String>,

    /// Tier assumed for tokens without an explicit assignment
    #[arg(long, value_name = "TIER", default_value = "common")]
    fallback_tier: Tier,

    /// Weekly points budget distributed across the pool
    #[arg(long, value_name = "POINTS", default_value_t = PoolConfig::DEFAULT_WEEKLY_POINTS_BUDGET)]
    weekly_budget: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Aligned key/value output
    Table,
    /// Full JSON output
    Json,
}

impl Preview {
    pub fn execute(self) -> Result<()> {
        let token_ids: Vec<TokenId> = self.tokens.iter().copied().map(TokenId).collect();
        let table = build_tier_table(&self.tiers, self.fallback_tier)?;
        let pool = PoolConfig::with_weekly_budget(self.weekly_budget);

        let request = PreviewRequest::new(token_ids, self.months, self.global_vp)
            .with_user_effective_vp(self.user_vp);
        let preview = PreviewEngine::new(&table, pool).preview(&request);

        match self.format {
            OutputFormat::Table => print_table(&request, &preview),
            OutputFormat::Json => print_json(&preview)?,
        }

        Ok(())
    }
}

fn print_table(request: &PreviewRequest, preview: &StakingPreview) {
    println!("{}", style("=== Staking Preview ===").bold().green());
    println!();

    println!("{}", style("Selection:").bold().yellow());
    println!("  Tokens: {}", request.token_ids.len());
    println!("  Lock: {}", lock_label(request.lock_months));
    println!("  Pool VP before: {}", request.global_effective_vp);
    if request.user_effective_vp > 0 {
        println!("  Your VP before: {}", request.user_effective_vp);
    }
    println!();

    println!("{}", style("Projection:").bold().yellow());
    println!("  Base VP: {}", preview.total_base_vp);
    println!("  Boost: x{:.2}", preview.boost_multiplier);
    println!("  Boosted VP: {:.2}", preview.boosted_vp);
    println!("  Effective VP: {}", scale_effective_vp(preview.boosted_vp));
    println!("  Pool share: {:.2}%", preview.projected_pool_share);
    println!("  Points per day: {:.1}", preview.projected_points_per_day);
}

fn print_json(preview: &StakingPreview) -> Result<()> {
    let json =
        serde_json::to_string_pretty(preview).context("Failed to serialize preview to JSON")?;
    println!("{}", json);
    Ok(())
}
