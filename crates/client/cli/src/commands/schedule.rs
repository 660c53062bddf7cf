//! Print the boost schedule over a range of lock lengths.

use anyhow::Result;
use clap::Parser;
use console::style;

use staking_core::{boost_multiplier, lock_label, scale_effective_vp};

/// Print the boost schedule over a range of lock lengths
#[derive(Parser)]
pub struct Schedule {
    /// First lock length to show, in months
    #[arg(long, value_name = "MONTHS", default_value_t = 0)]
    from: u32,

    /// Last lock length to show, in months
    #[arg(long, value_name = "MONTHS", default_value_t = 12)]
    to: u32,

    /// Base VP to project through the schedule (adds effective-VP columns)
    #[arg(long, value_name = "VP")]
    base_vp: Option<u64>,
}

impl Schedule {
    pub fn execute(self) -> Result<()> {
        if self.from > self.to {
            anyhow::bail!(
                "Invalid range: --from {} is after --to {}",
                self.from,
                self.to
            );
        }

        println!("{}", style("=== Boost Schedule ===").bold().green());
        println!();

        for months in self.from..=self.to {
            let boost = boost_multiplier(months);
            match self.base_vp {
                Some(base) => {
                    let boosted = base as f64 * boost;
                    println!(
                        "  {:>10}  x{:<7.3}  {:>9.2} VP  ({} effective)",
                        lock_label(months),
                        boost,
                        boosted,
                        scale_effective_vp(boosted)
                    );
                }
                None => println!("  {:>10}  x{:.3}", lock_label(months), boost),
            }
        }

        Ok(())
    }
}
