//! Staking planner binary.
//!
//! Composition root for the staking preview stack: parses flags, wires the
//! staking crates together, and prints projections. Logging goes to stderr
//! so stdout stays clean for table or JSON output.
//!
//! # Examples
//!
//! ```bash
//! # Preview staking two tokens for a year
//! stake-planner preview --tokens 7,21 --months 12 --tier 7=rare --global-vp 9000
//!
//! # Boost factors for every lock length up to two years
//! stake-planner schedule --to 24
//!
//! # Full client stack against a seeded in-memory backend
//! stake-planner session --staked 7 --tokens 21 --months 6 --global-vp 9000
//! ```

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{Preview, Schedule, Session};

/// Staking preview and reward projection tools
#[derive(Parser)]
#[command(name = "stake-planner")]
#[command(about = "Preview staking rewards before committing a lock", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Project rewards for a hypothetical stake
    Preview(Preview),

    /// Print the boost schedule over a range of lock lengths
    Schedule(Schedule),

    /// Run the full session stack against a seeded in-memory backend
    Session(Session),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (for RUST_LOG overrides)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Preview(cmd) => cmd.execute(),
        Command::Schedule(cmd) => cmd.execute(),
        Command::Session(cmd) => cmd.execute().await,
    }
}
