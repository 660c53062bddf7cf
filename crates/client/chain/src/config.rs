//! Deployment configuration management.
//!
//! Deployment coordinates are stored in the environment (or a `.env` file
//! loaded by the binary):
//! - STAKING_NETWORK  - Network name (sepolia, mainnet, local)
//! - STAKING_RPC_URL  - JSON-RPC endpoint URL
//! - STAKING_CONTRACT - Deployed staking contract address
//! - STAKING_CHAIN_ID - Numeric chain id

use std::env;

use anyhow::{Context, Result};
use staking_core::Address;

/// Staking contract deployment coordinates.
#[derive(Debug, Clone)]
pub struct Deployment {
    /// Network name (e.g., "sepolia", "mainnet", "local")
    pub network: String,

    /// JSON-RPC endpoint URL
    pub rpc_url: String,

    /// Deployed staking contract address
    pub contract_address: Address,

    /// Numeric chain id of the network
    pub chain_id: u64,
}

impl Deployment {
    pub fn new(network: String, rpc_url: String, contract_address: Address, chain_id: u64) -> Self {
        Self {
            network,
            rpc_url,
            contract_address,
            chain_id,
        }
    }

    /// Load deployment coordinates from environment variables.
    pub fn from_env() -> Result<Self> {
        let network =
            env::var("STAKING_NETWORK").context("STAKING_NETWORK environment variable not set")?;

        let rpc_url =
            env::var("STAKING_RPC_URL").context("STAKING_RPC_URL environment variable not set")?;

        let contract_address = env::var("STAKING_CONTRACT")
            .context("STAKING_CONTRACT environment variable not set")?
            .parse()
            .context("STAKING_CONTRACT is not a valid address")?;

        let chain_id = env::var("STAKING_CHAIN_ID")
            .context("STAKING_CHAIN_ID environment variable not set")?
            .parse()
            .context("STAKING_CHAIN_ID is not a number")?;

        Ok(Self {
            network,
            rpc_url,
            contract_address,
            chain_id,
        })
    }

    /// Validate the loaded coordinates, reporting every problem at once.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();

        if self.network.is_empty() {
            problems.push("network name is empty".to_string());
        }
        if !self.rpc_url.starts_with("http://") && !self.rpc_url.starts_with("https://") {
            problems.push(format!(
                "rpc url {:?} is not an http(s) endpoint",
                self.rpc_url
            ));
        }
        if self.contract_address.is_zero() {
            problems.push("contract address is the zero address".to_string());
        }
        if self.chain_id == 0 {
            problems.push("chain id is zero".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deployment() -> Deployment {
        Deployment::new(
            "sepolia".to_string(),
            "https://rpc.example.org".to_string(),
            "0x00112233445566778899aabbccddeeff00112233"
                .parse()
                .unwrap(),
            11155111,
        )
    }

    #[test]
    fn well_formed_deployment_validates() {
        assert!(deployment().validate().is_ok());
    }

    #[test]
    fn validation_reports_every_problem() {
        let broken = Deployment::new(String::new(), "ftp://nope".to_string(), Address::ZERO, 0);

        let problems = broken.validate().unwrap_err();
        assert_eq!(problems.len(), 4);
    }
}
