use anyhow::{Context, Result};
use regex::Regex;
use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use alloy::primitives::Address;

use super::contracts::{
    ContractAddresses, SEPOLIA_AAVE_POOL, SEPOLIA_LINK, SEPOLIA_SWAP_ROUTER,
    SEPOLIA_UNISWAP_V3_FACTORY, SEPOLIA_USDC,
};

#[derive(Debug, Clone)]
pub struct Env {
    pub rpc_url: String,
    pub private_key: String,
    /// Human-readable USDC amount swapped per run.
    pub swap_amount: Decimal,
    /// Upper bound on every mining-confirmation wait.
    pub confirmation_timeout: Duration,
    pub contracts: ContractAddresses,
}

fn is_valid_ethereum_address(address: &str) -> bool {
    let re = Regex::new(r"^0x[a-fA-F0-9]{40}$").unwrap();
    re.is_match(address)
}

fn validate_required_env() -> Result<()> {
    let required = vec!["RPC_URL", "PRIVATE_KEY"];

    let mut missing = Vec::new();
    for key in &required {
        if env::var(key).is_err() {
            missing.push(*key);
        }
    }

    if !missing.is_empty() {
        eprintln!("\n❌ Configuration Error: Missing required environment variables\n");
        eprintln!("Missing variables: {}\n", missing.join(", "));
        eprintln!("🔧 Quick fix: create a .env file with the variables above");
        eprintln!("   (see .env.example for the full list)\n");
        anyhow::bail!("Missing required environment variables: {}", missing.join(", "));
    }

    Ok(())
}

fn validate_urls() -> Result<()> {
    if let Ok(rpc_url) = env::var("RPC_URL") {
        if !rpc_url.starts_with("http") {
            eprintln!("\n❌ Invalid RPC_URL\n");
            eprintln!("Current value: {}", rpc_url);
            eprintln!("Must start with: http:// or https://\n");
            anyhow::bail!("Invalid RPC_URL: must be a valid HTTP/HTTPS URL");
        }
    }

    Ok(())
}

/// Read one contract address override, falling back to the canonical Sepolia
/// deployment when the variable is unset.
fn address_override(key: &str, default: Address) -> Result<Address> {
    match env::var(key) {
        Ok(raw) => {
            if !is_valid_ethereum_address(&raw) {
                eprintln!("\n❌ Invalid {}\n", key);
                eprintln!("Current value: {}", raw);
                eprintln!("Expected format: 0x followed by 40 hexadecimal characters\n");
                anyhow::bail!("Invalid {} address format: {}", key, raw);
            }
            raw.parse::<Address>()
                .with_context(|| format!("Invalid {}", key))
        }
        Err(_) => Ok(default),
    }
}

fn load_contracts() -> Result<ContractAddresses> {
    Ok(ContractAddresses {
        usdc: address_override("USDC_ADDRESS", SEPOLIA_USDC)?,
        link: address_override("LINK_ADDRESS", SEPOLIA_LINK)?,
        swap_router: address_override("SWAP_ROUTER_ADDRESS", SEPOLIA_SWAP_ROUTER)?,
        aave_pool: address_override("AAVE_POOL_ADDRESS", SEPOLIA_AAVE_POOL)?,
        uniswap_v3_factory: address_override(
            "UNISWAP_V3_FACTORY_ADDRESS",
            SEPOLIA_UNISWAP_V3_FACTORY,
        )?,
    })
}

pub fn load_env() -> Result<Env> {
    dotenvy::dotenv().ok(); // Load .env file if it exists

    validate_required_env()?;
    validate_urls()?;
    let contracts = load_contracts()?;

    let swap_amount = env::var("SWAP_AMOUNT_USDC").unwrap_or_else(|_| "100".to_string());
    let swap_amount = Decimal::from_str(&swap_amount).context("Invalid SWAP_AMOUNT_USDC")?;
    if swap_amount <= Decimal::ZERO {
        anyhow::bail!("Invalid SWAP_AMOUNT_USDC: must be positive");
    }

    let confirmation_timeout_secs = env::var("CONFIRMATION_TIMEOUT_SECS")
        .unwrap_or_else(|_| "180".to_string())
        .parse::<u64>()
        .context("Invalid CONFIRMATION_TIMEOUT_SECS")?;
    if confirmation_timeout_secs == 0 {
        anyhow::bail!("Invalid CONFIRMATION_TIMEOUT_SECS: must be positive");
    }

    Ok(Env {
        rpc_url: env::var("RPC_URL").context("RPC_URL is required")?,
        private_key: env::var("PRIVATE_KEY").context("PRIVATE_KEY is required")?,
        swap_amount,
        confirmation_timeout: Duration::from_secs(confirmation_timeout_secs),
        contracts,
    })
}
