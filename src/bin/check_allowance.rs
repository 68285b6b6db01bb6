//! Inspect the wallet's USDC balance and its current swap-router allowance.

use alloy::primitives::U256;
use anyhow::Result;

use swap_supply_bot::config::load_env;
use swap_supply_bot::interfaces::IERC20;
use swap_supply_bot::utils::amounts::format_base_units;
use swap_supply_bot::utils::providers::create_providers;

#[tokio::main]
async fn main() -> Result<()> {
    println!("🔍 Checking USDC balance and router allowance...\n");

    let env = load_env()?;
    let handles = create_providers(&env)?;

    let usdc = IERC20::new(env.contracts.usdc, handles.read_provider);
    let decimals = usdc.decimals().call().await?;
    let balance = usdc.balanceOf(handles.wallet_address).call().await?;
    let allowance = usdc
        .allowance(handles.wallet_address, env.contracts.swap_router)
        .call()
        .await?;

    println!("  Wallet:    {}", handles.wallet_address);
    println!("  💰 Balance:   {} USDC", format_base_units(balance, decimals));
    println!("  ✅ Allowance: {} USDC", format_base_units(allowance, decimals));
    println!("  📍 Spender:   {} (swap router)\n", env.contracts.swap_router);

    if allowance >= balance && allowance > U256::ZERO {
        println!("✅ Allowance covers the full balance. No action needed.");
    } else {
        println!("⚠️  Allowance is below the current balance.");
        println!("   The pipeline's approval stage will raise it on the next run.");
    }

    Ok(())
}
