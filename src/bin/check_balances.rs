//! Print the wallet's balances for both pipeline tokens, using on-chain
//! symbol and decimals.

use anyhow::Result;

use swap_supply_bot::config::load_env;
use swap_supply_bot::interfaces::IERC20;
use swap_supply_bot::utils::amounts::format_base_units;
use swap_supply_bot::utils::providers::create_providers;

#[tokio::main]
async fn main() -> Result<()> {
    println!("🔍 Checking token balances...\n");

    let env = load_env()?;
    let handles = create_providers(&env)?;
    println!("  Wallet: {}\n", handles.wallet_address);

    for token_address in [env.contracts.usdc, env.contracts.link] {
        let token = IERC20::new(token_address, handles.read_provider.clone());
        let symbol = token.symbol().call().await?;
        let decimals = token.decimals().call().await?;
        let balance = token.balanceOf(handles.wallet_address).call().await?;

        println!(
            "  💰 {}: {} ({})",
            symbol,
            format_base_units(balance, decimals),
            token_address
        );
    }

    println!();
    Ok(())
}
