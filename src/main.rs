use anyhow::Result;
use tracing_subscriber::EnvFilter;

use swap_supply_bot::config::load_env;
use swap_supply_bot::services::pipeline::run_pipeline;
use swap_supply_bot::utils::logger::Logger;
use swap_supply_bot::utils::providers::create_providers;

#[tokio::main]
async fn main() -> Result<()> {
    let env = load_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    Logger::header("USDC → LINK → Aave pipeline (Sepolia)");

    let handles = create_providers(&env)?;
    Logger::info(&format!(
        "Wallet: {}",
        Logger::format_address(&handles.wallet_address.to_string())
    ));
    Logger::info(&format!("Swap amount: {} USDC", env.swap_amount));
    Logger::separator();

    match run_pipeline(
        &env.contracts,
        handles.wallet_provider,
        handles.read_provider,
        handles.wallet_address,
        env.swap_amount,
        env.confirmation_timeout,
    )
    .await
    {
        Ok(()) => Logger::success("Pipeline completed"),
        Err(failure) => Logger::error(&format!("An error occurred: {}", failure)),
    }

    Ok(())
}
