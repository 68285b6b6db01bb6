use std::fmt;
use std::time::Duration;

use alloy::{primitives::Address, providers::DynProvider};
use anyhow::Context;
use rust_decimal::Decimal;

use crate::config::ContractAddresses;
use crate::interfaces::IERC20;
use crate::services::{lending_supplier, pool_locator, swap, token_approver};
use crate::utils::amounts::{to_base_units, USDC_DECIMALS};
use crate::utils::logger::Logger;

/// Ordered stages of a run. Transitions are strictly forward; a failure in
/// any stage past Approving ends the run at that stage, with no rollback of
/// earlier on-chain effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Approving,
    LocatingPool,
    BuildingParams,
    Swapping,
    Supplying,
}

impl Stage {
    pub const fn next(self) -> Option<Stage> {
        match self {
            Stage::Approving => Some(Stage::LocatingPool),
            Stage::LocatingPool => Some(Stage::BuildingParams),
            Stage::BuildingParams => Some(Stage::Swapping),
            Stage::Swapping => Some(Stage::Supplying),
            Stage::Supplying => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Stage::Approving => "approving",
            Stage::LocatingPool => "locating pool",
            Stage::BuildingParams => "building swap params",
            Stage::Swapping => "swapping",
            Stage::Supplying => "supplying",
        }
    }
}

/// Terminal failure record: which stage died and why. The approval stage
/// never produces one of these; its failures are logged and the run
/// continues (see `run_pipeline`).
#[derive(Debug)]
pub struct StageFailure {
    pub stage: Stage,
    pub error: anyhow::Error,
}

impl fmt::Display for StageFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} stage failed: {:#}", self.stage.name(), self.error)
    }
}

/// Run the five stages in order: approve, locate the pool, build the swap
/// request, swap, then deposit the post-swap LINK balance into the lending
/// pool.
pub async fn run_pipeline(
    contracts: &ContractAddresses,
    wallet_provider: DynProvider,
    read_provider: DynProvider,
    wallet_address: Address,
    amount: Decimal,
    confirmation_timeout: Duration,
) -> Result<(), StageFailure> {
    let fail = |stage: Stage| move |error: anyhow::Error| StageFailure { stage, error };

    // Stage 1. Policy: an unconfirmed allowance does not abort the run; a
    // missing allowance surfaces later as a swap failure.
    Logger::info(&format!("[1/5] Approving {} USDC for the swap router", amount));
    match token_approver::approve_token(
        wallet_provider.clone(),
        contracts.usdc,
        contracts.swap_router,
        amount,
        confirmation_timeout,
    )
    .await
    {
        Ok(_) => {}
        Err(error) => Logger::warning(&format!(
            "Token approval failed, continuing without a confirmed allowance: {:#}",
            error
        )),
    }

    Logger::info("[2/5] Locating the USDC/LINK pool");
    let pool_info = pool_locator::locate_pool(
        read_provider.clone(),
        contracts.uniswap_v3_factory,
        contracts.usdc,
        contracts.link,
    )
    .await
    .map_err(fail(Stage::LocatingPool))?;

    Logger::info("[3/5] Preparing swap parameters");
    let amount_in = to_base_units(amount, USDC_DECIMALS).map_err(fail(Stage::BuildingParams))?;
    let params = swap::prepare_swap_params(
        &pool_info.pool,
        wallet_address,
        contracts.usdc,
        contracts.link,
        amount_in,
    )
    .await
    .map_err(fail(Stage::BuildingParams))?;

    Logger::info("[4/5] Executing the swap");
    swap::execute_swap(
        wallet_provider.clone(),
        contracts.swap_router,
        params,
        confirmation_timeout,
    )
    .await
    .map_err(fail(Stage::Swapping))?;

    // The amount supplied is the wallet's actual LINK balance after the
    // swap, not the swap's return data.
    let link = IERC20::new(contracts.link, read_provider);
    let link_balance = link
        .balanceOf(wallet_address)
        .call()
        .await
        .context("reading LINK balance after swap")
        .map_err(fail(Stage::Supplying))?;

    Logger::info(&format!(
        "[5/5] Supplying LINK balance of {} base units to the lending pool",
        link_balance
    ));
    lending_supplier::supply(
        wallet_provider,
        contracts.aave_pool,
        contracts.link,
        link_balance,
        wallet_address,
        confirmation_timeout,
    )
    .await
    .map_err(fail(Stage::Supplying))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_advance_strictly_forward() {
        assert_eq!(Stage::Approving.next(), Some(Stage::LocatingPool));
        assert_eq!(Stage::LocatingPool.next(), Some(Stage::BuildingParams));
        assert_eq!(Stage::BuildingParams.next(), Some(Stage::Swapping));
        assert_eq!(Stage::Swapping.next(), Some(Stage::Supplying));
        assert_eq!(Stage::Supplying.next(), None);
    }

    #[test]
    fn failures_name_the_stage_that_died() {
        let failure = StageFailure {
            stage: Stage::Swapping,
            error: anyhow::anyhow!("transaction underpriced"),
        };
        assert_eq!(failure.to_string(), "swapping stage failed: transaction underpriced");
    }
}
